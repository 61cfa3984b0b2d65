//! Form input port: the modal used to create and edit tasks.

use serde::{Deserialize, Serialize};

/// Raw values of the form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    /// Title input.
    pub title: String,
    /// Category select value (a column key).
    pub category: String,
    /// Description textarea.
    pub description: String,
    /// Course input.
    pub course: String,
    /// Colour picker value.
    pub color: String,
    /// Date input value, `YYYY-MM-DD` or empty.
    pub due_date: String,
    /// "No due date" toggle.
    pub no_due_date: bool,
}

/// Modal form contract.
///
/// Required-field enforcement belongs to the surface: the controller only
/// hears about submits of complete forms.
pub trait FormSurface {
    /// Reads every input.
    fn values(&self) -> FormValues;

    /// Writes every input.
    fn fill(&mut self, values: &FormValues);

    /// Shows or hides the date input.
    fn set_due_date_visible(&mut self, visible: bool);

    /// Sets the modal heading.
    fn set_heading(&mut self, text: &str);

    /// Sets the submit button label.
    fn set_submit_label(&mut self, text: &str);

    /// Shows or hides the delete affordance.
    fn set_delete_visible(&mut self, visible: bool);

    /// Opens the modal.
    fn show(&mut self);

    /// Closes the modal.
    fn hide(&mut self);
}
