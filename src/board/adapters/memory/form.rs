//! In-memory modal form.

use crate::board::ports::{FormSurface, FormValues};

/// Form surface that keeps its inputs and chrome in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryFormSurface {
    values: FormValues,
    visible: bool,
    heading: String,
    submit_label: String,
    delete_visible: bool,
    due_date_visible: bool,
}

impl InMemoryFormSurface {
    /// Creates a hidden, empty form.
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: FormValues::default(),
            visible: false,
            heading: String::new(),
            submit_label: String::new(),
            delete_visible: false,
            due_date_visible: true,
        }
    }

    /// Returns whether the modal is open.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns the modal heading.
    #[must_use]
    pub fn heading(&self) -> &str {
        &self.heading
    }

    /// Returns the submit button label.
    #[must_use]
    pub fn submit_label(&self) -> &str {
        &self.submit_label
    }

    /// Returns whether the delete affordance is shown.
    #[must_use]
    pub const fn is_delete_visible(&self) -> bool {
        self.delete_visible
    }

    /// Returns whether the date input is shown.
    #[must_use]
    pub const fn is_due_date_visible(&self) -> bool {
        self.due_date_visible
    }

    /// Returns the current inputs without cloning.
    #[must_use]
    pub const fn current(&self) -> &FormValues {
        &self.values
    }

    /// Mutable access to the inputs, as a user typing into the form.
    pub const fn inputs_mut(&mut self) -> &mut FormValues {
        &mut self.values
    }
}

impl Default for InMemoryFormSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSurface for InMemoryFormSurface {
    fn values(&self) -> FormValues {
        self.values.clone()
    }

    fn fill(&mut self, values: &FormValues) {
        self.values = values.clone();
    }

    fn set_due_date_visible(&mut self, visible: bool) {
        self.due_date_visible = visible;
    }

    fn set_heading(&mut self, text: &str) {
        text.clone_into(&mut self.heading);
    }

    fn set_submit_label(&mut self, text: &str) {
        text.clone_into(&mut self.submit_label);
    }

    fn set_delete_visible(&mut self, visible: bool) {
        self.delete_visible = visible;
    }

    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }
}
