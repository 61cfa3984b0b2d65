//! Modal form session: create-versus-edit mode and the edited record.

use super::TaskId;
use serde::{Deserialize, Serialize};

/// Editing mode of the task form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "mode", content = "task_id", rename_all = "snake_case")]
pub enum FormMode {
    /// Submitting the form creates a new task.
    #[default]
    Create,
    /// Submitting the form replaces the fields of the given task.
    Edit(TaskId),
}

/// Transient state of the task form.
///
/// The edited identifier only exists in edit mode, so a session can never
/// claim to be editing without naming the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormSession {
    mode: FormMode,
}

impl FormSession {
    /// Creates a session in create mode.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            mode: FormMode::Create,
        }
    }

    /// Returns the current mode.
    #[must_use]
    pub const fn mode(&self) -> FormMode {
        self.mode
    }

    /// Returns the edited task, if any.
    #[must_use]
    pub const fn editing_id(&self) -> Option<TaskId> {
        match self.mode {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(id),
        }
    }

    /// Returns `true` in edit mode.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    /// Switches to edit mode for `id`.
    pub const fn begin_edit(&mut self, id: TaskId) {
        self.mode = FormMode::Edit(id);
    }

    /// Returns to create mode.
    pub const fn reset(&mut self) {
        self.mode = FormMode::Create;
    }
}
