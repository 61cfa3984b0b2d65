//! Task record and the attribute set written by the task form.

use super::{ColumnKey, DueDate, SortKey, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Mutable attributes of a task, replaced wholesale on every edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFields {
    /// Task title.
    pub title: String,
    /// Column the task belongs to.
    pub category: ColumnKey,
    /// Free-form description.
    pub description: String,
    /// Course the task is for.
    pub course: String,
    /// Display tint used for the card accent.
    pub color: String,
    /// Due date and its ordering key.
    pub due_date: DueDate,
}

impl TaskFields {
    /// Creates fields with a title and category; everything else empty and
    /// no due date specified.
    #[must_use]
    pub fn new(title: impl Into<String>, category: ColumnKey) -> Self {
        Self {
            title: title.into(),
            category,
            description: String::new(),
            course: String::new(),
            color: String::new(),
            due_date: DueDate::NotSpecified,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the course.
    #[must_use]
    pub fn with_course(mut self, course: impl Into<String>) -> Self {
        self.course = course.into();
        self
    }

    /// Sets the display tint.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Sets the due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: DueDate) -> Self {
        self.due_date = due_date;
        self
    }
}

/// A task on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    id: TaskId,
    fields: TaskFields,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TaskRecord {
    /// Creates a new record with the given identifier.
    #[must_use]
    pub fn new(id: TaskId, fields: TaskFields, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id,
            fields,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns all mutable attributes.
    #[must_use]
    pub const fn fields(&self) -> &TaskFields {
        &self.fields
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.fields.title
    }

    /// Returns the column key.
    #[must_use]
    pub const fn category(&self) -> &ColumnKey {
        &self.fields.category
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.fields.description
    }

    /// Returns the course.
    #[must_use]
    pub fn course(&self) -> &str {
        &self.fields.course
    }

    /// Returns the display tint.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.fields.color
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> &DueDate {
        &self.fields.due_date
    }

    /// Returns the column ordering key.
    #[must_use]
    pub const fn sort_key(&self) -> SortKey {
        self.fields.due_date.sort_key()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces every mutable attribute.
    ///
    /// Returns `false` and leaves the record untouched, timestamps included,
    /// when the new fields equal the current ones.
    pub fn replace_fields(&mut self, fields: TaskFields, clock: &impl Clock) -> bool {
        if self.fields == fields {
            return false;
        }
        self.fields = fields;
        self.touch(clock);
        true
    }

    /// Moves the record to another column.
    ///
    /// Returns `false` when the record already belongs to `category`.
    pub fn move_to(&mut self, category: ColumnKey, clock: &impl Clock) -> bool {
        if self.fields.category == category {
            return false;
        }
        self.fields.category = category;
        self.touch(clock);
        true
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
