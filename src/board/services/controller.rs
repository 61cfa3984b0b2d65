//! Board controller: the single entry point for every board mutation.
//!
//! Each operation validates its input first, then mutates the store, then
//! repaints and re-orders the affected column. A rejected operation leaves
//! store, surface and form session as they were.

use std::collections::HashMap;

use thiserror::Error;
use tracing::{debug, error, warn};

use crate::board::{
    config::BoardConfig,
    domain::{
        BoardDomainError, ColumnKey, DragGesture, DragOutcome, DueDate, FormMode, FormSession,
        SortKey, TaskFields, TaskId, TaskRecord, format_calendar_date, order_by_due_date,
        parse_calendar_date,
    },
    ports::{DateFormatter, FormSurface, FormValues, RenderingSurface, SurfaceError, TaskStore},
};

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardError {
    /// The requested column is not configured.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// Delete was requested while the form is in create mode.
    #[error("delete is only available while editing a task")]
    NotEditing,

    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),

    /// The rendering surface rejected an operation.
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

/// Result type for board controller operations.
pub type BoardResult<T> = Result<T, BoardError>;

/// Orchestrates tasks, their visual placement and the modal form.
pub struct BoardController<S, R, F, D>
where
    S: TaskStore,
    R: RenderingSurface,
    F: FormSurface,
    D: DateFormatter,
{
    config: BoardConfig,
    store: S,
    surface: R,
    form: F,
    formatter: D,
    session: FormSession,
    elements: HashMap<TaskId, R::Handle>,
    owners: HashMap<R::Handle, TaskId>,
    drag: DragGesture<R::Handle>,
}

impl<S, R, F, D> BoardController<S, R, F, D>
where
    S: TaskStore,
    R: RenderingSurface,
    F: FormSurface,
    D: DateFormatter,
{
    /// Creates a controller over an empty board.
    #[must_use]
    pub fn new(config: BoardConfig, store: S, surface: R, form: F, formatter: D) -> Self {
        Self {
            config,
            store,
            surface,
            form,
            formatter,
            session: FormSession::new(),
            elements: HashMap::new(),
            owners: HashMap::new(),
            drag: DragGesture::default(),
        }
    }

    /// Returns the board configuration.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns the task store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Returns the rendering surface.
    #[must_use]
    pub const fn surface(&self) -> &R {
        &self.surface
    }

    /// Returns the form surface.
    #[must_use]
    pub const fn form(&self) -> &F {
        &self.form
    }

    /// Mutable access to the form surface, for input the user types.
    pub const fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    /// Returns the form session.
    #[must_use]
    pub const fn session(&self) -> FormSession {
        self.session
    }

    /// Looks up a task record.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&TaskRecord> {
        self.store.get(id)
    }

    /// Returns the element painted for a task.
    #[must_use]
    pub fn element_of(&self, id: TaskId) -> Option<&R::Handle> {
        self.elements.get(&id)
    }

    /// Returns the task an element was painted for.
    #[must_use]
    pub fn task_at(&self, handle: &R::Handle) -> Option<TaskId> {
        self.owners.get(handle).copied()
    }

    /// Returns the task carried by the drag gesture in progress.
    #[must_use]
    pub const fn drag_payload(&self) -> Option<TaskId> {
        self.drag.payload()
    }

    /// Orders the given tasks by ascending due date.
    ///
    /// Tasks absent from the store sort as if they had no due date. Ties
    /// keep the order of `members`.
    #[must_use]
    pub fn order_column(&self, members: impl IntoIterator<Item = TaskId>) -> Vec<TaskId> {
        order_by_due_date(members.into_iter().collect(), |id| {
            self.store.get(*id).map_or(SortKey::LAST, TaskRecord::sort_key)
        })
    }

    /// Opens the modal in create mode with every input cleared.
    pub fn open_for_create(&mut self) {
        self.reset_form();
        self.form.show();
    }

    /// Opens the modal in edit mode, populated from the task.
    ///
    /// Returns `false` and changes nothing when the task does not exist.
    pub fn open_for_edit(&mut self, id: TaskId) -> bool {
        let Some(record) = self.store.get(id) else {
            debug!(task_id = %id, "edit ignored, task not found");
            return false;
        };
        let values = edit_values(record);

        self.session.begin_edit(id);
        self.form.fill(&values);
        self.form.set_due_date_visible(!values.no_due_date);
        let labels = self.config.labels();
        self.form.set_heading(&labels.edit_heading);
        self.form.set_submit_label(&labels.edit_submit);
        self.form.set_delete_visible(true);
        self.form.show();
        true
    }

    /// Opens the edit modal for the task behind an element's edit button.
    pub fn edit_element(&mut self, handle: &R::Handle) -> bool {
        let Some(id) = self.task_at(handle) else {
            debug!(element = ?handle, "edit ignored, element is not a task");
            return false;
        };
        self.open_for_edit(id)
    }

    /// Applies the "no due date" toggle.
    ///
    /// Turning it on hides and empties the date input. Turning it off shows
    /// the input again without restoring an earlier value.
    pub fn toggle_no_due_date(&mut self, active: bool) {
        let mut values = self.form.values();
        values.no_due_date = active;
        if active {
            values.due_date.clear();
        }
        self.form.fill(&values);
        self.form.set_due_date_visible(!active);
    }

    /// Closes the modal and resets the session to create mode.
    pub fn close(&mut self) {
        self.form.hide();
        self.reset_form();
    }

    /// Submits the form.
    ///
    /// Creates a task in create mode or replaces the edited task's fields in
    /// edit mode, then closes the modal. Returns the affected task, or
    /// `None` when the edited task no longer exists.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownCategory`] or [`BoardError::Domain`] for
    /// invalid input, in which case nothing changes and the modal stays
    /// open, and [`BoardError::Surface`] when the surface rejects placement.
    pub fn submit(&mut self) -> BoardResult<Option<TaskId>> {
        let values = self.form.values();
        let fields = self.fields_from(&values)?;
        let affected = match self.session.mode() {
            FormMode::Create => Some(self.create_task(fields)?),
            FormMode::Edit(id) => self.update_task(id, fields)?,
        };
        self.close();
        Ok(affected)
    }

    /// Deletes the task being edited and closes the modal.
    ///
    /// Returns `None` when the edited task no longer exists.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotEditing`] in create mode and
    /// [`BoardError::Surface`] when the element cannot be removed. Neither
    /// touches the store or the session.
    pub fn delete(&mut self) -> BoardResult<Option<TaskId>> {
        let Some(id) = self.session.editing_id() else {
            warn!("delete rejected outside an edit session");
            return Err(BoardError::NotEditing);
        };

        if let Some(handle) = self.elements.get(&id).cloned() {
            self.surface.remove_element(&handle)?;
            self.untrack(id);
        }
        let removed = self.store.delete(id);
        self.close();

        if removed.is_some() {
            debug!(task_id = %id, "task deleted");
            Ok(Some(id))
        } else {
            Ok(None)
        }
    }

    /// Moves a task to another column and re-orders that column.
    ///
    /// The source column keeps its order. Returns `false` when the task
    /// does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownCategory`] when the destination is not
    /// configured and [`BoardError::Surface`] when the surface rejects
    /// placement. The record keeps its category in both cases.
    pub fn move_task(&mut self, id: TaskId, destination: &str) -> BoardResult<bool> {
        let destination = self.resolve_column(destination)?;
        let Some(handle) = self
            .elements
            .get(&id)
            .cloned()
            .filter(|_| self.store.contains(id))
        else {
            debug!(task_id = %id, "move ignored, task not found");
            return Ok(false);
        };

        self.surface.append_to_column(&destination, &handle)?;
        self.store.set_category(id, destination.clone());
        self.reorder_column(&destination)?;
        debug!(task_id = %id, category = %destination, "task moved");
        Ok(true)
    }

    /// Starts a drag gesture from an element.
    ///
    /// Returns `false` when the element is not a task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Surface`] when the cue cannot be applied.
    pub fn drag_start(&mut self, handle: &R::Handle) -> BoardResult<bool> {
        let Some(id) = self.task_at(handle) else {
            debug!(element = ?handle, "drag ignored, element is not a task");
            return Ok(false);
        };

        self.surface.set_dragging(handle, true)?;
        if let Some(stale) = self.drag.start(id, handle.clone()) {
            if stale != *handle && self.owners.contains_key(&stale) {
                if let Err(err) = self.surface.set_dragging(&stale, false) {
                    warn!(element = ?stale, error = %err, "could not clear stale drag cue");
                }
            }
        }
        Ok(true)
    }

    /// Applies the "dragover" cue to a column the pointer entered.
    ///
    /// Returns `false` when the target is not a configured column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Surface`] when the cue cannot be applied.
    pub fn drag_enter(&mut self, column: &str) -> BoardResult<bool> {
        self.set_drag_over(column, true)
    }

    /// Clears the "dragover" cue from a column the pointer left.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Surface`] when the cue cannot be cleared.
    pub fn drag_leave(&mut self, column: &str) -> BoardResult<bool> {
        self.set_drag_over(column, false)
    }

    /// Delivers the drag payload to a column.
    ///
    /// Clears the column's "dragover" cue and moves the carried task there.
    /// Returns `false` when no gesture is in progress or the task vanished.
    /// A drop on a target that is not a configured column keeps the payload,
    /// so a gesture ending there is reported as cancelled.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownCategory`] for an unconfigured target
    /// and the errors of [`BoardController::move_task`].
    pub fn drop_on(&mut self, column: &str) -> BoardResult<bool> {
        if self.drag.payload().is_none() {
            self.set_drag_over(column, false)?;
            debug!(column, "drop ignored, no drag in progress");
            return Ok(false);
        }
        let destination = self.resolve_column(column)?;
        self.surface.set_drag_over(&destination, false)?;
        let Some(id) = self.drag.accept_drop() else {
            return Ok(false);
        };
        self.move_task(id, destination.as_str())
    }

    /// Ends the drag gesture, clearing the source element's cue.
    ///
    /// Returns how the gesture ended, or `None` when none was in progress.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Surface`] when the cue cannot be cleared.
    pub fn drag_end(&mut self) -> BoardResult<Option<DragOutcome>> {
        let Some((source, outcome)) = self.drag.finish() else {
            return Ok(None);
        };
        if self.owners.contains_key(&source) {
            self.surface.set_dragging(&source, false)?;
        }
        if outcome == DragOutcome::Cancelled {
            debug!(element = ?source, "drag cancelled");
        }
        Ok(Some(outcome))
    }

    fn create_task(&mut self, fields: TaskFields) -> BoardResult<TaskId> {
        let category = fields.category.clone();
        let record = self.store.create(fields);
        let id = record.id();
        let handle = self.surface.create_task_element(record);

        if let Err(err) = self.surface.append_to_column(&category, &handle) {
            error!(task_id = %id, %category, error = %err, "could not place new task, rolling back");
            self.store.delete(id);
            if let Err(cleanup) = self.surface.remove_element(&handle) {
                warn!(task_id = %id, error = %cleanup, "could not remove orphaned element");
            }
            return Err(err.into());
        }

        self.track(id, handle);
        self.reorder_column(&category)?;
        debug!(task_id = %id, %category, "task created");
        Ok(id)
    }

    fn update_task(&mut self, id: TaskId, fields: TaskFields) -> BoardResult<Option<TaskId>> {
        let previous_category = self.store.get(id).map(|record| record.category().clone());
        let (Some(previous_category), Some(handle)) =
            (previous_category, self.elements.get(&id).cloned())
        else {
            debug!(task_id = %id, "update ignored, task not found");
            return Ok(None);
        };
        let destination = fields.category.clone();

        if previous_category != destination {
            self.surface.append_to_column(&destination, &handle)?;
        }
        if !self.store.update(id, fields) {
            return Ok(None);
        }
        if let Some(record) = self.store.get(id) {
            self.surface.update_task_element(&handle, record)?;
        }
        self.reorder_column(&destination)?;
        debug!(task_id = %id, category = %destination, "task updated");
        Ok(Some(id))
    }

    fn fields_from(&self, values: &FormValues) -> BoardResult<TaskFields> {
        let category = self.resolve_column(&values.category)?;
        let due_date = self.resolve_due_date(values)?;
        Ok(TaskFields {
            title: values.title.clone(),
            category,
            description: values.description.clone(),
            course: values.course.clone(),
            color: values.color.clone(),
            due_date,
        })
    }

    fn resolve_column(&self, raw: &str) -> BoardResult<ColumnKey> {
        self.config.find_column(raw).cloned().ok_or_else(|| {
            error!(category = raw, "unknown category, operation aborted");
            BoardError::UnknownCategory(raw.to_owned())
        })
    }

    fn resolve_due_date(&self, values: &FormValues) -> BoardResult<DueDate> {
        if values.no_due_date {
            return Ok(DueDate::NoDueDate);
        }
        let raw = values.due_date.trim();
        if raw.is_empty() {
            return Ok(DueDate::NotSpecified);
        }
        parse_calendar_date(raw)
            .and_then(|date| DueDate::scheduled(date, self.formatter.format(date)))
            .map_err(|err| {
                error!(due_date = raw, error = %err, "invalid due date, operation aborted");
                err.into()
            })
    }

    fn set_drag_over(&mut self, column: &str, active: bool) -> BoardResult<bool> {
        let Some(key) = self.config.find_column(column) else {
            debug!(column, "drag cue ignored, not a column");
            return Ok(false);
        };
        self.surface.set_drag_over(key, active)?;
        Ok(true)
    }

    fn reorder_column(&mut self, column: &ColumnKey) -> BoardResult<()> {
        let children = self.surface.detach_children(column)?;
        let ordered = order_by_due_date(children, |handle| self.sort_key_of(handle));
        self.surface.reinsert_in_order(column, ordered)?;
        Ok(())
    }

    fn sort_key_of(&self, handle: &R::Handle) -> SortKey {
        self.owners
            .get(handle)
            .and_then(|id| self.store.get(*id))
            .map_or(SortKey::LAST, TaskRecord::sort_key)
    }

    fn reset_form(&mut self) {
        self.session.reset();
        let blank = FormValues {
            category: self
                .config
                .column_keys()
                .next()
                .map(ToString::to_string)
                .unwrap_or_default(),
            ..FormValues::default()
        };
        self.form.fill(&blank);
        self.form.set_due_date_visible(true);
        let labels = self.config.labels();
        self.form.set_heading(&labels.create_heading);
        self.form.set_submit_label(&labels.create_submit);
        self.form.set_delete_visible(false);
    }

    fn track(&mut self, id: TaskId, handle: R::Handle) {
        self.owners.insert(handle.clone(), id);
        self.elements.insert(id, handle);
    }

    fn untrack(&mut self, id: TaskId) -> Option<R::Handle> {
        let handle = self.elements.remove(&id)?;
        self.owners.remove(&handle);
        Some(handle)
    }
}

/// Form inputs that reproduce a record when submitted unchanged.
fn edit_values(record: &TaskRecord) -> FormValues {
    let (due_date, no_due_date) = match record.due_date() {
        DueDate::NoDueDate => (String::new(), true),
        DueDate::NotSpecified => (String::new(), false),
        scheduled @ DueDate::Scheduled { .. } => (
            scheduled
                .calendar_date()
                .map(format_calendar_date)
                .unwrap_or_default(),
            false,
        ),
    };

    FormValues {
        title: record.title().to_owned(),
        category: record.category().to_string(),
        description: record.description().to_owned(),
        course: record.course().to_owned(),
        color: record.color().to_owned(),
        due_date,
        no_due_date,
    }
}
