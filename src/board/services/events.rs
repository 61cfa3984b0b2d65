//! Event adaptation: maps user-interface events onto controller calls.
//!
//! Hosts forward raw UI events here. Failures never escape as errors; they
//! are logged and the event is reported as not applied.

use tracing::warn;

use super::controller::BoardController;
use crate::board::{
    domain::{DragOutcome, TaskId},
    ports::{DateFormatter, FormSurface, RenderingSurface, TaskStore},
};

/// A user-interface event on the board page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent<H> {
    /// The "add task" button was clicked.
    AddClicked,
    /// The edit button on a task element was clicked.
    EditClicked(H),
    /// The modal's close button was clicked.
    CloseClicked,
    /// The backdrop around the modal was clicked.
    BackdropClicked,
    /// The "no due date" toggle changed.
    NoDueDateToggled(bool),
    /// The form was submitted with every required field present.
    Submitted,
    /// The delete affordance was clicked.
    DeleteClicked,
    /// A drag started on an element.
    DragStarted(H),
    /// The pointer entered a column while dragging.
    DragEntered(String),
    /// The pointer left a column while dragging.
    DragLeft(String),
    /// Something was dropped on a column.
    Dropped(String),
    /// The drag gesture ended, dropped or not.
    DragEnded,
}

impl<H> BoardEvent<H> {
    /// Returns a short name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddClicked => "add_clicked",
            Self::EditClicked(_) => "edit_clicked",
            Self::CloseClicked => "close_clicked",
            Self::BackdropClicked => "backdrop_clicked",
            Self::NoDueDateToggled(_) => "no_due_date_toggled",
            Self::Submitted => "submitted",
            Self::DeleteClicked => "delete_clicked",
            Self::DragStarted(_) => "drag_started",
            Self::DragEntered(_) => "drag_entered",
            Self::DragLeft(_) => "drag_left",
            Self::Dropped(_) => "dropped",
            Self::DragEnded => "drag_ended",
        }
    }
}

/// What an event changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// The event was applied without touching a particular task.
    Applied,
    /// The event created, updated, moved or deleted this task.
    Task(TaskId),
    /// A drag gesture finished.
    DragFinished(DragOutcome),
    /// The event was a no-op or was rejected.
    Ignored,
}

/// Thin adapter between a host's event loop and the controller.
pub struct BoardEvents<S, R, F, D>
where
    S: TaskStore,
    R: RenderingSurface,
    F: FormSurface,
    D: DateFormatter,
{
    controller: BoardController<S, R, F, D>,
}

impl<S, R, F, D> BoardEvents<S, R, F, D>
where
    S: TaskStore,
    R: RenderingSurface,
    F: FormSurface,
    D: DateFormatter,
{
    /// Wraps a controller.
    #[must_use]
    pub const fn new(controller: BoardController<S, R, F, D>) -> Self {
        Self { controller }
    }

    /// Returns the wrapped controller.
    #[must_use]
    pub const fn controller(&self) -> &BoardController<S, R, F, D> {
        &self.controller
    }

    /// Mutable access to the wrapped controller.
    pub const fn controller_mut(&mut self) -> &mut BoardController<S, R, F, D> {
        &mut self.controller
    }

    /// Unwraps the controller.
    #[must_use]
    pub fn into_inner(self) -> BoardController<S, R, F, D> {
        self.controller
    }

    /// Runs one event to completion.
    pub fn dispatch(&mut self, event: BoardEvent<R::Handle>) -> EventOutcome {
        let name = event.name();
        let controller = &mut self.controller;
        let result = match event {
            BoardEvent::AddClicked => {
                controller.open_for_create();
                Ok(EventOutcome::Applied)
            }
            BoardEvent::EditClicked(handle) => Ok(applied_if(controller.edit_element(&handle))),
            BoardEvent::CloseClicked | BoardEvent::BackdropClicked => {
                controller.close();
                Ok(EventOutcome::Applied)
            }
            BoardEvent::NoDueDateToggled(active) => {
                controller.toggle_no_due_date(active);
                Ok(EventOutcome::Applied)
            }
            BoardEvent::Submitted => controller
                .submit()
                .map(|task| task.map_or(EventOutcome::Ignored, EventOutcome::Task)),
            BoardEvent::DeleteClicked => controller
                .delete()
                .map(|task| task.map_or(EventOutcome::Ignored, EventOutcome::Task)),
            BoardEvent::DragStarted(handle) => controller.drag_start(&handle).map(applied_if),
            BoardEvent::DragEntered(column) => controller.drag_enter(&column).map(applied_if),
            BoardEvent::DragLeft(column) => controller.drag_leave(&column).map(applied_if),
            BoardEvent::Dropped(column) => {
                let payload = controller.drag_payload();
                controller.drop_on(&column).map(|moved| match payload {
                    Some(task) if moved => EventOutcome::Task(task),
                    _ => EventOutcome::Ignored,
                })
            }
            BoardEvent::DragEnded => controller
                .drag_end()
                .map(|outcome| outcome.map_or(EventOutcome::Ignored, EventOutcome::DragFinished)),
        };

        result.unwrap_or_else(|err| {
            warn!(event = name, error = %err, "board event rejected");
            EventOutcome::Ignored
        })
    }
}

const fn applied_if(applied: bool) -> EventOutcome {
    if applied {
        EventOutcome::Applied
    } else {
        EventOutcome::Ignored
    }
}
