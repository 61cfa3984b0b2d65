//! Domain model for the task board.
//!
//! Holds the task record, due-date ordering, the form session and the drag
//! gesture. Nothing here knows about rendering or input surfaces.

mod drag;
mod due_date;
mod error;
mod ids;
mod ordering;
mod session;
mod task;

pub use drag::{DragGesture, DragOutcome};
pub use due_date::{
    DueDate, SortKey, format_calendar_date, local_midnight_millis, parse_calendar_date,
};
pub use error::BoardDomainError;
pub use ids::{ColumnKey, TaskId};
pub use ordering::order_by_due_date;
pub use session::{FormMode, FormSession};
pub use task::{TaskFields, TaskRecord};
