//! Application services for board orchestration.

mod controller;
mod events;

pub use controller::{BoardController, BoardError, BoardResult};
pub use events::{BoardEvent, BoardEvents, EventOutcome};
