//! In-memory adapters for every board port.

mod form;
mod store;
mod surface;

pub use form::InMemoryFormSurface;
pub use store::InMemoryTaskStore;
pub use surface::{ElementId, InMemoryBoardSurface, TaskCard};
