//! Port contracts for the task board.
//!
//! Ports define the surfaces the board controller talks to without knowing
//! how they are implemented.

pub mod form;
pub mod formatter;
pub mod store;
pub mod surface;

pub use form::{FormSurface, FormValues};
pub use formatter::DateFormatter;
pub use store::TaskStore;
pub use surface::{RenderingSurface, SurfaceError, SurfaceResult};
