//! Adapter implementations for board ports.

mod formatter;
pub mod memory;

pub use formatter::ShortDateFormatter;
