//! Taskboard: in-memory state management for a single-page task board.
//!
//! Users create, edit, delete and drag tasks between category columns
//! through a modal form; each column stays ordered by due date.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board logic with no rendering dependencies
//! - **Ports**: Abstract trait interfaces for the store and the page surfaces
//! - **Adapters**: Concrete implementations of ports (in-memory, formatting)
//!
//! # Modules
//!
//! - [`board`]: Task records, due-date ordering, form sessions and drag
//!   transfer

pub mod board;
