//! Task board state management.
//!
//! Owns task records, keeps each column's visual order consistent with due
//! dates, and keeps the modal form's create/edit mode in step with the
//! record being edited. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//!
//! # Examples
//!
//! ```
//! use taskboard::board::{
//!     BoardConfig,
//!     adapters::{
//!         ShortDateFormatter,
//!         memory::{InMemoryBoardSurface, InMemoryFormSurface, InMemoryTaskStore},
//!     },
//!     domain::{ColumnKey, DueDate},
//!     services::BoardController,
//! };
//!
//! let config = BoardConfig::default();
//! let surface = InMemoryBoardSurface::from_config(&config);
//! let mut board = BoardController::new(
//!     config,
//!     InMemoryTaskStore::new(),
//!     surface,
//!     InMemoryFormSurface::new(),
//!     ShortDateFormatter,
//! );
//!
//! board.open_for_create();
//! let inputs = board.form_mut().inputs_mut();
//! inputs.title = "Essay".to_owned();
//! inputs.category = "todo".to_owned();
//! inputs.due_date = "2025-03-10".to_owned();
//!
//! let id = board.submit().expect("valid form").expect("task created");
//! let task = board.task(id).expect("stored task");
//! assert_eq!(task.due_date().display(), "Mar 10, 2025");
//!
//! let todo = ColumnKey::new("todo").expect("valid key");
//! assert_eq!(board.surface().column_task_ids(&todo), vec![id]);
//! assert!(!matches!(task.due_date(), DueDate::NoDueDate));
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

pub use config::{BoardConfig, ColumnConfig, ConfigError, FormLabels};
