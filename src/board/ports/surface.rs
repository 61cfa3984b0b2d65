//! Rendering surface port: where task elements live visually.

use crate::board::domain::{ColumnKey, TaskRecord};
use std::fmt;
use std::hash::Hash;
use thiserror::Error;

/// Result type for rendering surface operations.
pub type SurfaceResult<T> = Result<T, SurfaceError>;

/// Visual board contract.
///
/// Columns are identified by the fixed key set the surface was built with.
/// Handles are opaque references to painted task elements.
pub trait RenderingSurface {
    /// Reference to a task element.
    type Handle: Clone + Eq + Hash + fmt::Debug;

    /// Paints a new, unattached element for `record`.
    fn create_task_element(&mut self, record: &TaskRecord) -> Self::Handle;

    /// Repaints an element from the record's current attributes.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::UnknownElement`] when the handle is stale.
    fn update_task_element(&mut self, handle: &Self::Handle, record: &TaskRecord)
    -> SurfaceResult<()>;

    /// Removes an element from the surface entirely.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::UnknownElement`] when the handle is stale.
    fn remove_element(&mut self, handle: &Self::Handle) -> SurfaceResult<()>;

    /// Appends an element to a column, detaching it from any other column.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::UnknownColumn`] or
    /// [`SurfaceError::UnknownElement`].
    fn append_to_column(&mut self, column: &ColumnKey, handle: &Self::Handle)
    -> SurfaceResult<()>;

    /// Detaches every child of a column and returns them in visual order.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::UnknownColumn`].
    fn detach_children(&mut self, column: &ColumnKey) -> SurfaceResult<Vec<Self::Handle>>;

    /// Re-attaches elements to a column in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::UnknownColumn`] or
    /// [`SurfaceError::UnknownElement`].
    fn reinsert_in_order(&mut self, column: &ColumnKey, ordered: Vec<Self::Handle>)
    -> SurfaceResult<()>;

    /// Toggles the transient "dragging" cue on an element.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::UnknownElement`] when the handle is stale.
    fn set_dragging(&mut self, handle: &Self::Handle, active: bool) -> SurfaceResult<()>;

    /// Toggles the transient "dragover" cue on a column.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::UnknownColumn`].
    fn set_drag_over(&mut self, column: &ColumnKey, active: bool) -> SurfaceResult<()>;
}

/// Errors returned by rendering surface adapters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SurfaceError {
    /// The column key is not part of the surface.
    #[error("unknown column: {0}")]
    UnknownColumn(ColumnKey),

    /// The element handle does not refer to a live element.
    #[error("unknown element: {0}")]
    UnknownElement(String),
}

impl SurfaceError {
    /// Builds an [`SurfaceError::UnknownElement`] from any debuggable handle.
    pub fn unknown_element(handle: &impl fmt::Debug) -> Self {
        Self::UnknownElement(format!("{handle:?}"))
    }
}
