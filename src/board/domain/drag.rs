//! Drag transfer gesture state.
//!
//! A gesture carries exactly one task identifier from drag start to drag
//! end. The payload never outlives the gesture.

use super::TaskId;

/// How a finished gesture ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragOutcome {
    /// The task was dropped on a column target.
    Dropped,
    /// The gesture ended without an accepted drop.
    Cancelled,
}

/// Per-gesture state machine, generic over the rendering handle of the
/// dragged element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragGesture<H> {
    /// No gesture in progress.
    Idle,
    /// A task element is being dragged.
    Dragging {
        /// Transfer payload.
        task: TaskId,
        /// Element showing the "dragging" cue.
        source: H,
    },
    /// The payload was delivered to a column; waiting for drag end.
    Dropped {
        /// Delivered payload.
        task: TaskId,
        /// Element showing the "dragging" cue.
        source: H,
    },
}

impl<H> Default for DragGesture<H> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<H> DragGesture<H> {
    /// Starts a gesture.
    ///
    /// Returns the source element of an unfinished previous gesture so its
    /// visual cue can be cleared.
    pub fn start(&mut self, task: TaskId, source: H) -> Option<H> {
        let previous = std::mem::replace(self, Self::Dragging { task, source });
        previous.into_source()
    }

    /// Returns the carried task while dragging.
    #[must_use]
    pub const fn payload(&self) -> Option<TaskId> {
        match self {
            Self::Dragging { task, .. } => Some(*task),
            Self::Idle | Self::Dropped { .. } => None,
        }
    }

    /// Returns `true` while a gesture is in progress.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Accepts a drop and hands out the payload.
    ///
    /// Only the first drop of a gesture yields the payload.
    pub fn accept_drop(&mut self) -> Option<TaskId> {
        match std::mem::take(self) {
            Self::Dragging { task, source } => {
                *self = Self::Dropped { task, source };
                Some(task)
            }
            other => {
                *self = other;
                None
            }
        }
    }

    /// Ends the gesture, returning the source element and how it ended.
    pub fn finish(&mut self) -> Option<(H, DragOutcome)> {
        match std::mem::take(self) {
            Self::Idle => None,
            Self::Dragging { source, .. } => Some((source, DragOutcome::Cancelled)),
            Self::Dropped { source, .. } => Some((source, DragOutcome::Dropped)),
        }
    }

    fn into_source(self) -> Option<H> {
        match self {
            Self::Idle => None,
            Self::Dragging { source, .. } | Self::Dropped { source, .. } => Some(source),
        }
    }
}
