//! Store port: the single source of truth for task records.

use crate::board::domain::{ColumnKey, TaskFields, TaskId, TaskRecord};

/// Task record storage contract.
///
/// The store owns records only. Placing elements on the rendering surface
/// is the caller's job.
pub trait TaskStore {
    /// Inserts a record under a freshly generated identifier and returns
    /// the stored record.
    ///
    /// The identifier is unique among live records and never reused for
    /// another record.
    fn create(&mut self, fields: TaskFields) -> &TaskRecord;

    /// Replaces every mutable field of an existing record.
    ///
    /// Returns `false` without side effects when `id` is absent.
    fn update(&mut self, id: TaskId, fields: TaskFields) -> bool;

    /// Changes the column of an existing record.
    ///
    /// Returns `false` without side effects when `id` is absent.
    fn set_category(&mut self, id: TaskId, category: ColumnKey) -> bool;

    /// Removes a record, returning it when it existed.
    fn delete(&mut self, id: TaskId) -> Option<TaskRecord>;

    /// Looks up a record.
    fn get(&self, id: TaskId) -> Option<&TaskRecord>;

    /// Returns the number of live records.
    fn len(&self) -> usize;

    /// Returns `true` when `id` names a live record.
    fn contains(&self, id: TaskId) -> bool {
        self.get(id).is_some()
    }

    /// Returns `true` when the store holds no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
