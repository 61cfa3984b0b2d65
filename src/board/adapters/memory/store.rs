//! In-memory task store.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use mockable::{Clock, DefaultClock};
use tracing::{debug, warn};

use crate::board::{
    domain::{ColumnKey, TaskFields, TaskId, TaskRecord},
    ports::TaskStore,
};

/// Task store backed by a hash map.
///
/// Record timestamps come from the injected clock.
#[derive(Clone)]
pub struct InMemoryTaskStore<C = DefaultClock> {
    tasks: HashMap<TaskId, TaskRecord>,
    clock: Arc<C>,
}

impl InMemoryTaskStore<DefaultClock> {
    /// Creates an empty store using the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl Default for InMemoryTaskStore<DefaultClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> InMemoryTaskStore<C> {
    /// Creates an empty store using the given clock.
    #[must_use]
    pub fn with_clock(clock: Arc<C>) -> Self {
        Self {
            tasks: HashMap::new(),
            clock,
        }
    }

    /// Iterates over all records in no particular order.
    pub fn records(&self) -> impl Iterator<Item = &TaskRecord> {
        self.tasks.values()
    }

    fn fresh_id(&self) -> TaskId {
        loop {
            let id = TaskId::new();
            if !self.tasks.contains_key(&id) {
                return id;
            }
            warn!(task_id = %id, "generated task identifier collided, regenerating");
        }
    }
}

impl<C> fmt::Debug for InMemoryTaskStore<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryTaskStore")
            .field("tasks", &self.tasks)
            .finish_non_exhaustive()
    }
}

impl<C: Clock> TaskStore for InMemoryTaskStore<C> {
    fn create(&mut self, fields: TaskFields) -> &TaskRecord {
        let id = self.fresh_id();
        let record = TaskRecord::new(id, fields, &*self.clock);
        self.tasks.entry(id).or_insert(record)
    }

    fn update(&mut self, id: TaskId, fields: TaskFields) -> bool {
        let Some(record) = self.tasks.get_mut(&id) else {
            debug!(task_id = %id, "update ignored, task not found");
            return false;
        };
        record.replace_fields(fields, &*self.clock);
        true
    }

    fn set_category(&mut self, id: TaskId, category: ColumnKey) -> bool {
        let Some(record) = self.tasks.get_mut(&id) else {
            debug!(task_id = %id, "category change ignored, task not found");
            return false;
        };
        record.move_to(category, &*self.clock);
        true
    }

    fn delete(&mut self, id: TaskId) -> Option<TaskRecord> {
        let removed = self.tasks.remove(&id);
        if removed.is_none() {
            debug!(task_id = %id, "delete ignored, task not found");
        }
        removed
    }

    fn get(&self, id: TaskId) -> Option<&TaskRecord> {
        self.tasks.get(&id)
    }

    fn len(&self) -> usize {
        self.tasks.len()
    }
}
