//! In-memory rendering surface.
//!
//! Keeps a painted card per task element and the child order of every
//! column, which makes visual placement observable in tests and lets a
//! host that renders elsewhere mirror the board state.

use std::collections::HashMap;

use crate::board::{
    config::BoardConfig,
    domain::{ColumnKey, TaskId, TaskRecord},
    ports::{RenderingSurface, SurfaceError, SurfaceResult},
};

/// Handle of an element on the in-memory surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
    /// Returns the raw element number.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// What a task element shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCard {
    /// Task the card was painted from.
    pub task_id: TaskId,
    /// Bold heading.
    pub title: String,
    /// Paragraph text.
    pub description: String,
    /// `Course: <course>` line.
    pub course_line: String,
    /// `Due: <display>` line.
    pub due_line: String,
    /// Left border tint.
    pub accent_color: String,
    /// Whether the "dragging" cue is applied.
    pub dragging: bool,
}

impl TaskCard {
    fn paint(record: &TaskRecord) -> Self {
        Self {
            task_id: record.id(),
            title: record.title().to_owned(),
            description: record.description().to_owned(),
            course_line: format!("Course: {}", record.course()),
            due_line: format!("Due: {}", record.due_date().display()),
            accent_color: record.color().to_owned(),
            dragging: false,
        }
    }
}

#[derive(Debug, Clone)]
struct ColumnView {
    key: ColumnKey,
    children: Vec<ElementId>,
    drag_over: bool,
}

/// Rendering surface held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoardSurface {
    columns: Vec<ColumnView>,
    elements: HashMap<ElementId, TaskCard>,
    next_element: u64,
}

impl InMemoryBoardSurface {
    /// Creates a surface with the given columns, in display order.
    #[must_use]
    pub fn new(columns: impl IntoIterator<Item = ColumnKey>) -> Self {
        Self {
            columns: columns
                .into_iter()
                .map(|key| ColumnView {
                    key,
                    children: Vec::new(),
                    drag_over: false,
                })
                .collect(),
            elements: HashMap::new(),
            next_element: 0,
        }
    }

    /// Creates a surface with the configured columns.
    #[must_use]
    pub fn from_config(config: &BoardConfig) -> Self {
        Self::new(config.column_keys().cloned())
    }

    /// Returns the children of a column in visual order.
    #[must_use]
    pub fn children(&self, column: &ColumnKey) -> Option<&[ElementId]> {
        self.column(column).map(|view| view.children.as_slice())
    }

    /// Returns the tasks shown in a column, in visual order.
    #[must_use]
    pub fn column_task_ids(&self, column: &ColumnKey) -> Vec<TaskId> {
        self.children(column)
            .unwrap_or_default()
            .iter()
            .filter_map(|element| self.elements.get(element))
            .map(|card| card.task_id)
            .collect()
    }

    /// Returns the column currently holding an element.
    #[must_use]
    pub fn column_of(&self, element: ElementId) -> Option<&ColumnKey> {
        self.columns
            .iter()
            .find(|view| view.children.contains(&element))
            .map(|view| &view.key)
    }

    /// Returns the painted card of an element.
    #[must_use]
    pub fn card(&self, element: ElementId) -> Option<&TaskCard> {
        self.elements.get(&element)
    }

    /// Returns the element painted for a task.
    #[must_use]
    pub fn element_for(&self, task: TaskId) -> Option<ElementId> {
        self.elements
            .iter()
            .find(|(_, card)| card.task_id == task)
            .map(|(element, _)| *element)
    }

    /// Returns whether a column shows the "dragover" cue.
    #[must_use]
    pub fn is_drag_over(&self, column: &ColumnKey) -> bool {
        self.column(column).is_some_and(|view| view.drag_over)
    }

    /// Returns the number of live elements, attached or not.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    fn column(&self, key: &ColumnKey) -> Option<&ColumnView> {
        self.columns.iter().find(|view| &view.key == key)
    }

    fn column_mut(&mut self, key: &ColumnKey) -> SurfaceResult<&mut ColumnView> {
        self.columns
            .iter_mut()
            .find(|view| &view.key == key)
            .ok_or_else(|| SurfaceError::UnknownColumn(key.clone()))
    }

    fn ensure_element(&self, element: ElementId) -> SurfaceResult<()> {
        if self.elements.contains_key(&element) {
            Ok(())
        } else {
            Err(SurfaceError::unknown_element(&element))
        }
    }

    fn detach(&mut self, element: ElementId) {
        for view in &mut self.columns {
            view.children.retain(|child| *child != element);
        }
    }
}

impl RenderingSurface for InMemoryBoardSurface {
    type Handle = ElementId;

    fn create_task_element(&mut self, record: &TaskRecord) -> ElementId {
        self.next_element += 1;
        let element = ElementId(self.next_element);
        self.elements.insert(element, TaskCard::paint(record));
        element
    }

    fn update_task_element(&mut self, handle: &ElementId, record: &TaskRecord) -> SurfaceResult<()> {
        let card = self
            .elements
            .get_mut(handle)
            .ok_or_else(|| SurfaceError::unknown_element(handle))?;
        let dragging = card.dragging;
        *card = TaskCard {
            dragging,
            ..TaskCard::paint(record)
        };
        Ok(())
    }

    fn remove_element(&mut self, handle: &ElementId) -> SurfaceResult<()> {
        self.elements
            .remove(handle)
            .ok_or_else(|| SurfaceError::unknown_element(handle))?;
        self.detach(*handle);
        Ok(())
    }

    fn append_to_column(&mut self, column: &ColumnKey, handle: &ElementId) -> SurfaceResult<()> {
        self.ensure_element(*handle)?;
        self.column_mut(column)?;
        self.detach(*handle);
        self.column_mut(column)?.children.push(*handle);
        Ok(())
    }

    fn detach_children(&mut self, column: &ColumnKey) -> SurfaceResult<Vec<ElementId>> {
        Ok(std::mem::take(&mut self.column_mut(column)?.children))
    }

    fn reinsert_in_order(&mut self, column: &ColumnKey, ordered: Vec<ElementId>) -> SurfaceResult<()> {
        self.column_mut(column)?;
        for element in &ordered {
            self.ensure_element(*element)?;
        }
        for element in &ordered {
            self.detach(*element);
        }
        self.column_mut(column)?.children.extend(ordered);
        Ok(())
    }

    fn set_dragging(&mut self, handle: &ElementId, active: bool) -> SurfaceResult<()> {
        let card = self
            .elements
            .get_mut(handle)
            .ok_or_else(|| SurfaceError::unknown_element(handle))?;
        card.dragging = active;
        Ok(())
    }

    fn set_drag_over(&mut self, column: &ColumnKey, active: bool) -> SurfaceResult<()> {
        self.column_mut(column)?.drag_over = active;
        Ok(())
    }
}
