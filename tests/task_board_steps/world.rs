//! Shared world state for task board BDD scenarios.

use std::collections::HashMap;

use rstest::fixture;
use taskboard::board::{
    BoardConfig,
    adapters::{
        ShortDateFormatter,
        memory::{InMemoryBoardSurface, InMemoryFormSurface, InMemoryTaskStore},
    },
    domain::{DragOutcome, TaskId},
    ports::FormValues,
    services::{BoardController, BoardError},
};

/// Controller type used by the BDD world.
pub type TestBoard =
    BoardController<InMemoryTaskStore, InMemoryBoardSurface, InMemoryFormSurface, ShortDateFormatter>;

/// Scenario world for task board behaviour tests.
pub struct TaskBoardWorld {
    pub board: TestBoard,
    pub tasks: HashMap<String, TaskId>,
    pub last_error: Option<BoardError>,
    pub last_drag: Option<DragOutcome>,
}

impl TaskBoardWorld {
    /// Creates a world around a board built from `config`.
    #[must_use]
    pub fn with_config(config: BoardConfig) -> Self {
        let surface = InMemoryBoardSurface::from_config(&config);
        Self {
            board: BoardController::new(
                config,
                InMemoryTaskStore::new(),
                surface,
                InMemoryFormSurface::new(),
                ShortDateFormatter,
            ),
            tasks: HashMap::new(),
            last_error: None,
            last_drag: None,
        }
    }

    /// Looks up a task created earlier in the scenario.
    ///
    /// # Errors
    ///
    /// Returns an error if no task with that title was created.
    pub fn task_id(&self, title: &str) -> Result<TaskId, eyre::Report> {
        self.tasks
            .get(title)
            .copied()
            .ok_or_else(|| eyre::eyre!("no task titled {title} in scenario world"))
    }

    /// Adds a task through the modal form and remembers it by title.
    ///
    /// # Errors
    ///
    /// Returns an error if the submission is rejected.
    pub fn add_task(&mut self, values: FormValues) -> Result<TaskId, eyre::Report> {
        let title = values.title.clone();
        self.board.open_for_create();
        *self.board.form_mut().inputs_mut() = values;
        let id = self
            .board
            .submit()?
            .ok_or_else(|| eyre::eyre!("submission for {title} created nothing"))?;
        self.tasks.insert(title, id);
        Ok(id)
    }
}

impl Default for TaskBoardWorld {
    fn default() -> Self {
        Self::with_config(BoardConfig::default())
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskBoardWorld {
    TaskBoardWorld::default()
}

/// Form inputs for a task due on `due_date`.
pub fn dated(title: &str, category: &str, due_date: &str) -> FormValues {
    FormValues {
        title: title.to_owned(),
        category: category.to_owned(),
        due_date: due_date.to_owned(),
        ..FormValues::default()
    }
}
