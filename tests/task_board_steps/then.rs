//! Then steps for task board BDD scenarios.

use super::world::TaskBoardWorld;
use rstest_bdd_macros::then;
use taskboard::board::{
    domain::{ColumnKey, DragOutcome},
    services::BoardError,
};

fn column_titles(world: &TaskBoardWorld, column: &str) -> Result<Vec<String>, eyre::Report> {
    let key = ColumnKey::new(column)?;
    world
        .board
        .surface()
        .column_task_ids(&key)
        .into_iter()
        .map(|id| {
            world
                .board
                .task(id)
                .map(|record| record.title().to_owned())
                .ok_or_else(|| eyre::eyre!("column {column} shows unknown task {id}"))
        })
        .collect()
}

#[then(r#"column "{column}" lists "{titles}""#)]
fn column_lists(world: &TaskBoardWorld, column: String, titles: String) -> Result<(), eyre::Report> {
    let expected: Vec<String> = titles.split(',').map(|t| t.trim().to_owned()).collect();
    let actual = column_titles(world, &column)?;
    if actual != expected {
        return Err(eyre::eyre!(
            "expected column {column} to list {expected:?}, found {actual:?}"
        ));
    }
    Ok(())
}

#[then(r#"column "{column}" is empty"#)]
fn column_is_empty(world: &TaskBoardWorld, column: String) -> Result<(), eyre::Report> {
    let actual = column_titles(world, &column)?;
    if !actual.is_empty() {
        return Err(eyre::eyre!("expected column {column} to be empty, found {actual:?}"));
    }
    Ok(())
}

#[then(r#"task "{title}" shows due date "{display}""#)]
fn task_shows_due_date(
    world: &TaskBoardWorld,
    title: String,
    display: String,
) -> Result<(), eyre::Report> {
    let id = world.task_id(&title)?;
    let record = world
        .board
        .task(id)
        .ok_or_else(|| eyre::eyre!("missing record for {title}"))?;
    if record.due_date().display() != display {
        return Err(eyre::eyre!(
            "expected due date {display}, found {}",
            record.due_date().display()
        ));
    }
    Ok(())
}

#[then(r#"task "{title}" belongs to "{column}""#)]
fn task_belongs_to(world: &TaskBoardWorld, title: String, column: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&title)?;
    let record = world
        .board
        .task(id)
        .ok_or_else(|| eyre::eyre!("missing record for {title}"))?;
    let element = world
        .board
        .element_of(id)
        .copied()
        .ok_or_else(|| eyre::eyre!("missing element for {title}"))?;
    let placed = world.board.surface().column_of(element);

    if record.category().as_str() != column || placed.map(ColumnKey::as_str) != Some(column.as_str()) {
        return Err(eyre::eyre!(
            "expected {title} in {column}, record says {} and surface says {placed:?}",
            record.category()
        ));
    }
    Ok(())
}

#[then(r#"task "{title}" no longer exists"#)]
fn task_no_longer_exists(world: &TaskBoardWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&title)?;
    if world.board.task(id).is_some() || world.board.element_of(id).is_some() {
        return Err(eyre::eyre!("task {title} is still on the board"));
    }
    Ok(())
}

#[then("the operation is rejected as an unknown category")]
fn rejected_unknown_category(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    match &world.last_error {
        Some(BoardError::UnknownCategory(_)) => Ok(()),
        other => Err(eyre::eyre!("expected UnknownCategory error, got {other:?}")),
    }
}

#[then("the operation is rejected outside an edit session")]
fn rejected_outside_edit(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    match &world.last_error {
        Some(BoardError::NotEditing) => Ok(()),
        other => Err(eyre::eyre!("expected NotEditing error, got {other:?}")),
    }
}

#[then("the drag ended with a drop")]
fn drag_ended_with_drop(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    if world.last_drag != Some(DragOutcome::Dropped) {
        return Err(eyre::eyre!("expected a dropped gesture, got {:?}", world.last_drag));
    }
    Ok(())
}
