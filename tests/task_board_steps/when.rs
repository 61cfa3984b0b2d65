//! When steps for task board BDD scenarios.

use super::world::{TaskBoardWorld, dated};
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when(r#"I add a task "{title}" to "{column}" due "{due_date}""#)]
fn add_dated_task(
    world: &mut TaskBoardWorld,
    title: String,
    column: String,
    due_date: String,
) -> Result<(), eyre::Report> {
    world.add_task(dated(&title, &column, &due_date))?;
    Ok(())
}

#[when(r#"I add a task "{title}" to "{column}" with no due date"#)]
fn add_undated_task(
    world: &mut TaskBoardWorld,
    title: String,
    column: String,
) -> Result<(), eyre::Report> {
    let mut values = dated(&title, &column, "");
    values.no_due_date = true;
    world.add_task(values)?;
    Ok(())
}

#[when(r#"I move task "{title}" to "{column}""#)]
fn move_task(world: &mut TaskBoardWorld, title: String, column: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&title)?;
    world.last_error = world.board.move_task(id, &column).err();
    Ok(())
}

#[when(r#"I change the category of task "{title}" to "{column}""#)]
fn change_category(
    world: &mut TaskBoardWorld,
    title: String,
    column: String,
) -> Result<(), eyre::Report> {
    let id = world.task_id(&title)?;
    if !world.board.open_for_edit(id) {
        return Err(eyre::eyre!("task {title} could not be opened for editing"));
    }
    world.board.form_mut().inputs_mut().category = column;
    world.board.submit().wrap_err("submit category change")?;
    Ok(())
}

#[when(r#"I drag task "{title}" onto "{column}""#)]
fn drag_task(world: &mut TaskBoardWorld, title: String, column: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&title)?;
    let element = world
        .board
        .element_of(id)
        .copied()
        .ok_or_else(|| eyre::eyre!("task {title} has no element"))?;

    world.board.drag_start(&element)?;
    world.board.drag_enter(&column)?;
    world.board.drop_on(&column)?;
    world.last_drag = world.board.drag_end()?;
    Ok(())
}

#[when("I open the add form and press delete")]
fn delete_in_create_mode(world: &mut TaskBoardWorld) {
    world.board.open_for_create();
    world.last_error = world.board.delete().err();
}

#[when(r#"I edit task "{title}" and press delete"#)]
fn delete_edited_task(world: &mut TaskBoardWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&title)?;
    if !world.board.open_for_edit(id) {
        return Err(eyre::eyre!("task {title} could not be opened for editing"));
    }
    world.board.delete().wrap_err("delete edited task")?;
    Ok(())
}
