//! Given steps for task board BDD scenarios.

use super::world::{TaskBoardWorld, dated};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::board::BoardConfig;

#[given("a board with the default columns")]
fn default_board(world: &mut TaskBoardWorld) {
    *world = TaskBoardWorld::default();
}

#[given(r#"a board without a "{column}" column"#)]
fn board_without_column(world: &mut TaskBoardWorld, column: String) -> Result<(), eyre::Report> {
    let remaining = BoardConfig::default()
        .columns()
        .iter()
        .filter(|entry| entry.key.as_str() != column)
        .cloned()
        .collect();
    let config = BoardConfig::new(remaining).wrap_err("build reduced board configuration")?;
    *world = TaskBoardWorld::with_config(config);
    Ok(())
}

#[given(r#"a task "{title}" in "{column}" due "{due_date}""#)]
fn existing_task(
    world: &mut TaskBoardWorld,
    title: String,
    column: String,
    due_date: String,
) -> Result<(), eyre::Report> {
    world
        .add_task(dated(&title, &column, &due_date))
        .wrap_err("create task in scenario setup")?;
    Ok(())
}
