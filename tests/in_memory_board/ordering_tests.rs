//! Due-date ordering within columns.

use crate::in_memory_board::helpers::{Board, add_task, board, inputs, titles};
use rstest::rstest;
use taskboard::board::domain::TaskId;

#[rstest]
fn column_orders_by_ascending_due_date(mut board: Board) {
    for (title, due) in [
        ("March", "2025-03-01"),
        ("Undated", ""),
        ("January", "2025-01-15"),
        ("February", "2025-02-10"),
    ] {
        add_task(&mut board, inputs(title, "todo", due)).expect("create task");
    }

    assert_eq!(
        titles(&board, "todo"),
        vec!["January", "February", "March", "Undated"]
    );
}

#[rstest]
fn no_due_date_tasks_keep_insertion_order(mut board: Board) {
    let mut first = inputs("First", "inprogress", "");
    first.no_due_date = true;
    let mut second = inputs("Second", "inprogress", "");
    second.no_due_date = true;
    add_task(&mut board, first).expect("create task");
    add_task(&mut board, inputs("Dated", "inprogress", "2025-06-01")).expect("create task");
    add_task(&mut board, second).expect("create task");

    assert_eq!(titles(&board, "inprogress"), vec!["Dated", "First", "Second"]);
}

#[rstest]
fn order_column_ranks_arbitrary_members(mut board: Board) {
    let late = add_task(&mut board, inputs("Late", "todo", "2025-09-01")).expect("create task");
    let early = add_task(&mut board, inputs("Early", "done", "2025-01-01")).expect("create task");
    let unknown = TaskId::new();

    assert_eq!(
        board.order_column([unknown, late, early]),
        vec![early, late, unknown]
    );
}
