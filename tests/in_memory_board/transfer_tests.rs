//! Moving tasks between columns.

use crate::in_memory_board::helpers::{Board, add_task, board, inputs, key, titles};
use rstest::rstest;
use taskboard::board::{domain::DragOutcome, services::BoardError};

#[rstest]
fn dropped_task_joins_destination_in_due_order(mut board: Board) {
    add_task(&mut board, inputs("Early", "done", "2025-01-01")).expect("create task");
    add_task(&mut board, inputs("Undated", "done", "")).expect("create task");
    let moving = add_task(&mut board, inputs("Middle", "todo", "2025-04-01")).expect("create task");
    let element = board.surface().element_for(moving).expect("task should be painted");

    board.drag_start(&element).expect("start drag");
    board.drag_enter("done").expect("enter column");
    assert!(board.drop_on("done").expect("drop task"));
    assert_eq!(board.drag_end().expect("end drag"), Some(DragOutcome::Dropped));

    assert_eq!(titles(&board, "done"), vec!["Early", "Middle", "Undated"]);
    assert!(titles(&board, "todo").is_empty());
    let record = board.task(moving).expect("record should exist");
    assert_eq!(record.category(), &key("done"));
    assert!(record.updated_at() >= record.created_at());
}

#[rstest]
fn move_into_current_column_keeps_record_and_order(mut board: Board) {
    let id = add_task(&mut board, inputs("Essay", "todo", "2025-03-10")).expect("create task");
    add_task(&mut board, inputs("Quiz", "todo", "2025-04-10")).expect("create task");
    let before = board.task(id).cloned();

    assert!(board.move_task(id, "todo").expect("move task"));
    assert_eq!(board.task(id).cloned(), before);
    assert_eq!(titles(&board, "todo"), vec!["Essay", "Quiz"]);
}

#[rstest]
fn move_to_unconfigured_column_is_rejected(mut board: Board) {
    let id = add_task(&mut board, inputs("Essay", "todo", "2025-03-10")).expect("create task");

    let result = board.move_task(id, "archive");

    assert!(matches!(result, Err(BoardError::UnknownCategory(raw)) if raw == "archive"));
    assert_eq!(titles(&board, "todo"), vec!["Essay"]);
}
