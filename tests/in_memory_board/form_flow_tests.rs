//! Create, edit and delete flows through the modal form.

use crate::in_memory_board::helpers::{Board, add_task, board, inputs, key, titles};
use rstest::rstest;
use taskboard::board::{domain::FormMode, services::BoardError};

#[rstest]
fn created_task_is_painted_in_its_column(mut board: Board) {
    let id = add_task(&mut board, inputs("Essay", "todo", "2025-03-10")).expect("create task");

    let element = board
        .surface()
        .element_for(id)
        .expect("task should be painted");
    let card = board.surface().card(element).expect("card should exist");
    assert_eq!(card.title, "Essay");
    assert_eq!(card.course_line, "Course: MATH 201");
    assert_eq!(card.due_line, "Due: Mar 10, 2025");
    assert_eq!(card.accent_color, "#ff9900");
    assert_eq!(board.surface().column_of(element), Some(&key("todo")));
}

#[rstest]
fn editing_rewrites_the_card(mut board: Board) {
    let id = add_task(&mut board, inputs("Essay", "todo", "2025-03-10")).expect("create task");

    assert!(board.open_for_edit(id));
    assert_eq!(board.session().mode(), FormMode::Edit(id));
    assert_eq!(board.form().current().due_date, "2025-03-10");
    assert!(board.form().is_delete_visible());

    let form = board.form_mut().inputs_mut();
    form.title = "Final essay".to_owned();
    form.no_due_date = true;
    form.due_date.clear();
    assert_eq!(board.submit().expect("update task"), Some(id));

    let element = board.surface().element_for(id).expect("task should be painted");
    let card = board.surface().card(element).expect("card should exist");
    assert_eq!(card.title, "Final essay");
    assert_eq!(card.due_line, "Due: No Due Date");
    assert_eq!(board.session().mode(), FormMode::Create);
}

#[rstest]
fn deleting_removes_record_and_card(mut board: Board) {
    let keep = add_task(&mut board, inputs("Quiz", "done", "")).expect("create task");
    let doomed = add_task(&mut board, inputs("Lab", "done", "2025-02-01")).expect("create task");
    let element = board.surface().element_for(doomed).expect("task should be painted");

    assert!(board.edit_element(&element));
    assert_eq!(board.delete().expect("delete task"), Some(doomed));

    assert_eq!(board.task(doomed), None);
    assert_eq!(board.surface().card(element), None);
    assert_eq!(titles(&board, "done"), vec!["Quiz"]);
    assert!(board.task(keep).is_some());
    assert!(!board.form().is_visible());
}

#[rstest]
fn empty_due_date_reads_not_specified(mut board: Board) {
    let id = add_task(&mut board, inputs("Reading", "inprogress", "")).expect("create task");

    let element = board.surface().element_for(id).expect("task should be painted");
    let card = board.surface().card(element).expect("card should exist");
    assert_eq!(card.due_line, "Due: Not specified");
}

#[rstest]
fn rejected_submission_keeps_the_modal_open(mut board: Board) {
    board.open_for_create();
    *board.form_mut().inputs_mut() = inputs("Essay", "todo", "2025-13-40");

    let result = board.submit();

    assert!(matches!(result, Err(BoardError::Domain(_))));
    assert!(board.form().is_visible());
    assert_eq!(board.surface().element_count(), 0);
}
