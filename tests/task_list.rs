//! End-to-end checks of the list controller driven through rows and intents,
//! the way both front ends use it.

use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use todo::model::task::{Task, TaskId};
use todo::ops::task_ops::{AddOutcome, Decision, Notice, RemovalRequest, TaskList, apply_intent};
use todo::ops::task_row::TaskRow;

fn snapshot(list: &TaskList) -> Vec<Task> {
    list.tasks().to_vec()
}

fn add(list: &mut TaskList, title: &str) -> TaskId {
    let mut notices: Vec<Notice> = Vec::new();
    match list.add_task(title.to_string(), &mut notices) {
        AddOutcome::Added(id) => id,
        AddOutcome::Duplicate => panic!("unexpected duplicate: {}", title),
    }
}

#[test]
fn test_many_distinct_adds() {
    let mut list = TaskList::new();
    for n in 0..200 {
        add(&mut list, &format!("task {}", n));
    }
    assert_eq!(list.task_count(), 200);

    let ids: Vec<i64> = list.tasks().iter().map(|t| t.id.0).collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_toggle_pairs_leave_list_unchanged() {
    let mut list = TaskList::new();
    let ids: Vec<TaskId> = ["a", "b", "c", "d"].iter().map(|t| add(&mut list, t)).collect();
    list.toggle_done(ids[2]);
    let before = snapshot(&list);

    for id in &ids {
        list.toggle_done(*id);
        list.toggle_done(*id);
    }
    assert_eq!(snapshot(&list), before);
}

#[test]
fn test_operations_on_removed_id_are_noops() {
    let mut list = TaskList::new();
    let keep = add(&mut list, "keep");
    let gone = add(&mut list, "gone");

    let mut pending: Option<RemovalRequest> = None;
    list.remove_task(gone, &mut pending);
    assert!(list.resolve_removal(pending.take().unwrap(), Decision::Confirm));
    assert!(list.get(gone).is_none());

    let before = snapshot(&list);
    let revision = list.revision();
    assert!(!list.toggle_done(gone));
    assert!(!list.rename_task(gone, "back".into()));
    list.remove_task(gone, &mut pending);
    if let Some(request) = pending.take() {
        assert!(!list.resolve_removal(request, Decision::Confirm));
    }
    assert_eq!(snapshot(&list), before);
    assert_eq!(list.revision(), revision);
    assert!(list.get(keep).is_some());
}

#[test]
fn test_row_edit_flow_through_controller() {
    let mut list = TaskList::new();
    let changes = Rc::new(RefCell::new(0));
    let seen = Rc::clone(&changes);
    list.subscribe(move |_| *seen.borrow_mut() += 1);

    let id = add(&mut list, "Buy milk");
    let mut row = TaskRow::new(list.get(id).unwrap());

    // Cancelled edit: nothing reaches the controller
    row.start_edit(list.get(id).unwrap());
    row.buffer_mut().unwrap().insert_str(" and eggs");
    row.cancel_edit(list.get(id).unwrap());
    assert_eq!(list.get(id).unwrap().title, "Buy milk");
    assert_eq!(*changes.borrow(), 1);

    // Committed edit: one rename
    row.start_edit(list.get(id).unwrap());
    row.buffer_mut().unwrap().insert_str(" and eggs");
    let intent = row.commit_edit().unwrap();
    let mut pending: Option<RemovalRequest> = None;
    apply_intent(&mut list, intent, &mut pending);
    assert_eq!(list.get(id).unwrap().title, "Buy milk and eggs");
    assert_eq!(*changes.borrow(), 2);
    assert!(!row.is_editing());

    // Delete asks first, then removes on confirm
    let intent = row.request_delete().unwrap();
    apply_intent(&mut list, intent, &mut pending);
    assert_eq!(list.task_count(), 1);
    list.resolve_removal(pending.take().unwrap(), Decision::Confirm);
    assert!(list.is_empty());
    assert_eq!(*changes.borrow(), 3);
}
