//! Unit tests for Todo and SharedTodo.
//!
//! These tests cover the record's state transitions, its rendering, and the
//! aliasing behavior of shared handles.

#![cfg(feature = "todo")]

use todors::todo::{SharedTodo, Todo};

use rstest::rstest;

// =============================================================================
// Todo: construction and state transitions
// =============================================================================

#[rstest]
fn test_new_todo_has_title_and_is_not_done() {
    let todo = Todo::new("Buy milk");
    assert_eq!(todo.title(), "Buy milk");
    assert!(!todo.is_done());
}

#[rstest]
fn test_mark_done_sets_the_flag() {
    let mut todo = Todo::new("Buy milk");
    todo.mark_done();
    assert!(todo.is_done());
}

#[rstest]
fn test_mark_done_is_idempotent() {
    let mut todo = Todo::new("Buy milk");
    todo.mark_done();
    todo.mark_done();
    assert!(todo.is_done());
}

#[rstest]
fn test_mark_undone_clears_the_flag() {
    let mut todo = Todo::new("Buy milk");
    todo.mark_done();
    todo.mark_undone();
    assert!(!todo.is_done());
}

#[rstest]
fn test_mark_undone_is_idempotent() {
    let mut todo = Todo::new("Buy milk");
    todo.mark_undone();
    todo.mark_undone();
    assert!(!todo.is_done());
}

// =============================================================================
// Todo: rendering
// =============================================================================

#[rstest]
fn test_undone_todo_renders_with_empty_marker() {
    let todo = Todo::new("Buy milk");
    assert_eq!(todo.to_string(), "[ ] Buy milk");
}

#[rstest]
fn test_done_todo_renders_with_x_marker() {
    let mut todo = Todo::new("Buy milk");
    todo.mark_done();
    assert_eq!(todo.to_string(), "[X] Buy milk");
}

// =============================================================================
// SharedTodo: aliasing
// =============================================================================

#[rstest]
fn test_cloned_handle_aliases_the_same_record() {
    let todo = SharedTodo::new("Clean room");
    let alias = todo.clone();

    alias.mark_done();

    assert!(todo.is_done());
    assert!(todo.ptr_eq(&alias));
}

#[rstest]
fn test_handles_to_distinct_records_are_not_ptr_eq() {
    let todo = SharedTodo::new("Clean room");
    let twin = SharedTodo::new("Clean room");

    assert!(!todo.ptr_eq(&twin));
    assert_eq!(todo, twin);

    twin.mark_done();
    assert_ne!(todo, twin);
}

#[rstest]
fn test_shared_todo_renders_like_its_record() {
    let todo = SharedTodo::new("Go to the gym");
    assert_eq!(todo.to_string(), "[ ] Go to the gym");

    todo.mark_done();
    assert_eq!(todo.to_string(), "[X] Go to the gym");
}

#[rstest]
fn test_snapshot_detaches_from_the_shared_record() {
    let todo = SharedTodo::new("Go to the gym");
    let mut snapshot = todo.snapshot();

    snapshot.mark_done();
    assert!(!todo.is_done());

    todo.mark_done();
    assert_eq!(snapshot, todo.snapshot());
}

#[rstest]
fn test_shared_todo_from_existing_record_keeps_state() {
    let mut record = Todo::new("Feed the cats");
    record.mark_done();

    let todo = SharedTodo::from(record);
    assert!(todo.is_done());
    assert_eq!(&*todo.title(), "Feed the cats");
}
