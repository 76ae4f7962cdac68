// Integration tests for the undo/redo buffer.
//
// These tests drive the public API through realistic editing sessions and
// check the history invariants over generated operation sequences.

use proptest::prelude::*;
use wrapkit_mod_history::UndoRedoBuffer;

// ── Editing Session ────────────────────────────────────────────────────

#[test]
fn test_text_editing_session() {
    let mut text = UndoRedoBuffer::new(String::from("Hello, World!"));

    text.write(String::from("Hello"));
    text.write(String::from("Hello world"));

    assert!(text.undo());
    assert_eq!(text.current(), "Hello");
    assert!(text.undo());
    assert_eq!(text.current(), "Hello, World!");
    assert!(text.redo());
    assert_eq!(text.current(), "Hello");

    text.compact();
    assert_eq!(text.history(), &[String::from("Hello")]);
    assert!(!text.can_undo());
    assert!(!text.can_redo());
}

#[test]
fn test_cannot_redo_after_setting_value() {
    let mut text = UndoRedoBuffer::new("Hello, World!");
    text.write("Hello");
    text.write("Hello world");
    text.undo();
    assert!(text.can_redo());

    text.write("Hello world!");
    assert!(!text.can_redo());
    assert!(!text.redo());
    assert_eq!(*text.current(), "Hello world!");
}

#[test]
fn test_clear_history_mid_stack() {
    let mut text = UndoRedoBuffer::new("Hello, World!");
    for v in ["Hello, World", "Hello", "Hello world", "Hello world!"] {
        text.write(v);
    }
    text.undo();
    text.undo();
    text.undo();
    text.redo();

    assert_eq!(*text.current(), "Hello");
    assert!(text.can_undo());
    assert!(text.can_redo());

    text.compact();
    assert_eq!(*text.current(), "Hello");
    assert!(!text.can_undo());
    assert!(!text.can_redo());
}

#[test]
fn test_long_session_walk_back_and_forth() {
    let mut counter = UndoRedoBuffer::new(0u32);
    for i in 1..=1_000 {
        counter.write(i);
    }

    let mut undone = 0;
    while counter.undo() {
        undone += 1;
    }
    assert_eq!(undone, 1_000);
    assert_eq!(*counter.current(), 0);

    let mut redone = 0;
    while counter.redo() {
        redone += 1;
    }
    assert_eq!(redone, 1_000);
    assert_eq!(*counter.current(), 1_000);
}

// ── Generated Sequences ────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Op {
    Write(i32),
    Undo,
    Redo,
    Compact,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i32>().prop_map(Op::Write),
        3 => Just(Op::Undo),
        2 => Just(Op::Redo),
        1 => Just(Op::Compact),
    ]
}

proptest! {
    #[test]
    fn prop_writes_leave_no_redo(initial in any::<i32>(), values in prop::collection::vec(any::<i32>(), 1..50)) {
        let mut buf = UndoRedoBuffer::new(initial);
        for v in &values {
            buf.write(*v);
            prop_assert!(!buf.can_redo());
            prop_assert_eq!(buf.current(), v);
        }
        prop_assert_eq!(buf.len(), values.len() + 1);
    }

    #[test]
    fn prop_undo_until_boundary_then_noop(values in prop::collection::vec(any::<i32>(), 0..30)) {
        let mut buf = UndoRedoBuffer::new(-1);
        for v in &values {
            buf.write(*v);
        }
        while buf.can_undo() {
            prop_assert!(buf.undo());
        }
        let oldest = *buf.current();
        prop_assert!(!buf.undo());
        prop_assert_eq!(*buf.current(), oldest);
        prop_assert_eq!(oldest, -1);

        while buf.can_redo() {
            prop_assert!(buf.redo());
        }
        let newest = *buf.current();
        prop_assert!(!buf.redo());
        prop_assert_eq!(*buf.current(), newest);
    }

    #[test]
    fn prop_cursor_stays_in_bounds(ops in prop::collection::vec(op_strategy(), 0..100)) {
        let mut buf = UndoRedoBuffer::new(0);
        for op in ops {
            match op {
                Op::Write(v) => buf.write(v),
                Op::Undo => { buf.undo(); }
                Op::Redo => { buf.redo(); }
                Op::Compact => buf.compact(),
            }
            prop_assert!(!buf.is_empty());
            prop_assert!(buf.cursor() < buf.len());
            prop_assert_eq!(buf.can_undo(), buf.cursor() > 0);
            prop_assert_eq!(buf.can_redo(), buf.cursor() < buf.len() - 1);
        }
    }

    #[test]
    fn prop_write_after_undo_truncates(values in prop::collection::vec(any::<i32>(), 1..30), undos in 1usize..30, next in any::<i32>()) {
        let mut buf = UndoRedoBuffer::new(0);
        for v in &values {
            buf.write(*v);
        }
        for _ in 0..undos {
            buf.undo();
        }
        let kept: Vec<i32> = buf.history()[..=buf.cursor()].to_vec();
        buf.write(next);

        let mut expected = kept;
        expected.push(next);
        prop_assert_eq!(buf.history(), expected.as_slice());
        prop_assert!(!buf.can_redo());
    }

    #[test]
    fn prop_compact_preserves_current(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut buf = UndoRedoBuffer::new(0);
        for op in ops {
            match op {
                Op::Write(v) => buf.write(v),
                Op::Undo => { buf.undo(); }
                Op::Redo => { buf.redo(); }
                Op::Compact => buf.compact(),
            }
        }
        let current = *buf.current();
        buf.compact();
        prop_assert_eq!(buf.len(), 1);
        prop_assert_eq!(buf.cursor(), 0);
        prop_assert!(!buf.can_undo());
        prop_assert!(!buf.can_redo());
        prop_assert_eq!(*buf.current(), current);
    }
}
