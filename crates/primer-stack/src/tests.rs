//! Unit tests for primer-stack

use proptest::prelude::*;
use test_case::test_case;

use crate::{Stack, StackError};

// ============================================================================
// Basic Operations
// ============================================================================

#[test]
fn new_stack_is_empty() {
    let stack: Stack<i32> = Stack::new();
    assert!(stack.is_empty());
    assert_eq!(stack.len(), 0);
}

#[test]
fn push_increases_len() {
    let mut stack = Stack::new();
    stack.push(1);
    stack.push(2);

    assert_eq!(stack.len(), 2);
    assert!(!stack.is_empty());
}

#[test]
fn pop_returns_last_pushed() {
    let mut stack = Stack::new();
    stack.push(1);
    stack.push(2);

    assert_eq!(stack.pop(), Ok(2));
    assert_eq!(stack.len(), 1);
}

#[test]
fn peek_does_not_remove() {
    let mut stack = Stack::new();
    stack.push(1);
    stack.push(2);

    assert_eq!(stack.peek(), Ok(&2));
    assert_eq!(stack.peek(), Ok(&2));
    assert_eq!(stack.len(), 2);
}

#[test]
fn peek_mut_modifies_top() {
    let mut stack = Stack::new();
    stack.push(String::from("a"));
    stack.peek_mut().unwrap().push('b');

    assert_eq!(stack.pop().unwrap(), "ab");
}

#[test]
fn clear_empties_stack() {
    let mut stack = Stack::new();
    stack.push(1);
    stack.push(2);

    stack.clear();

    assert_eq!(stack.len(), 0);
    assert!(stack.is_empty());
    assert_eq!(stack.pop(), Err(StackError::Empty));
}

#[test]
fn stack_is_reusable_after_clear() {
    let mut stack = Stack::new();
    stack.push(1);
    stack.clear();
    stack.push(7);

    assert_eq!(stack.peek(), Ok(&7));
}

#[test_case(0, 0 => true; "never pushed")]
#[test_case(1, 0 => false; "one pushed")]
#[test_case(3, 3 => true; "fully drained")]
#[test_case(3, 2 => false; "partially drained")]
fn is_empty_after(pushes: usize, pops: usize) -> bool {
    let mut stack = Stack::new();
    for i in 0..pushes {
        stack.push(i);
    }
    for _ in 0..pops {
        stack.pop().unwrap();
    }
    stack.is_empty()
}

// ============================================================================
// Empty-State Errors
// ============================================================================

#[test]
fn pop_on_empty_stack_fails() {
    let mut stack: Stack<i32> = Stack::new();
    assert_eq!(stack.pop(), Err(StackError::Empty));
}

#[test]
fn peek_on_empty_stack_fails() {
    let mut stack: Stack<i32> = Stack::new();
    assert_eq!(stack.peek(), Err(StackError::Empty));
    assert_eq!(stack.peek_mut(), Err(StackError::Empty));
}

#[test]
fn pop_after_draining_fails() {
    let mut stack = Stack::new();
    stack.push(1);
    stack.pop().unwrap();

    assert_eq!(stack.pop(), Err(StackError::Empty));
}

#[test]
fn empty_error_message_mentions_empty() {
    let message = StackError::Empty.to_string();
    assert!(message.to_lowercase().contains("empty"), "{message}");
}

// ============================================================================
// Iteration
// ============================================================================

#[test]
fn iter_runs_top_to_bottom() {
    let stack: Stack<_> = [1, 2, 3].into_iter().collect();
    let seen: Vec<_> = stack.iter().copied().collect();
    assert_eq!(seen, vec![3, 2, 1]);
}

#[test]
fn into_iter_yields_pop_order() {
    let mut stack = Stack::with_capacity(4);
    stack.extend(["a", "b", "c"]);
    let drained: Vec<_> = stack.into_iter().collect();
    assert_eq!(drained, vec!["c", "b", "a"]);
}

#[test]
fn from_iter_puts_last_item_on_top() {
    let stack: Stack<_> = (1..=5).collect();
    assert_eq!(stack.peek(), Ok(&5));
    assert_eq!(stack.len(), 5);
}

// ============================================================================
// Property-Based Tests
// ============================================================================

proptest! {
    #[test]
    fn pop_reverses_push_order(items in prop::collection::vec(any::<i64>(), 0..64)) {
        let mut stack = Stack::new();
        for item in &items {
            stack.push(*item);
        }

        let mut popped = Vec::with_capacity(items.len());
        while let Ok(item) = stack.pop() {
            popped.push(item);
        }

        let mut expected = items.clone();
        expected.reverse();
        prop_assert_eq!(popped, expected);
        prop_assert!(stack.is_empty());
    }

    #[test]
    fn len_tracks_pushes_and_pops(pushes in 0usize..64, pops in 0usize..64) {
        let mut stack = Stack::new();
        for i in 0..pushes {
            stack.push(i);
        }
        let mut failures = 0;
        for _ in 0..pops {
            if stack.pop().is_err() {
                failures += 1;
            }
        }

        prop_assert_eq!(stack.len(), pushes.saturating_sub(pops));
        prop_assert_eq!(failures, pops.saturating_sub(pushes));
        prop_assert_eq!(stack.is_empty(), stack.len() == 0);
    }

    #[test]
    fn peek_matches_last_push(items in prop::collection::vec(any::<u8>(), 1..32)) {
        let stack: Stack<_> = items.iter().copied().collect();
        prop_assert_eq!(stack.peek().copied(), Ok(*items.last().unwrap()));
    }
}
