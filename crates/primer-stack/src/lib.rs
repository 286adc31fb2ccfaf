//! # primer-stack: LIFO container for `primer`
//!
//! [`Stack`] is a single-owner, last-in first-out container. Removal and
//! inspection of the top element are fallible: on an empty stack they return
//! [`StackError::Empty`] instead of `None`, so callers have to handle the
//! empty case explicitly.
//!
//! # Example
//!
//! ```
//! use primer_stack::{Stack, StackError};
//!
//! let mut stack = Stack::new();
//! stack.push(1);
//! stack.push(2);
//!
//! assert_eq!(stack.peek(), Ok(&2));
//! assert_eq!(stack.pop(), Ok(2));
//! assert_eq!(stack.len(), 1);
//!
//! stack.clear();
//! assert_eq!(stack.pop(), Err(StackError::Empty));
//! ```

use thiserror::Error;
use tracing::trace;

/// Errors returned by stack operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    /// The operation needs at least one element.
    #[error("stack is empty")]
    Empty,
}

/// Result type for stack operations.
pub type Result<T> = std::result::Result<T, StackError>;

/// A last-in, first-out stack.
///
/// Elements are pushed onto and popped from the top. The stack grows
/// without limit; [`Stack::with_capacity`] only pre-allocates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    /// Backing storage. The top of the stack is the last element.
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty stack with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Pushes `item` onto the top of the stack.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
        trace!(len = self.items.len(), "stack push");
    }

    /// Removes and returns the top element.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Empty`] if the stack has no elements.
    pub fn pop(&mut self) -> Result<T> {
        let item = self.items.pop().ok_or(StackError::Empty)?;
        trace!(len = self.items.len(), "stack pop");
        Ok(item)
    }

    /// Returns a reference to the top element without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Empty`] if the stack has no elements.
    pub fn peek(&self) -> Result<&T> {
        self.items.last().ok_or(StackError::Empty)
    }

    /// Returns a mutable reference to the top element.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Empty`] if the stack has no elements.
    pub fn peek_mut(&mut self) -> Result<&mut T> {
        self.items.last_mut().ok_or(StackError::Empty)
    }

    /// Returns the number of elements on the stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the stack holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates from the top of the stack to the bottom.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.items.iter().rev()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Pushes the items in iteration order, so the last item ends on top.
impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

/// Consumes the stack, yielding elements in pop order.
impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = std::iter::Rev<std::vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter().rev()
    }
}

#[cfg(test)]
mod tests;
