//! LIFO stack

use crate::traits::Container;

/// A last-in, first-out stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty stack with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements on the stack
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the stack is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes an element onto the top of the stack
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Pushes every element of `items` in order; the last one ends up on top
    pub fn push_all<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.items.extend(items);
    }

    /// Returns the most recently pushed element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Removes and returns the most recently pushed element, or `None` if empty
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.push_all(iter);
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Container<T> for Stack<T> {
    fn len(&self) -> usize {
        Stack::len(self)
    }

    fn pop(&mut self) -> Option<T> {
        Stack::pop(self)
    }
}
