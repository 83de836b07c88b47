//! Common traits for the containers in this crate
//!
//! This module provides the two seams every container is built around:
//!
//! - [`Compare`]: the ordering strategy a [`BinaryHeap`](crate::binary::BinaryHeap)
//!   is bound to at construction time
//! - [`Container`]: the draining API shared by the heap, the priority queue
//!   and the stack
//!
//! Emptiness is the only condition a container reports, and it is reported
//! as `None` from `pop`/`peek`, never as an error.

/// Ordering strategy for a heap
///
/// `precedes(a, b)` returns true when `a` must end up closer to the top of the
/// heap than `b`. The relation should be a strict weak ordering; a relation
/// that is not produces an unspecified drain order but never a panic from the
/// heap itself.
///
/// Any `Fn(&T, &T) -> bool` closure or function is a `Compare<T>`, so custom
/// orderings rarely need a dedicated type.
///
/// # Example
///
/// ```rust
/// use rust_containers::binary::BinaryHeap;
///
/// let mut heap = BinaryHeap::new(|a: &(u8, char), b: &(u8, char)| a.0 > b.0);
/// heap.push((1, 'l'));
/// heap.push((9, 'h'));
/// assert_eq!(heap.pop(), Some((9, 'h')));
/// ```
pub trait Compare<T: ?Sized> {
    /// Returns true if `a` should be extracted before `b`
    fn precedes(&self, a: &T, b: &T) -> bool;
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Smallest element first: `a` precedes `b` iff `a < b`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Min;

impl<T: PartialOrd + ?Sized> Compare<T> for Min {
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Largest element first: `a` precedes `b` iff `a > b`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Max;

impl<T: PartialOrd + ?Sized> Compare<T> for Max {
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// Base trait for the draining containers
///
/// Every container hands out its elements one at a time through `pop`, which
/// returns `None` once the container is empty (and keeps returning `None` on
/// every later call).
pub trait Container<T> {
    /// Returns the number of elements in the container
    fn len(&self) -> usize;

    /// Returns true if the container holds no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes and returns the next element, or `None` if empty
    fn pop(&mut self) -> Option<T>;

    /// Pops until the container is empty, returning the elements in pop order
    fn drain_all(&mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len());
        while let Some(item) = self.pop() {
            out.push(item);
        }
        out
    }
}
