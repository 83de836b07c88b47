//! Comparator-driven binary heap
//!
//! The heap is a `Vec<T>` read as an implicit complete binary tree: the node at
//! index `i` has children at `2i + 1` and `2i + 2` and its parent at
//! `(i - 1) / 2`. Ordering is supplied by a [`Compare`] strategy bound once at
//! construction, so the same engine serves as a min-heap, a max-heap, or any
//! custom ordering.
//!
//! # Heap Property
//!
//! For every index `i > 0`, `cmp.precedes(data[i], data[parent(i)])` is false.
//! Index 0 therefore always holds an element no other element precedes.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity |
//! |------------|------------|
//! | `push`     | O(log n)   |
//! | `pop`      | O(log n)   |
//! | `peek`     | O(1)       |
//! | `from_vec` | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use rust_containers::binary::BinaryHeap;
//! use rust_containers::Min;
//!
//! let mut heap = BinaryHeap::new(Min);
//! heap.push(3);
//! heap.push(1);
//! heap.push(2);
//!
//! assert_eq!(heap.peek(), Some(&1));
//! assert_eq!(heap.pop(), Some(1));
//! assert_eq!(heap.pop(), Some(2));
//! assert_eq!(heap.pop(), Some(3));
//! assert_eq!(heap.pop(), None);
//! ```

use std::iter::FusedIterator;

use crate::traits::{Compare, Container, Min};

/// A binary heap ordered by a caller-supplied comparator
///
/// The heap is not synchronized. Share it across threads behind a lock, or
/// keep one heap per thread.
#[derive(Debug, Clone)]
pub struct BinaryHeap<T, C = Min> {
    /// Elements in implicit-tree order
    data: Vec<T>,
    cmp: C,
}

impl<T, C: Compare<T>> BinaryHeap<T, C> {
    /// Creates an empty heap ordered by `cmp`
    pub fn new(cmp: C) -> Self {
        Self {
            data: Vec::new(),
            cmp,
        }
    }

    /// Creates an empty heap with room for `capacity` elements before reallocating
    pub fn with_capacity(capacity: usize, cmp: C) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            cmp,
        }
    }

    /// Builds a heap on top of an existing vector
    ///
    /// The vector is consumed and its storage reused; the elements are put into
    /// heap order with a single bottom-up pass. An empty vector with spare
    /// capacity is a valid way to pre-size the heap.
    ///
    /// ```rust
    /// use rust_containers::binary::BinaryHeap;
    /// use rust_containers::Max;
    ///
    /// let mut heap = BinaryHeap::from_vec(vec![3, 5, 2, 1, 4], Max);
    /// assert_eq!(heap.pop(), Some(5));
    ///
    /// let presized: BinaryHeap<i32, Max> = BinaryHeap::from_vec(Vec::with_capacity(64), Max);
    /// assert!(presized.is_empty());
    /// assert!(presized.capacity() >= 64);
    /// ```
    pub fn from_vec(data: Vec<T>, cmp: C) -> Self {
        let mut heap = Self { data, cmp };
        heap.heapify();
        heap
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Returns the comparator the heap was built with
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn push(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Inserts every element of `items`, one at a time, in iteration order
    ///
    /// An empty iterator leaves the heap untouched.
    pub fn push_all<I: IntoIterator<Item = T>>(&mut self, items: I) {
        let iter = items.into_iter();
        self.data.reserve(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }

    /// Returns the top element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Removes and returns the top element, or `None` if the heap is empty
    ///
    /// The last element is moved into the root slot and sifted down.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }

        let top = self.data.swap_remove(0);
        self.sift_down(0);
        Some(top)
    }

    /// Returns an iterator that pops elements in heap order until the heap is empty
    ///
    /// Elements not consumed by the iterator stay in the heap.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, C> {
        DrainSorted { heap: self }
    }

    /// Removes every element, keeping the allocated storage
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns the underlying array in implicit-tree order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the heap and returns the underlying vector in implicit-tree order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    #[inline]
    fn precedes(&self, a: usize, b: usize) -> bool {
        self.cmp.precedes(&self.data[a], &self.data[b])
    }

    /// Move element at index up while it precedes its parent
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.precedes(index, parent) {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down while a child precedes it
    ///
    /// With two children the left one is the candidate only if it precedes the
    /// right one; on a tie the right child is compared against the parent.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;

            let child = if right < len && !self.precedes(left, right) {
                right
            } else {
                left
            };

            if self.precedes(child, index) {
                self.data.swap(index, child);
                index = child;
            } else {
                break;
            }
        }
    }

    /// Restore heap order over the whole array, last internal node first
    fn heapify(&mut self) {
        let len = self.data.len();
        log::trace!("heapifying {} elements", len);
        for index in (0..len / 2).rev() {
            self.sift_down(index);
        }
    }
}

impl<T, C: Compare<T> + Default> Default for BinaryHeap<T, C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<T, C: Compare<T>> Extend<T> for BinaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.push_all(iter);
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for BinaryHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect(), C::default())
    }
}

impl<T, C: Compare<T>> Container<T> for BinaryHeap<T, C> {
    fn len(&self) -> usize {
        BinaryHeap::len(self)
    }

    fn pop(&mut self) -> Option<T> {
        BinaryHeap::pop(self)
    }
}

/// Draining iterator returned by [`BinaryHeap::drain_sorted`]
#[derive(Debug)]
pub struct DrainSorted<'a, T, C: Compare<T>> {
    heap: &'a mut BinaryHeap<T, C>,
}

impl<T, C: Compare<T>> Iterator for DrainSorted<'_, T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T, C: Compare<T>> ExactSizeIterator for DrainSorted<'_, T, C> {}

impl<T, C: Compare<T>> FusedIterator for DrainSorted<'_, T, C> {}
