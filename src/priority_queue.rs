//! Priority queue keyed by an integer priority
//!
//! A thin wrapper over [`BinaryHeap`]: each payload is stored next to its
//! priority and the heap is ordered so the highest priority comes out first.
//! Payloads with equal priority come out in an unspecified order.
//!
//! # Example
//!
//! ```rust
//! use rust_containers::priority_queue::PriorityQueue;
//!
//! let mut queue = PriorityQueue::new();
//! queue.push("a", 1);
//! queue.push("b", 5);
//! queue.push("c", 10);
//!
//! assert_eq!(queue.pop(), Some("c"));
//! assert_eq!(queue.pop(), Some("b"));
//! assert_eq!(queue.pop(), Some("a"));
//! assert_eq!(queue.pop(), None);
//! ```

use crate::binary::BinaryHeap;
use crate::traits::{Compare, Container};

#[derive(Debug, Clone)]
struct PriorityItem<T> {
    payload: T,
    priority: i64,
}

/// Higher priority first
#[derive(Debug, Clone, Copy, Default)]
struct ByPriority;

impl<T> Compare<PriorityItem<T>> for ByPriority {
    #[inline]
    fn precedes(&self, a: &PriorityItem<T>, b: &PriorityItem<T>) -> bool {
        a.priority > b.priority
    }
}

/// A max-priority queue of payloads
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    heap: BinaryHeap<PriorityItem<T>, ByPriority>,
}

impl<T> PriorityQueue<T> {
    /// Creates an empty queue
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(ByPriority),
        }
    }

    /// Creates an empty queue with room for `capacity` payloads
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity, ByPriority),
        }
    }

    /// Returns the number of queued payloads
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if nothing is queued
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Queues `payload` with the given priority
    pub fn push(&mut self, payload: T, priority: i64) {
        self.heap.push(PriorityItem { payload, priority });
    }

    /// Returns the highest-priority payload without removing it
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek().map(|item| &item.payload)
    }

    /// Returns the priority of the payload `pop` would return next
    pub fn peek_priority(&self) -> Option<i64> {
        self.heap.peek().map(|item| item.priority)
    }

    /// Removes and returns the highest-priority payload, or `None` if empty
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|item| item.payload)
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<(T, i64)> for PriorityQueue<T> {
    fn extend<I: IntoIterator<Item = (T, i64)>>(&mut self, iter: I) {
        self.heap.extend(
            iter.into_iter()
                .map(|(payload, priority)| PriorityItem { payload, priority }),
        );
    }
}

impl<T> Container<T> for PriorityQueue<T> {
    fn len(&self) -> usize {
        PriorityQueue::len(self)
    }

    fn pop(&mut self) -> Option<T> {
        PriorityQueue::pop(self)
    }
}
