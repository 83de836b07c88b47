//! Comparator-driven container primitives for Rust
//!
//! This crate provides small, generic, in-memory containers built around a
//! binary heap whose ordering is supplied by the caller.
//!
//! # Features
//!
//! - **Binary Heap**: O(log n) push and pop, O(1) peek, O(n) bulk build from a
//!   `Vec`; ordered by any [`Compare`] strategy ([`Min`], [`Max`], or a closure)
//! - **Priority Queue**: payloads keyed by an `i64` priority, highest first
//! - **Stack**: plain LIFO over a `Vec`
//!
//! None of the containers synchronize internally. Wrap one in a lock to share
//! it across threads.
//!
//! # Example
//!
//! ```rust
//! use rust_containers::binary::BinaryHeap;
//! use rust_containers::{Max, Min};
//!
//! let mut heap = BinaryHeap::new(Min);
//! heap.push_all([2, 4, 5, 1, 3]);
//! assert_eq!(heap.drain_sorted().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
//!
//! let mut heap = BinaryHeap::from_vec(vec![5, 5, 4, 3, 1, 1], Max);
//! assert_eq!(heap.pop(), Some(5));
//! ```

pub mod binary;
pub mod priority_queue;
pub mod stack;
pub mod traits;

// Re-export the main types for convenience
pub use binary::BinaryHeap;
pub use priority_queue::PriorityQueue;
pub use stack::Stack;
pub use traits::{Compare, Container, Max, Min};
