//! Drain demonstration
//!
//! Builds each container a few different ways and prints the order elements
//! come back out in.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=trace cargo run --example drain
//! ```

use rust_containers::binary::BinaryHeap;
use rust_containers::priority_queue::PriorityQueue;
use rust_containers::stack::Stack;
use rust_containers::{Max, Min};

struct Task {
    name: &'static str,
    priority: u32,
}

fn main() {
    env_logger::init();

    let mut heap = BinaryHeap::new(Min);
    heap.push_all([2, 3, 1, 5, 4]);
    println!("min heap:          {:?}", heap.drain_sorted().collect::<Vec<_>>());

    let mut heap = BinaryHeap::new(Max);
    heap.push_all(["a", "b", "c", "d", "e"]);
    println!("max heap:          {:?}", heap.drain_sorted().collect::<Vec<_>>());

    let mut heap = BinaryHeap::from_vec(vec![3, 5, 2, 1, 4], Min);
    println!("from existing vec: {:?}", heap.drain_sorted().collect::<Vec<_>>());

    // Backing storage starts with room for 10000 elements
    let mut heap = BinaryHeap::from_vec(Vec::with_capacity(10_000), Min);
    heap.push_all([3, 5, 2, 1, 4]);
    let capacity = heap.capacity();
    println!(
        "pre-sized heap:    {:?} (capacity {})",
        heap.drain_sorted().collect::<Vec<_>>(),
        capacity
    );

    let mut heap = BinaryHeap::new(|a: &Task, b: &Task| a.priority > b.priority);
    heap.push(Task { name: "write", priority: 1 });
    heap.push(Task { name: "review", priority: 4 });
    heap.push(Task { name: "test", priority: 2 });
    while let Some(task) = heap.pop() {
        println!("task:              {} ({})", task.name, task.priority);
    }

    let mut queue = PriorityQueue::new();
    queue.push("a", 1);
    queue.push("b", 5);
    queue.push("c", 10);
    while let Some(payload) = queue.pop() {
        println!("priority queue:    {}", payload);
    }

    let mut stack: Stack<u8> = [1, 2, 3].into_iter().collect();
    stack.push(4);
    while let Some(item) = stack.pop() {
        println!("stack:             {}", item);
    }
}
