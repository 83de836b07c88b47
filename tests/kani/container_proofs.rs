//! Proofs for the priority queue and the stack

#[cfg(kani)]
use rust_containers::priority_queue::PriorityQueue;
#[cfg(kani)]
use rust_containers::stack::Stack;

/// Proof: the higher priority payload always pops first
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_priority_order() {
    let p1: i64 = kani::any();
    let p2: i64 = kani::any();
    kani::assume(p1 != p2);

    let mut queue = PriorityQueue::new();
    queue.push(1u8, p1);
    queue.push(2u8, p2);

    let first = queue.pop();
    if p1 > p2 {
        assert_eq!(first, Some(1));
    } else {
        assert_eq!(first, Some(2));
    }
    assert!(queue.pop().is_some());
    assert_eq!(queue.pop(), None);
}

/// Proof: the stack pops in reverse push order
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(5)]
fn verify_stack_lifo() {
    let a: u32 = kani::any();
    let b: u32 = kani::any();

    let mut stack = Stack::new();
    stack.push_all([a, b]);

    assert_eq!(stack.pop(), Some(b));
    assert_eq!(stack.pop(), Some(a));
    assert_eq!(stack.pop(), None);
}
