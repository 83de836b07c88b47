//! Proofs for the binary heap
//!
//! These proofs check the heap property on the backing array and the drain
//! order for small symbolic inputs.

#[cfg(kani)]
use rust_containers::binary::BinaryHeap;
#[cfg(kani)]
use rust_containers::{Compare, Max, Min};

#[cfg(kani)]
fn heap_property_holds<T, C: Compare<T>>(heap: &BinaryHeap<T, C>) -> bool {
    let data = heap.as_slice();
    (1..data.len()).all(|i| !heap.comparator().precedes(&data[i], &data[(i - 1) / 2]))
}

/// Proof: pushing arbitrary values keeps the heap property
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_push_keeps_heap_property() {
    let mut heap: BinaryHeap<u32, Min> = BinaryHeap::new(Min);

    heap.push(kani::any());
    heap.push(kani::any());
    heap.push(kani::any());
    heap.push(kani::any());

    assert_eq!(heap.len(), 4);
    assert!(heap_property_holds(&heap));
}

/// Proof: popping returns the minimum and keeps the heap property
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_pop_returns_minimum() {
    let a: u32 = kani::any();
    let b: u32 = kani::any();
    let c: u32 = kani::any();
    let mut heap = BinaryHeap::from_vec(vec![a, b, c], Min);

    let popped = heap.pop();
    assert_eq!(popped, Some(a.min(b).min(c)));
    assert!(heap_property_holds(&heap));
}

/// Proof: bulk build produces a valid max-heap
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_from_vec_max_heap() {
    let values: [u8; 4] = kani::any();
    let heap = BinaryHeap::from_vec(values.to_vec(), Max);

    assert!(heap_property_holds(&heap));
    let top = heap.peek().copied();
    assert!(values.iter().all(|&v| Some(v) <= top));
}

/// Proof: popping an empty heap returns None and leaves it empty
#[cfg(kani)]
#[kani::proof]
fn verify_empty_pop() {
    let mut heap: BinaryHeap<u32, Min> = BinaryHeap::new(Min);
    assert_eq!(heap.pop(), None);
    assert_eq!(heap.pop(), None);
    assert!(heap.is_empty());
}
