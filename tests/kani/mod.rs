//! Kani proof harnesses
//!
//! - `heap_proofs.rs`: heap property and emptiness proofs for the binary heap
//! - `container_proofs.rs`: priority queue and stack proofs

#[cfg(kani)]
#[path = "heap_proofs.rs"]
mod heap_proofs;
#[cfg(kani)]
#[path = "container_proofs.rs"]
mod container_proofs;
