//! Big-O complexity proofs for MinHeap operations
//!
//! This module empirically verifies that heap operations meet their
//! theoretical complexity bounds using the `big-o-test` crate.
//!
//! ## Testing Strategy
//!
//! We use `test_algorithm` to measure batch operations:
//! - bottom-up construction is O(n) for n elements, not O(n log n)
//! - n inserts in ascending order are O(n), since nothing sifts up
//! - n pops are O(n log n)
//!
//! Note: These are empirical tests, not formal proofs. They detect significant
//! deviations from expected behavior but may not catch subtle issues with
//! specific input patterns.

use big_o_test::{test_algorithm, BigOAlgorithmComplexity};
use min_heap::MinHeap;

use ctor::ctor;
use parking_lot::RwLock;
use std::sync::Arc;

/// Sets up the ENV, affecting the Rust's test runner
#[ctor]
fn setup_env() {
    // timing measurements are skewed by tests running alongside
    std::env::set_var("RUST_TEST_THREADS", "1");
}

fn descending(n: i32) -> Vec<i32> {
    (0..n).rev().collect()
}

#[test]
fn test_min_heap_bulk_build() {
    let heap = Arc::new(RwLock::new(MinHeap::<i32>::new()));

    test_algorithm(
        "MinHeap bulk build",
        3,
        || {
            heap.write().clear();
        },
        20_000,
        || {
            *heap.write() = MinHeap::from(descending(20_000));
            42
        },
        40_000,
        || {
            *heap.write() = MinHeap::from(descending(40_000));
            42
        },
        BigOAlgorithmComplexity::ON,
        BigOAlgorithmComplexity::ON,
    );
}

#[test]
fn test_min_heap_ascending_insert() {
    let heap = Arc::new(RwLock::new(MinHeap::<i32>::new()));

    test_algorithm(
        "MinHeap ascending insert batch",
        3,
        || {
            *heap.write() = MinHeap::new();
        },
        20_000,
        || {
            let mut h = heap.write();
            for i in 0..20_000 {
                h.insert(i);
            }
            42
        },
        40_000,
        || {
            let mut h = heap.write();
            for i in 0..40_000 {
                h.insert(i);
            }
            42
        },
        BigOAlgorithmComplexity::ON,
        BigOAlgorithmComplexity::ON,
    );
}

#[test]
fn test_min_heap_pop_batch() {
    let heap = Arc::new(RwLock::new(MinHeap::<i32>::new()));

    test_algorithm(
        "MinHeap pop batch",
        3,
        || {
            *heap.write() = MinHeap::new();
        },
        20_000,
        || {
            let mut h = heap.write();
            *h = MinHeap::from(descending(20_000));
            for _ in 0..20_000 {
                assert!(h.pop().is_some(), "pop() must succeed on a non-empty heap");
            }
            42
        },
        40_000,
        || {
            let mut h = heap.write();
            *h = MinHeap::from(descending(40_000));
            for _ in 0..40_000 {
                assert!(h.pop().is_some(), "pop() must succeed on a non-empty heap");
            }
            42
        },
        BigOAlgorithmComplexity::ONLogN,
        BigOAlgorithmComplexity::ON,
    );
}
