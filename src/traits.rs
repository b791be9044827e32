//! Common traits for heap data structures
//!
//! This module provides the error type shared by the heaps in this crate and
//! the [`Heap`] trait that the generic test suites are written against.
//!
//! Unlike priority queues that store `(priority, item)` pairs, a [`Heap`]
//! stores bare values and orders them directly, so the value itself is both the
//! key and the payload.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The minimum was requested from a heap holding no elements
    EmptyHeap,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::EmptyHeap => write!(f, "heap is empty"),
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for value heaps
///
/// The API follows Rust's `BinaryHeap` naming where it overlaps (`push` is
/// spelled `insert` here), with two additions:
/// - `remove` deletes an arbitrary value, located by equality
/// - `get_min` reports an empty heap as [`HeapError::EmptyHeap`]
///
/// Note that `BinaryHeap` is a max-heap, while implementors of this trait are
/// min-heaps.
///
/// # Example
///
/// ```rust
/// use min_heap::{Heap, HeapError, MinHeap};
///
/// let mut heap: MinHeap<i32> = Heap::new();
/// assert_eq!(heap.get_min(), Err(HeapError::EmptyHeap));
///
/// heap.insert(3);
/// heap.insert(1);
/// heap.insert(2);
/// assert_eq!(heap.get_min(), Ok(&1));
///
/// assert_eq!(heap.remove(&1), Some(1));
/// assert_eq!(heap.remove(&42), None);
/// assert_eq!(heap.get_min(), Ok(&2));
/// ```
pub trait Heap<T> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts a value
    ///
    /// # Time Complexity
    /// O(log n)
    fn insert(&mut self, value: T);

    /// Removes the first stored element equal to `value`
    ///
    /// Returns the removed element, or `None` if no element compares equal.
    /// A miss leaves the heap untouched.
    ///
    /// # Time Complexity
    /// O(n) to locate the value, O(log n) to restore heap order.
    fn remove(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq;

    /// Returns the minimum value without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Returns the minimum value without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the heap holds no elements.
    fn get_min(&self) -> Result<&T, HeapError> {
        self.peek().ok_or(HeapError::EmptyHeap)
    }

    /// Removes and returns the minimum value
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<T>;
}
