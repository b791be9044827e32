//! Binary Min-Heap for Rust
//!
//! This crate provides an array-backed binary min-heap that, besides the usual
//! insert and peek-minimum, supports removing an arbitrary value.
//!
//! # Features
//!
//! - **Linear bulk construction**: `MinHeap::from(vec)` heapifies bottom-up in O(n)
//! - **Remove by value**: deletes the first equal element; a miss is a no-op
//! - **Pluggable ordering**: natural order, reversed (max-heap), by key, or any
//!   `Fn(&T, &T) -> Ordering` closure, see [`compare`]
//! - **Checked minimum**: [`MinHeap::get_min`] reports an empty heap as
//!   [`HeapError::EmptyHeap`] instead of panicking
//!
//! # Example
//!
//! ```rust
//! use min_heap::{HeapError, MinHeap};
//!
//! let mut heap = MinHeap::new();
//! heap.insert(7);
//! heap.insert(2);
//! heap.insert(9);
//! heap.insert(1);
//! assert_eq!(heap.get_min(), Ok(&1));
//!
//! heap.remove(&1);
//! assert_eq!(heap.get_min(), Ok(&2));
//!
//! let empty: MinHeap<i32> = MinHeap::from(vec![]);
//! assert_eq!(empty.get_min(), Err(HeapError::EmptyHeap));
//! ```
//!
//! The heap does no internal locking. Every mutating method takes `&mut self`;
//! to share a heap between threads, wrap it in a `Mutex`.

pub mod compare;
pub mod min_heap;
pub mod stdlib_compat;
pub mod traits;

// Re-export the main types for convenience
pub use min_heap::MinHeap;
pub use traits::{Heap, HeapError};
