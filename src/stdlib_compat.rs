//! Standard library compatibility layer
//!
//! Implements [`Heap`] for `std::collections::BinaryHeap<Reverse<T>>`, the
//! usual way of getting a min-heap out of the standard library. This gives the
//! generic code in this crate, and its tests, an independent implementation to
//! compare [`MinHeap`](crate::MinHeap) against.
//!
//! # Differences from MinHeap
//!
//! - **Ordering**: requires `T: Ord`; there is no pluggable comparator.
//! - **Remove**: `BinaryHeap` has no positional removal, so `remove` rebuilds
//!   the whole heap in O(n).
//!
//! # Example
//!
//! ```rust
//! use min_heap::Heap;
//! use std::cmp::Reverse;
//! use std::collections::BinaryHeap;
//!
//! fn smallest_two<H: Heap<i32>>(values: &[i32]) -> (Option<i32>, Option<i32>) {
//!     let mut heap = H::new();
//!     for &v in values {
//!         heap.insert(v);
//!     }
//!     (heap.pop(), heap.pop())
//! }
//!
//! let values = [5, 3, 7];
//! assert_eq!(smallest_two::<BinaryHeap<Reverse<i32>>>(&values), (Some(3), Some(5)));
//! assert_eq!(smallest_two::<min_heap::MinHeap<i32>>(&values), (Some(3), Some(5)));
//! ```

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::traits::Heap;

impl<T: Ord> Heap<T> for BinaryHeap<Reverse<T>> {
    fn new() -> Self {
        BinaryHeap::new()
    }

    fn is_empty(&self) -> bool {
        BinaryHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        BinaryHeap::len(self)
    }

    fn insert(&mut self, value: T) {
        self.push(Reverse(value))
    }

    fn remove(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let position = self.iter().position(|Reverse(x)| x == value)?;
        let mut data = std::mem::take(self).into_vec();
        let Reverse(removed) = data.swap_remove(position);
        *self = BinaryHeap::from(data);
        Some(removed)
    }

    fn peek(&self) -> Option<&T> {
        BinaryHeap::peek(self).map(|Reverse(x)| x)
    }

    fn pop(&mut self) -> Option<T> {
        BinaryHeap::pop(self).map(|Reverse(x)| x)
    }
}
