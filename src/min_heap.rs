//! Binary min-heap implementation
//!
//! An array-backed complete binary tree. The element at index `i` has its
//! parent at `(i - 1) / 2` and its children at `2i + 1` and `2i + 2`; since
//! elements are only ever appended or removed at the end of the vector, the
//! tree stays complete without any bookkeeping.
//!
//! Beyond the usual push/pop, the heap supports removing an arbitrary value,
//! located by a linear scan for the first equal element in storage order.
//!
//! # Time Complexity
//!
//! | Operation   | Complexity |
//! |-------------|------------|
//! | `insert`    | O(log n)   |
//! | `pop`       | O(log n)   |
//! | `remove`    | O(n)       |
//! | `peek`      | O(1)       |
//! | `from(vec)` | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use min_heap::MinHeap;
//!
//! let mut heap = MinHeap::from(vec![5, 3, 8, 1, 9, 2]);
//! assert_eq!(heap.get_min(), Ok(&1));
//!
//! heap.insert(0);
//! assert_eq!(heap.remove(&0), Some(0));
//! assert_eq!(heap.remove(&42), None);
//!
//! assert_eq!(heap.pop(), Some(1));
//! assert_eq!(heap.pop(), Some(2));
//! assert_eq!(heap.len(), 4);
//! ```

use std::fmt;

use crate::compare::{Compare, NaturalOrder};
use crate::traits::{Heap, HeapError};

/// A binary min-heap
///
/// The minimum is decided by the comparator `C`, which defaults to the
/// element type's own `<`. Equal elements are kept side by side; removing a
/// value deletes one copy.
#[derive(Clone)]
pub struct MinHeap<T, C = NaturalOrder> {
    /// The heap data, in heap order
    data: Vec<T>,
    cmp: C,
}

impl<T> MinHeap<T> {
    /// Creates an empty heap ordered by `T`'s `<`
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            cmp: NaturalOrder,
        }
    }

    /// Creates an empty heap with room for at least `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            cmp: NaturalOrder,
        }
    }
}

impl<T, C> MinHeap<T, C> {
    /// Creates an empty heap ordered by `cmp`
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            data: Vec::new(),
            cmp,
        }
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Removes every element, keeping the allocation
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns the underlying storage, in heap order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the heap and returns its storage, in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Returns the ordering strategy
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns the minimum element, or `None` if the heap is empty
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Returns the minimum element without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the heap holds no elements.
    pub fn get_min(&self) -> Result<&T, HeapError> {
        self.peek().ok_or(HeapError::EmptyHeap)
    }
}

impl<T, C: Compare<T>> MinHeap<T, C> {
    /// Builds a heap from `data` in linear time, ordered by `cmp`
    ///
    /// The vector is taken over as storage and then heapified bottom-up.
    pub fn from_vec_with_comparator(data: Vec<T>, cmp: C) -> Self {
        let mut heap = Self { data, cmp };
        heap.heapify();
        heap
    }

    /// Inserts an element
    pub fn insert(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the minimum element
    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }

        let result = self.data.swap_remove(0);
        self.sift_down(0);
        Some(result)
    }

    /// Removes the first element, in storage order, that equals `value`
    ///
    /// Returns `None` and leaves the heap untouched if there is no such
    /// element.
    pub fn remove(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        self.remove_by(|x| x == value)
    }

    /// Removes the first element, in storage order, matching `pred`
    pub fn remove_by(&mut self, pred: impl FnMut(&T) -> bool) -> Option<T> {
        let index = self.data.iter().position(pred)?;
        Some(self.remove_at(index))
    }

    /// Returns true if every element is no less than its parent
    pub fn is_heap(&self) -> bool {
        (1..self.data.len()).all(|i| !self.cmp.less(&self.data[i], &self.data[(i - 1) / 2]))
    }

    fn remove_at(&mut self, index: usize) -> T {
        let result = self.data.swap_remove(index);

        // The former last element now sits at `index`. It came from another
        // subtree, so it may belong above this slot as well as below it.
        if index < self.data.len() && self.sift_up(index) == index {
            self.sift_down(index);
        }

        result
    }

    /// Restores heap order over the whole storage
    ///
    /// Every non-leaf index is sifted down, from the last one back to the
    /// root, so both subtrees of a node are already heaps when it is visited.
    fn heapify(&mut self) {
        for index in (0..self.data.len() / 2).rev() {
            self.sift_down(index);
        }
    }

    /// Move element at index up to maintain heap property
    ///
    /// Returns the element's final position.
    fn sift_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.cmp.less(&self.data[index], &self.data[parent]) {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
        index
    }

    /// Move element at index down to maintain heap property
    ///
    /// The left child wins ties. An out-of-range index is a no-op.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.cmp.less(&self.data[left], &self.data[smallest]) {
                smallest = left;
            }
            if right < len && self.cmp.less(&self.data[right], &self.data[smallest]) {
                smallest = right;
            }

            if smallest != index {
                self.data.swap(index, smallest);
                index = smallest;
            } else {
                break;
            }
        }
    }
}

impl<T, C: Compare<T> + Default> Heap<T> for MinHeap<T, C> {
    fn new() -> Self {
        Self::with_comparator(C::default())
    }

    fn is_empty(&self) -> bool {
        MinHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        MinHeap::len(self)
    }

    fn insert(&mut self, value: T) {
        MinHeap::insert(self, value)
    }

    fn remove(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        MinHeap::remove(self, value)
    }

    fn peek(&self) -> Option<&T> {
        MinHeap::peek(self)
    }

    fn pop(&mut self) -> Option<T> {
        MinHeap::pop(self)
    }
}

impl<T, C: Default> Default for MinHeap<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: PartialOrd> From<Vec<T>> for MinHeap<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec_with_comparator(data, NaturalOrder)
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for MinHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec_with_comparator(iter.into_iter().collect(), C::default())
    }
}

impl<T, C: Compare<T>> Extend<T> for MinHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for MinHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.data).finish()
    }
}
