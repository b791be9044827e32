//! Ordering strategies
//!
//! A [`MinHeap`](crate::MinHeap) never compares elements directly; it asks its
//! comparator whether one element is strictly less than another. This keeps the
//! heap decoupled from any single ordering: the same structure serves as a
//! min-heap under [`NaturalOrder`], a max-heap under [`ReverseOrder`], or a
//! heap ordered by an arbitrary key or closure.
//!
//! # Example
//!
//! ```rust
//! use min_heap::compare::{ByKey, ReverseOrder};
//! use min_heap::MinHeap;
//!
//! let mut max_heap = MinHeap::with_comparator(ReverseOrder);
//! max_heap.extend([3, 7, 5]);
//! assert_eq!(max_heap.peek(), Some(&7));
//!
//! let mut by_len = MinHeap::with_comparator(ByKey::new(|s: &&str| s.len()));
//! by_len.extend(["three", "two", "eleven"]);
//! assert_eq!(by_len.peek(), Some(&"two"));
//! ```

use std::cmp::Ordering;
use std::fmt;

/// A strict "less than" relation over `T`
///
/// Implementations must describe a strict weak order: irreflexive, transitive,
/// with incomparability transitive as well. The heap stays memory-safe under an
/// ill-behaved comparator, but the order it maintains is then unspecified.
///
/// Any closure `Fn(&T, &T) -> Ordering` is a comparator, where `a` is less than
/// `b` exactly when the closure returns [`Ordering::Less`].
pub trait Compare<T: ?Sized> {
    /// Returns true if `a` must sit above `b` in the heap
    fn less(&self, a: &T, b: &T) -> bool;
}

/// The element type's own `<`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: PartialOrd + ?Sized> Compare<T> for NaturalOrder {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// The element type's own `>`, yielding a max-heap
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReverseOrder;

impl<T: PartialOrd + ?Sized> Compare<T> for ReverseOrder {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// Orders elements by a key extracted from each one
#[derive(Clone, Copy)]
pub struct ByKey<F> {
    key: F,
}

impl<F> ByKey<F> {
    /// Creates a comparator ordering elements by `key(x)`
    pub fn new(key: F) -> Self {
        Self { key }
    }
}

impl<T, K, F> Compare<T> for ByKey<F>
where
    F: Fn(&T) -> K,
    K: PartialOrd,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        (self.key)(a) < (self.key)(b)
    }
}

impl<F> fmt::Debug for ByKey<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByKey").finish_non_exhaustive()
    }
}

impl<T, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b) == Ordering::Less
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_order() {
        assert!(NaturalOrder.less(&1, &2));
        assert!(!NaturalOrder.less(&2, &2));
        assert!(!NaturalOrder.less(&3, &2));
        assert!(NaturalOrder.less("abc", "abd"));
    }

    #[test]
    fn test_reverse_order() {
        assert!(ReverseOrder.less(&2, &1));
        assert!(!ReverseOrder.less(&2, &2));
        assert!(!ReverseOrder.less(&1, &2));
    }

    #[test]
    fn test_by_key() {
        let by_abs = ByKey::new(|x: &i32| x.abs());
        assert!(by_abs.less(&1, &-2));
        assert!(!by_abs.less(&-2, &2));
    }

    #[test]
    fn test_closure() {
        let descending = |a: &i32, b: &i32| b.cmp(a);
        assert!(descending.less(&5, &4));
        assert!(!descending.less(&4, &4));
    }

    #[test]
    fn test_partial_order_floats() {
        assert!(NaturalOrder.less(&0.5f64, &1.5));
        // NaN is incomparable: never less, never greater
        assert!(!NaturalOrder.less(&f64::NAN, &1.0));
        assert!(!NaturalOrder.less(&1.0, &f64::NAN));
    }
}
