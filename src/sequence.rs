//! The sequence capability consumed by the index/item/shuffled operations.
//!
//! A sequence is anything exposing an integer length and read access to
//! elements by position. Slices, vectors, and fixed-size arrays implement
//! it directly; [`Scalar`] adapts a single atomic value into a one-element
//! sequence containing itself.

/// Read-only access to a finite, positionally indexed collection.
///
/// The contract is that `get(i)` returns `Some` for every `i < len()` and
/// `None` otherwise. Random-draw operations pick indices in `[0, len())`,
/// so a conforming implementation never sees an out-of-range access.
pub trait Sequence {
    /// Element type of the sequence.
    type Item;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns the element at `index`, or `None` when out of range.
    fn get(&self, index: usize) -> Option<&Self::Item>;

    /// Returns `true` when the sequence has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Sequence for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

/// Adapter presenting a single atomic value as a one-element sequence.
///
/// Historically `item` fell back to returning a value unchanged when the
/// value had no numeric length, so a scalar acted as a one-element
/// sequence containing itself. That duck-typed fallback is an explicit,
/// intentional contract here: wrap the value in `Scalar` and the sequence
/// operations treat it as length 1 with itself at index 0.
///
/// # Examples
///
/// ```
/// use randext::{RandomHelper, Scalar};
///
/// let mut r = RandomHelper::new();
/// assert_eq!(r.index(&Scalar('c')).unwrap(), 0);
/// assert_eq!(r.item(&Scalar('c')).unwrap(), &'c');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scalar<T>(pub T);

impl<T> Sequence for Scalar<T> {
    type Item = T;

    fn len(&self) -> usize {
        1
    }

    fn get(&self, index: usize) -> Option<&T> {
        if index == 0 {
            Some(&self.0)
        } else {
            None
        }
    }
}
