//! RandomHelper: derived pseudorandom operations over a uniform source.
//!
//! All operations are pure functions of the owned source and their
//! arguments: numeric draws, integer draws, stepped ranges, sequence
//! index/item selection, Fisher–Yates shuffles, and uniform key/value
//! selection from maps via single-pass reservoir sampling.

use std::collections::HashMap;

use crate::error::RandExtError;
use crate::sequence::Sequence;
use crate::source::{platform_source, UniformSource};

/// Derived pseudorandom operations over a single owned uniform source.
///
/// A helper wraps exactly one [`UniformSource`] for its lifetime. The
/// binding is fixed at construction; the source's internal state (if any)
/// is opaque and advances across calls, which is why every operation takes
/// `&mut self`.
///
/// The helper performs no locking and gives no atomicity guarantee across
/// calls. Sharing one instance between threads requires external
/// synchronization by the caller; the free functions at the crate root
/// avoid the problem by using a thread-local instance per thread.
///
/// # Examples
///
/// ```
/// use randext::RandomHelper;
///
/// let mut r = RandomHelper::new();
/// let n = r.int_between(2, 4);
/// assert!(n == 2 || n == 3);
/// ```
pub struct RandomHelper {
    source: UniformSource,
}

impl Default for RandomHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomHelper {
    /// Creates a helper over the platform default uniform source.
    ///
    /// The default source is the `rand` crate's thread-local PRNG. The
    /// resulting helper is not suitable for security-sensitive randomness.
    pub fn new() -> Self {
        Self {
            source: platform_source(),
        }
    }

    /// Creates a helper over a caller-supplied uniform source.
    ///
    /// The source must produce a fresh value in [0, 1) on each call; a
    /// scripted source makes every operation deterministic, which is the
    /// intended way to test code built on this helper.
    ///
    /// # Parameters
    /// - `source`: A zero-argument callable returning `f64` in [0, 1).
    ///
    /// # Examples
    ///
    /// ```
    /// use randext::RandomHelper;
    ///
    /// let mut r = RandomHelper::with_source(|| 0.5);
    /// assert_eq!(r.uniform(0.0, 10.0), 5.0);
    /// ```
    pub fn with_source<F>(source: F) -> Self
    where
        F: FnMut() -> f64 + 'static,
    {
        Self {
            source: Box::new(source),
        }
    }

    /// Draws the next raw value from the owned source.
    fn draw(&mut self) -> f64 {
        (self.source)()
    }

    // Operations for numbers
    // ======================

    /// Returns a value in the half-open interval [a, b).
    ///
    /// Computed as `source() * (b - a) + a`. The degenerate case collapses
    /// exactly: `uniform(a, a) == a`. The sign of `b - a` is not
    /// special-cased, so reversed bounds (`b < a`) yield a value in
    /// (b, a] — permitted fallout of the formula, not validated. Non-finite
    /// bounds propagate NaN/∞ through the arithmetic unguarded.
    ///
    /// # Parameters
    /// - `a`: Lower inclusive bound.
    /// - `b`: Upper exclusive bound.
    ///
    /// # Examples
    ///
    /// ```
    /// use randext::RandomHelper;
    ///
    /// let mut r = RandomHelper::new();
    /// let n = r.uniform(2.0, 3.0);
    /// assert!(2.0 <= n && n < 3.0);
    /// assert_eq!(r.uniform(2.0, 2.0), 2.0);
    /// ```
    pub fn uniform(&mut self, a: f64, b: f64) -> f64 {
        self.draw() * (b - a) + a
    }

    // Operations for integers
    // =======================

    /// Returns an integer in the half-open range [j, k).
    ///
    /// Computed as `floor(uniform(j, k))`. Requires `k > j` for a
    /// non-degenerate range; `int_between(j, j) == j`.
    ///
    /// # Parameters
    /// - `j`: Lower inclusive bound.
    /// - `k`: Upper exclusive bound.
    ///
    /// # Examples
    ///
    /// ```
    /// use randext::RandomHelper;
    ///
    /// let mut r = RandomHelper::new();
    /// let n = r.int_between(2, 4);
    /// assert!(2 <= n && n < 4);
    /// assert_eq!(r.int_between(2, 3), 2);
    /// assert_eq!(r.int_between(2, 2), 2);
    /// ```
    pub fn int_between(&mut self, j: i64, k: i64) -> i64 {
        self.uniform(j as f64, k as f64).floor() as i64
    }

    /// Returns an integer in the closed range [j, k].
    ///
    /// Implemented as `int_between(j, k + 1)`; `int(j, j) == j`.
    ///
    /// # Examples
    ///
    /// ```
    /// use randext::RandomHelper;
    ///
    /// let mut r = RandomHelper::new();
    /// let n = r.int(2, 3);
    /// assert!(2 <= n && n <= 3);
    /// assert_eq!(r.int(2, 2), 2);
    /// ```
    pub fn int(&mut self, j: i64, k: i64) -> i64 {
        self.int_between(j, k + 1)
    }

    /// Returns an integer in [0, stop).
    ///
    /// The one-bound form of the stepped-range family; equivalent to
    /// `int_between(0, stop)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use randext::RandomHelper;
    ///
    /// let mut r = RandomHelper::new();
    /// let n = r.range(10);
    /// assert!(0 <= n && n < 10);
    /// ```
    pub fn range(&mut self, stop: i64) -> i64 {
        self.int_between(0, stop)
    }

    /// Returns an integer in [start, stop).
    ///
    /// The two-bound form of the stepped-range family; equivalent to
    /// `int_between(start, stop)`.
    pub fn range_from(&mut self, start: i64, stop: i64) -> i64 {
        self.int_between(start, stop)
    }

    /// Returns a value from the arithmetic progression
    /// {start, start + step, start + 2·step, …} strictly inside the open
    /// bound `stop` (on the far side of `stop` from `start` for negative
    /// step).
    ///
    /// Computed as `start + floor(uniform(0, (stop - start) / step)) * step`,
    /// with the quotient taken in floating point: a fractional quotient
    /// widens the draw so the last representable term is the greatest
    /// member of the progression still inside the bound. `stop` itself is
    /// never reachable.
    ///
    /// # Errors
    /// Returns [`RandExtError::ZeroStep`] when `step == 0`, the one input
    /// that leaves the progression undefined.
    ///
    /// # Examples
    ///
    /// ```
    /// use randext::RandomHelper;
    ///
    /// let mut r = RandomHelper::new();
    /// let n = r.range_step(5, 10, 2).unwrap();
    /// assert!(n == 5 || n == 7 || n == 9);
    /// ```
    pub fn range_step(&mut self, start: i64, stop: i64, step: i64) -> Result<i64, RandExtError> {
        if step == 0 {
            return Err(RandExtError::ZeroStep);
        }
        let count = (stop - start) as f64 / step as f64;
        let picks = self.uniform(0.0, count).floor() as i64;
        Ok(start + picks * step)
    }

    // Operations for sequences
    // ========================

    /// Returns a valid random index into `seq`, in [0, len).
    ///
    /// # Errors
    /// Returns [`RandExtError::EmptyContainer`] when `seq` has no
    /// elements — there is no valid index into an empty sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use randext::RandomHelper;
    ///
    /// let mut r = RandomHelper::new();
    /// let i = r.index(&[10, 20, 30]).unwrap();
    /// assert!(i < 3);
    /// ```
    pub fn index<S>(&mut self, seq: &S) -> Result<usize, RandExtError>
    where
        S: Sequence + ?Sized,
    {
        if seq.is_empty() {
            return Err(RandExtError::EmptyContainer);
        }
        Ok(self.int_between(0, seq.len() as i64) as usize)
    }

    /// Returns a reference to a uniformly random element of `seq`.
    ///
    /// A [`Scalar`](crate::Scalar) behaves as a one-element sequence
    /// containing itself, so `item(&Scalar(v))` returns `v` unchanged.
    ///
    /// # Errors
    /// Returns [`RandExtError::EmptyContainer`] when `seq` has no
    /// elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use randext::RandomHelper;
    ///
    /// let mut r = RandomHelper::new();
    /// let o = r.item(&['a', 'b']).unwrap();
    /// assert!(o == &'a' || o == &'b');
    /// ```
    pub fn item<'a, S>(&mut self, seq: &'a S) -> Result<&'a S::Item, RandExtError>
    where
        S: Sequence + ?Sized,
    {
        let idx = self.index(seq)?;
        seq.get(idx).ok_or(RandExtError::EmptyContainer)
    }

    /// Shuffles `array` in place and returns the same slice reference.
    ///
    /// Fisher–Yates: the cursor `top` walks from `len` down to 1; each
    /// step draws `current` uniformly in [0, top), decrements `top`, and
    /// swaps positions `current` and `top`. The draw may equal `top - 1`,
    /// making the swap a self-swap — required for each of the `len!`
    /// orderings to be equally likely under a perfect source.
    ///
    /// # Examples
    ///
    /// ```
    /// use randext::RandomHelper;
    ///
    /// let mut r = RandomHelper::new();
    /// let mut foo = [1, 2, 3];
    /// r.shuffle(&mut foo);
    /// assert!(foo.contains(&1) && foo.contains(&2) && foo.contains(&3));
    /// ```
    pub fn shuffle<'a, T>(&mut self, array: &'a mut [T]) -> &'a mut [T] {
        let mut top = array.len();
        while top > 0 {
            let current = self.int_between(0, top as i64) as usize;
            top -= 1;
            array.swap(current, top);
        }
        array
    }

    /// Returns a freshly allocated, shuffled copy of `seq`.
    ///
    /// The original sequence is left unmodified; the returned vector is a
    /// distinct, independently owned container.
    ///
    /// # Examples
    ///
    /// ```
    /// use randext::RandomHelper;
    ///
    /// let mut r = RandomHelper::new();
    /// let original = [1, 2, 3];
    /// let copy = r.shuffled(&original);
    /// assert_eq!(original, [1, 2, 3]);
    /// assert_eq!(copy.len(), 3);
    /// ```
    pub fn shuffled<S>(&mut self, seq: &S) -> Vec<S::Item>
    where
        S: Sequence + ?Sized,
        S::Item: Clone,
    {
        let mut copy = Vec::with_capacity(seq.len());
        for i in 0..seq.len() {
            if let Some(element) = seq.get(i) {
                copy.push(element.clone());
            }
        }
        self.shuffle(&mut copy);
        copy
    }

    // Operations for maps
    // ===================

    /// Returns a uniformly random element from an iterator of unknown
    /// length, in a single pass.
    ///
    /// Reservoir sampling with a reservoir of one: the i-th element
    /// (1-based) replaces the running winner with probability 1/i. By
    /// induction, after n elements each has probability 1/n of being the
    /// winner. Returns `None` for an empty iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use randext::RandomHelper;
    ///
    /// let mut r = RandomHelper::new();
    /// let winner = r.reservoir(1..=6).unwrap();
    /// assert!((1..=6).contains(&winner));
    /// assert_eq!(r.reservoir(std::iter::empty::<u8>()), None);
    /// ```
    pub fn reservoir<I>(&mut self, items: I) -> Option<I::Item>
    where
        I: IntoIterator,
    {
        let mut winner = None;
        let mut seen = 0usize;
        for item in items {
            seen += 1;
            if self.draw() < 1.0 / seen as f64 {
                winner = Some(item);
            }
        }
        winner
    }

    /// Returns a uniformly random key of `map`.
    ///
    /// Selection is a single reservoir pass over the map's key iteration
    /// order; the distribution is uniform over keys regardless of that
    /// order.
    ///
    /// # Errors
    /// Returns [`RandExtError::EmptyContainer`] when the map has no
    /// entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use randext::RandomHelper;
    /// use std::collections::HashMap;
    ///
    /// let mut r = RandomHelper::new();
    /// let map = HashMap::from([("foo", true)]);
    /// assert_eq!(r.key(&map).unwrap(), &"foo");
    /// ```
    pub fn key<'a, K, V>(&mut self, map: &'a HashMap<K, V>) -> Result<&'a K, RandExtError> {
        self.reservoir(map.keys())
            .ok_or(RandExtError::EmptyContainer)
    }

    /// Returns a uniformly random value of `map`.
    ///
    /// Equivalent in distribution to indexing the map with a random key;
    /// implemented as a reservoir pass over the values directly.
    ///
    /// # Errors
    /// Returns [`RandExtError::EmptyContainer`] when the map has no
    /// entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use randext::RandomHelper;
    /// use std::collections::HashMap;
    ///
    /// let mut r = RandomHelper::new();
    /// let map = HashMap::from([("a", 1), ("b", 2)]);
    /// let v = r.choice(&map).unwrap();
    /// assert!(v == &1 || v == &2);
    /// ```
    pub fn choice<'a, K, V>(&mut self, map: &'a HashMap<K, V>) -> Result<&'a V, RandExtError> {
        self.reservoir(map.values())
            .ok_or(RandExtError::EmptyContainer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::Scalar;

    /// Helper over a source replaying `values` in order, then repeating
    /// the last value forever.
    fn scripted(values: &[f64]) -> RandomHelper {
        let values = values.to_vec();
        let mut next = 0usize;
        RandomHelper::with_source(move || {
            let val = values[next.min(values.len() - 1)];
            next += 1;
            val
        })
    }

    #[test]
    fn test_uniform_range() {
        let mut r = RandomHelper::new();
        for _ in 0..1000 {
            let n = r.uniform(2.0, 3.0);
            assert!((2.0..3.0).contains(&n), "uniform out of range: {}", n);
        }
    }

    #[test]
    fn test_uniform_degenerate_exact() {
        let mut r = RandomHelper::new();
        for _ in 0..100 {
            assert_eq!(r.uniform(2.0, 2.0), 2.0);
            assert_eq!(r.uniform(-7.5, -7.5), -7.5);
        }
    }

    #[test]
    fn test_uniform_reversed_bounds() {
        let mut r = RandomHelper::new();
        for _ in 0..1000 {
            let n = r.uniform(3.0, 2.0);
            assert!(2.0 < n && n <= 3.0, "reversed uniform out of (2,3]: {}", n);
        }
    }

    #[test]
    fn test_uniform_nan_propagates() {
        let mut r = RandomHelper::new();
        assert!(r.uniform(f64::NAN, 5.0).is_nan());
        assert!(r.uniform(0.0, f64::NAN).is_nan());
    }

    #[test]
    fn test_uniform_endpoints_from_source() {
        let mut r = scripted(&[0.0]);
        assert_eq!(r.uniform(2.0, 3.0), 2.0);
        let mut r = scripted(&[0.5]);
        assert_eq!(r.uniform(2.0, 3.0), 2.5);
    }

    #[test]
    fn test_int_between_range() {
        let mut r = RandomHelper::new();
        for _ in 0..1000 {
            let n = r.int_between(2, 4);
            assert!(n == 2 || n == 3, "int_between out of range: {}", n);
        }
    }

    #[test]
    fn test_int_between_degenerate() {
        let mut r = RandomHelper::new();
        assert_eq!(r.int_between(2, 2), 2);
        assert_eq!(r.int_between(-3, -3), -3);
    }

    #[test]
    fn test_int_between_single_value_range() {
        let mut r = RandomHelper::new();
        for _ in 0..100 {
            assert_eq!(r.int_between(2, 3), 2);
        }
    }

    #[test]
    fn test_int_between_negative_bounds() {
        let mut r = scripted(&[0.0]);
        assert_eq!(r.int_between(-5, 5), -5);
        let mut r = scripted(&[0.999]);
        assert_eq!(r.int_between(-5, 5), 4);
    }

    #[test]
    fn test_int_inclusive_range() {
        let mut r = RandomHelper::new();
        let mut saw = [false; 2];
        for _ in 0..1000 {
            let n = r.int(2, 3);
            assert!(n == 2 || n == 3, "int out of range: {}", n);
            saw[(n - 2) as usize] = true;
        }
        assert!(saw[0] && saw[1], "inclusive bound never reached");
        assert_eq!(r.int(2, 2), 2);
    }

    #[test]
    fn test_range_single_bound() {
        let mut r = RandomHelper::new();
        for _ in 0..1000 {
            let n = r.range(10);
            assert!((0..10).contains(&n), "range out of [0,10): {}", n);
        }
    }

    #[test]
    fn test_range_from_bounds() {
        let mut r = RandomHelper::new();
        for _ in 0..1000 {
            let n = r.range_from(5, 10);
            assert!((5..10).contains(&n), "range_from out of [5,10): {}", n);
        }
    }

    #[test]
    fn test_range_step_progression() {
        let mut r = RandomHelper::new();
        for _ in 0..1000 {
            let n = r.range_step(5, 10, 2).unwrap();
            assert!(n == 5 || n == 7 || n == 9, "off progression: {}", n);
            assert_eq!(n % 2, 1);
        }
    }

    #[test]
    fn test_range_step_reaches_last_term() {
        // uniform(0, 2.5) near the top picks the widened third term.
        let mut r = scripted(&[0.999]);
        assert_eq!(r.range_step(5, 10, 2).unwrap(), 9);
        let mut r = scripted(&[0.0]);
        assert_eq!(r.range_step(5, 10, 2).unwrap(), 5);
    }

    #[test]
    fn test_range_step_negative_step() {
        let mut r = RandomHelper::new();
        for _ in 0..1000 {
            let n = r.range_step(10, 5, -2).unwrap();
            assert!(n == 10 || n == 8 || n == 6, "off progression: {}", n);
        }
    }

    #[test]
    fn test_range_step_zero_step() {
        let mut r = RandomHelper::new();
        assert_eq!(r.range_step(5, 10, 0), Err(RandExtError::ZeroStep));
    }

    #[test]
    fn test_index_bounds() {
        let mut r = RandomHelper::new();
        let seq = [0u8; 3];
        for _ in 0..1000 {
            let i = r.index(&seq).unwrap();
            assert!(i < 3, "index out of range: {}", i);
        }
    }

    #[test]
    fn test_index_single_element() {
        let mut r = RandomHelper::new();
        assert_eq!(r.index(&[42]).unwrap(), 0);
        assert_eq!(r.index(&Scalar('c')).unwrap(), 0);
    }

    #[test]
    fn test_index_empty() {
        let mut r = RandomHelper::new();
        let empty: [u8; 0] = [];
        assert_eq!(r.index(&empty), Err(RandExtError::EmptyContainer));
    }

    #[test]
    fn test_item_membership() {
        let mut r = RandomHelper::new();
        for _ in 0..100 {
            let o = r.item(&['a', 'b']).unwrap();
            assert!(o == &'a' || o == &'b');
        }
    }

    #[test]
    fn test_item_scalar_returns_itself() {
        let mut r = RandomHelper::new();
        assert_eq!(r.item(&Scalar('c')).unwrap(), &'c');
    }

    #[test]
    fn test_item_empty() {
        let mut r = RandomHelper::new();
        let empty: Vec<i32> = Vec::new();
        assert_eq!(r.item(&empty), Err(RandExtError::EmptyContainer));
    }

    #[test]
    fn test_shuffle_returns_same_reference() {
        let mut r = RandomHelper::new();
        let mut array = [1, 2, 3];
        let expected = array.as_mut_ptr();
        let shuffled = r.shuffle(&mut array);
        assert_eq!(shuffled.as_mut_ptr(), expected);
    }

    #[test]
    fn test_shuffle_preserves_multiset() {
        let mut r = RandomHelper::new();
        for _ in 0..100 {
            let mut array = [1, 2, 3, 4, 5];
            r.shuffle(&mut array);
            let mut sorted = array;
            sorted.sort_unstable();
            assert_eq!(sorted, [1, 2, 3, 4, 5]);
        }
    }

    #[test]
    fn test_shuffle_deterministic_trace() {
        // Always drawing 0.0: swap(0,2) then swap(0,1) then self-swap(0,0).
        let mut r = scripted(&[0.0]);
        let mut array = [1, 2, 3];
        r.shuffle(&mut array);
        assert_eq!(array, [2, 3, 1]);
    }

    #[test]
    fn test_shuffle_self_swap_allowed() {
        // Drawing top-1 each round leaves the array unchanged.
        let mut r = scripted(&[0.999]);
        let mut array = [1, 2, 3];
        r.shuffle(&mut array);
        assert_eq!(array, [1, 2, 3]);
    }

    #[test]
    fn test_shuffle_empty_and_single() {
        let mut r = RandomHelper::new();
        let mut empty: [u8; 0] = [];
        r.shuffle(&mut empty);
        let mut single = [7];
        r.shuffle(&mut single);
        assert_eq!(single, [7]);
    }

    #[test]
    fn test_shuffled_leaves_original_untouched() {
        let mut r = RandomHelper::new();
        let original = vec![1, 2, 3];
        let mut copy = r.shuffled(&original);
        assert_eq!(original, vec![1, 2, 3]);
        copy.sort_unstable();
        assert_eq!(copy, vec![1, 2, 3]);
    }

    #[test]
    fn test_shuffled_scalar() {
        let mut r = RandomHelper::new();
        assert_eq!(r.shuffled(&Scalar(9)), vec![9]);
    }

    #[test]
    fn test_reservoir_empty() {
        let mut r = RandomHelper::new();
        assert_eq!(r.reservoir(std::iter::empty::<u8>()), None);
    }

    #[test]
    fn test_reservoir_always_replace_keeps_last() {
        // Draws of 0.0 pass every 1/i test, so the winner is the final
        // element of the stream.
        let mut r = scripted(&[0.0]);
        assert_eq!(r.reservoir([1, 2, 3, 4]), Some(4));
    }

    #[test]
    fn test_reservoir_never_replace_keeps_first() {
        // Draws of 0.999 pass only the first test (0.999 < 1/1), so the
        // winner is the first element of the stream.
        let mut r = scripted(&[0.999]);
        assert_eq!(r.reservoir([1, 2, 3, 4]), Some(1));
    }

    #[test]
    fn test_key_single_entry() {
        let mut r = RandomHelper::new();
        let map = HashMap::from([("foo", true)]);
        assert_eq!(r.key(&map).unwrap(), &"foo");
    }

    #[test]
    fn test_key_membership() {
        let mut r = RandomHelper::new();
        let map = HashMap::from([("a", 1), ("b", 2)]);
        for _ in 0..100 {
            let k = r.key(&map).unwrap();
            assert!(k == &"a" || k == &"b");
        }
    }

    #[test]
    fn test_key_empty() {
        let mut r = RandomHelper::new();
        let map: HashMap<&str, i32> = HashMap::new();
        assert_eq!(r.key(&map), Err(RandExtError::EmptyContainer));
    }

    #[test]
    fn test_choice_single_entry() {
        let mut r = RandomHelper::new();
        let map = HashMap::from([("foo", true)]);
        assert_eq!(r.choice(&map).unwrap(), &true);
    }

    #[test]
    fn test_choice_membership() {
        let mut r = RandomHelper::new();
        let map = HashMap::from([("a", 1), ("b", 2)]);
        for _ in 0..100 {
            let v = r.choice(&map).unwrap();
            assert!(v == &1 || v == &2);
        }
    }

    #[test]
    fn test_choice_empty() {
        let mut r = RandomHelper::new();
        let map: HashMap<&str, i32> = HashMap::new();
        assert_eq!(r.choice(&map), Err(RandExtError::EmptyContainer));
    }

    #[test]
    fn test_scripted_helpers_are_reproducible() {
        let mut r1 = scripted(&[0.1, 0.4, 0.8]);
        let mut r2 = scripted(&[0.1, 0.4, 0.8]);
        for _ in 0..10 {
            assert_eq!(r1.int_between(0, 100), r2.int_between(0, 100));
        }
    }
}
