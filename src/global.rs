//! Free-function mirror of the API over a thread-local default helper.
//!
//! The historical library shipped a ready-made shared instance wrapping
//! the platform source. Here that default is one [`RandomHelper`] per
//! thread, constructed on first use and living for the thread's lifetime,
//! so no cross-thread sharing of the source ever occurs and no locking is
//! needed.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::RandExtError;
use crate::helper::RandomHelper;
use crate::sequence::Sequence;

thread_local! {
    static DEFAULT_HELPER: RefCell<RandomHelper> = RefCell::new(RandomHelper::new());
}

/// Runs `f` against the calling thread's default helper.
fn with_default<R>(f: impl FnOnce(&mut RandomHelper) -> R) -> R {
    DEFAULT_HELPER.with(|helper| f(&mut helper.borrow_mut()))
}

/// Returns a value in [a, b) from the thread default helper.
///
/// See [`RandomHelper::uniform`].
pub fn uniform(a: f64, b: f64) -> f64 {
    with_default(|r| r.uniform(a, b))
}

/// Returns an integer in [j, k) from the thread default helper.
///
/// See [`RandomHelper::int_between`].
pub fn int_between(j: i64, k: i64) -> i64 {
    with_default(|r| r.int_between(j, k))
}

/// Returns an integer in [j, k] from the thread default helper.
///
/// See [`RandomHelper::int`].
pub fn int(j: i64, k: i64) -> i64 {
    with_default(|r| r.int(j, k))
}

/// Returns an integer in [0, stop) from the thread default helper.
///
/// See [`RandomHelper::range`].
pub fn range(stop: i64) -> i64 {
    with_default(|r| r.range(stop))
}

/// Returns an integer in [start, stop) from the thread default helper.
///
/// See [`RandomHelper::range_from`].
pub fn range_from(start: i64, stop: i64) -> i64 {
    with_default(|r| r.range_from(start, stop))
}

/// Returns a progression member inside the open bound from the thread
/// default helper.
///
/// See [`RandomHelper::range_step`].
pub fn range_step(start: i64, stop: i64, step: i64) -> Result<i64, RandExtError> {
    with_default(|r| r.range_step(start, stop, step))
}

/// Returns a random valid index into `seq` from the thread default helper.
///
/// See [`RandomHelper::index`].
pub fn index<S>(seq: &S) -> Result<usize, RandExtError>
where
    S: Sequence + ?Sized,
{
    with_default(|r| r.index(seq))
}

/// Returns a random element of `seq` from the thread default helper.
///
/// See [`RandomHelper::item`].
pub fn item<S>(seq: &S) -> Result<&S::Item, RandExtError>
where
    S: Sequence + ?Sized,
{
    with_default(|r| r.item(seq))
}

/// Shuffles `array` in place with the thread default helper and returns
/// the same slice reference.
///
/// See [`RandomHelper::shuffle`].
pub fn shuffle<T>(array: &mut [T]) -> &mut [T] {
    with_default(|r| {
        r.shuffle(&mut *array);
    });
    array
}

/// Returns a shuffled copy of `seq` from the thread default helper.
///
/// See [`RandomHelper::shuffled`].
pub fn shuffled<S>(seq: &S) -> Vec<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
{
    with_default(|r| r.shuffled(seq))
}

/// Returns a random key of `map` from the thread default helper.
///
/// See [`RandomHelper::key`].
pub fn key<K, V>(map: &HashMap<K, V>) -> Result<&K, RandExtError> {
    with_default(|r| r.key(map))
}

/// Returns a random value of `map` from the thread default helper.
///
/// See [`RandomHelper::choice`].
pub fn choice<K, V>(map: &HashMap<K, V>) -> Result<&V, RandExtError> {
    with_default(|r| r.choice(map))
}
