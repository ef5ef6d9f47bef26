//! The uniform-source capability and the platform default source.
//!
//! A uniform source is the only entropy input of the library: a
//! zero-argument callable producing a fresh pseudorandom value in [0, 1)
//! on each invocation. The source may carry opaque internal state (the
//! platform PRNG does); the library never reads anything else.

use rand::Rng;

/// A zero-argument callable producing a fresh value in [0, 1) per call.
///
/// Owned by a [`RandomHelper`](crate::RandomHelper) for its lifetime.
/// No distribution property beyond uniformity is assumed. A source that
/// ever returns a value outside [0, 1) breaks the range contracts of
/// every derived operation.
pub type UniformSource = Box<dyn FnMut() -> f64>;

/// Returns the platform default uniform source.
///
/// Wraps the `rand` crate's thread-local PRNG; its `f64` output is
/// uniformly distributed in [0, 1). Not cryptographically secure.
pub(crate) fn platform_source() -> UniformSource {
    let mut rng = rand::rng();
    Box::new(move || rng.random::<f64>())
}
