//! Pseudorandom-value helpers over an injected uniform source.
//!
//! `randext` layers convenience operations — numbers, integers, indices,
//! items, shuffles, and random keys/values from maps — on top of a single
//! caller-supplied uniform source: a zero-argument function producing a
//! fresh value in [0, 1) per call. Every derived operation is expressible
//! as zero or more source calls plus deterministic arithmetic, so injecting
//! a scripted source makes the whole surface reproducible.
//!
//! This is **not** a cryptographically secure generator. The default source
//! is the `rand` crate's thread-local PRNG; nothing here is suitable for
//! security-sensitive randomness.
//!
//! # Architecture
//!
//! ```text
//! UniformSource  (capability — FnMut() -> f64 in [0, 1))
//!     ↓ owned by
//! RandomHelper   (numeric, sequence, and map operations)
//!     ↓ mirrored by
//! global         (free functions over a thread-local default helper)
//! ```
//!
//! # Examples
//!
//! Draw from an explicit helper:
//!
//! ```
//! use randext::RandomHelper;
//!
//! let mut r = RandomHelper::new();
//! let n = r.uniform(2.0, 3.0);
//! assert!((2.0..3.0).contains(&n));
//!
//! let i = r.int(2, 3);
//! assert!(i == 2 || i == 3);
//! ```
//!
//! Or use the thread-local default through the free functions:
//!
//! ```
//! let item = randext::item(&['a', 'b']).unwrap();
//! assert!(item == &'a' || item == &'b');
//! ```
//!
//! Inject a deterministic source for reproducible output:
//!
//! ```
//! use randext::RandomHelper;
//!
//! let mut r = RandomHelper::with_source(|| 0.0);
//! assert_eq!(r.int_between(5, 10), 5);
//! ```

#![deny(clippy::all)]

pub mod error;

mod global;
mod helper;
mod sequence;
mod source;

pub use global::{
    choice, index, int, int_between, item, key, range, range_from, range_step, shuffle, shuffled,
    uniform,
};
pub use helper::RandomHelper;
pub use sequence::{Scalar, Sequence};
pub use source::UniformSource;
