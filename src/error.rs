//! Error types for the randext library.

use std::fmt;

/// Errors produced by the randext library.
///
/// Degenerate or inverted numeric ranges are *not* errors: they collapse
/// to a bound (or a reversed interval) per the drawing formulas. The only
/// rejected inputs are empty containers and a zero step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandExtError {
    /// A sequence or map operation was called on a container with no
    /// elements, so no valid index, item, key, or value exists.
    EmptyContainer,
    /// A stepped range was requested with a step of zero, which leaves
    /// the arithmetic progression undefined.
    ZeroStep,
}

impl fmt::Display for RandExtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RandExtError::EmptyContainer => {
                write!(f, "Container has no elements to draw from")
            }
            RandExtError::ZeroStep => {
                write!(f, "Step of a stepped range must be non-zero")
            }
        }
    }
}

impl std::error::Error for RandExtError {}
