//! Error types for the checked sentinel operations.
//!
//! The unchecked path ([`SentinelPtr::walk_length`](crate::SentinelPtr::walk_length)
//! and friends) reports nothing: misuse is undefined behaviour at the
//! point of dereference. These errors come only from the helpers that
//! validate before trusting a buffer.

use std::error::Error;
use std::fmt;

/// Errors from checked construction, bounded walks and array verification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SentinelError {
    /// The address was null and the operation does not accept null.
    NullPointer,
    /// No terminator was found within the scanned range.
    MissingSentinel {
        /// Number of elements examined before giving up.
        scanned: usize,
    },
    /// A [`SentinelArray`](crate::SentinelArray) length disagrees with the
    /// position of its terminator.
    LengthMismatch {
        /// The length stored in the array.
        declared: usize,
        /// Index of the first terminator, if one was found within
        /// `declared + 1` elements.
        found: Option<usize>,
    },
}

impl fmt::Display for SentinelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NullPointer => write!(f, "null sentinel pointer"),
            Self::MissingSentinel { scanned } => {
                write!(f, "no terminator within {scanned} elements")
            }
            Self::LengthMismatch { declared, found } => {
                write!(f, "declared length {declared} but ")?;
                match found {
                    Some(idx) => write!(f, "terminator found at {idx}"),
                    None => write!(f, "no terminator at or before it"),
                }
            }
        }
    }
}

impl Error for SentinelError {}
