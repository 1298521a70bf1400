//! Sentinel-terminated pointer and array view types.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the marker types used throughout the workspace:
//!
//! - [`SentinelPtr`] / [`SentinelPtrMut`]: a raw address asserted to
//!   reference a buffer that ends with a terminator element.
//! - [`SentinelArray`]: an explicit length paired with a [`SentinelPtr`].
//! - [`Sentinel`]: the per-element-type definition of "the terminator".
//!
//! Both view types are non-owning and exactly as large as the raw
//! pointers they wrap. Construction never validates; operations that
//! read through the address are `unsafe` and restate the caller contract.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod array;
pub mod config;
pub mod error;
pub mod ptr;
pub mod sentinel;

pub use array::SentinelArray;
pub use config::ScanConfig;
pub use error::SentinelError;
pub use ptr::{Iter, SentinelPtr, SentinelPtrMut};
pub use sentinel::Sentinel;

use core::ffi::c_char;

/// A read-only, NUL-terminated C string.
pub type CStrPtr = SentinelPtr<c_char>;

/// A mutable, NUL-terminated C string buffer.
pub type MutCStrPtr = SentinelPtrMut<c_char>;
