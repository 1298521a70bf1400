//! sentinel-ptr: zero-cost markers for sentinel-terminated pointers.
//!
//! This is the top-level facade crate that re-exports the public API of
//! `sentinel-core`. The C ABI lives in the separate `sentinel-ffi` crate.
//!
//! # Quick start
//!
//! ```rust
//! use sentinel_ptr::prelude::*;
//!
//! let s = c"hello";
//! let p = CStrPtr::from_cstr(s);
//!
//! // SAFETY: `p` points into a live, NUL-terminated `CStr`.
//! assert_eq!(unsafe { p.walk_length() }, 5);
//!
//! let bytes = [1u8, 2, 3, 0];
//! let arr = SentinelArray::from_slice_with_sentinel(&bytes).unwrap();
//! assert_eq!(arr.length, 3);
//! // SAFETY: `bytes` outlives the check.
//! assert_eq!(unsafe { arr.verify() }, Ok(()));
//! ```
//!
//! # Contract
//!
//! [`SentinelPtr::assume`] never validates. Creating a view is safe;
//! every read through it is `unsafe` and requires the buffer to be live,
//! unmodified and terminated. Callers that cannot vouch for a buffer use
//! the checked helpers (`from_slice_with_sentinel`, `walk_length_bounded`,
//! `try_walk_length`, [`SentinelArray::verify`]).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use sentinel_core::*;

/// Common imports.
///
/// ```rust
/// use sentinel_ptr::prelude::*;
/// ```
pub mod prelude {
    pub use sentinel_core::{
        CStrPtr, MutCStrPtr, ScanConfig, Sentinel, SentinelArray, SentinelError, SentinelPtr,
        SentinelPtrMut,
    };
}
