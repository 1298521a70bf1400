//! C-compatible aggregate types.

use std::ffi::c_char;

use sentinel_core::{CStrPtr, SentinelArray};

/// A NUL-terminated string with its length, as seen from C.
///
/// Mirrors `SentinelArray<c_char>` field-for-field: `length` bytes
/// precede the NUL at `ptr[length]`. Does not own `ptr`.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SentinelCStrArray {
    /// Number of bytes before the terminator.
    pub length: usize,
    /// Start of the NUL-terminated buffer.
    pub ptr: *const c_char,
}

// Same layout as the core aggregate it mirrors.
const _: () = assert!(
    std::mem::size_of::<SentinelCStrArray>() == std::mem::size_of::<SentinelArray<c_char>>()
);
const _: () = assert!(
    std::mem::align_of::<SentinelCStrArray>() == std::mem::align_of::<SentinelArray<c_char>>()
);

impl From<SentinelArray<c_char>> for SentinelCStrArray {
    fn from(a: SentinelArray<c_char>) -> Self {
        Self {
            length: a.length,
            ptr: a.ptr.as_ptr(),
        }
    }
}

impl From<SentinelCStrArray> for SentinelArray<c_char> {
    fn from(a: SentinelCStrArray) -> Self {
        SentinelArray::new(a.length, CStrPtr::assume(a.ptr))
    }
}

impl Default for SentinelCStrArray {
    fn default() -> Self {
        Self {
            length: 0,
            ptr: std::ptr::null(),
        }
    }
}
