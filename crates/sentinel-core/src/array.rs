//! Length-prefixed sentinel-terminated arrays.

#![allow(unsafe_code)]

use core::fmt;
use core::slice;

use crate::error::SentinelError;
use crate::ptr::SentinelPtr;
use crate::sentinel::Sentinel;

/// An explicit element count paired with a [`SentinelPtr`].
///
/// Carries a dual contract: `length` is the number of elements before
/// the terminator *and* the buffer is terminated, so consumers can pick
/// either O(1) length queries or terminator-based traversal. Neither half
/// is checked on construction; [`verify`](Self::verify) checks that they
/// agree.
///
/// `#[repr(C)]`, so it can cross an FFI boundary as `{ size_t, T* }`.
#[repr(C)]
pub struct SentinelArray<T> {
    /// Number of elements before the terminator.
    pub length: usize,
    /// Start of the sentinel-terminated buffer.
    pub ptr: SentinelPtr<T>,
}

impl<T> SentinelArray<T> {
    /// Pairs `length` with `ptr` without checking either.
    #[inline]
    pub const fn new(length: usize, ptr: SentinelPtr<T>) -> Self {
        Self { length, ptr }
    }

    /// The declared element count.
    #[inline]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the declared element count is zero.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Borrows the `length` elements starting at `ptr`.
    ///
    /// Does not read the terminator.
    ///
    /// # Safety
    ///
    /// `ptr` must be non-null, aligned, and valid for reads of `length`
    /// elements for `'a`, with no concurrent writes.
    pub unsafe fn as_slice<'a>(&self) -> &'a [T] {
        debug_assert!(!self.ptr.is_null(), "as_slice on a null SentinelArray");
        // SAFETY: forwarded caller contract.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.length) }
    }
}

impl<T: Sentinel> SentinelArray<T> {
    /// Builds an array over `slice`, with `length` set to the index of the
    /// first terminator.
    pub fn from_slice_with_sentinel(slice: &[T]) -> Result<Self, SentinelError> {
        match slice.iter().position(|e| e.is_sentinel()) {
            Some(length) => Ok(Self::new(length, SentinelPtr::assume(slice.as_ptr()))),
            None => Err(SentinelError::MissingSentinel {
                scanned: slice.len(),
            }),
        }
    }

    /// Checks that the terminator sits exactly at `length`.
    ///
    /// Examines at most `length + 1` elements.
    ///
    /// # Errors
    ///
    /// - [`SentinelError::NullPointer`] if `ptr` is null.
    /// - [`SentinelError::LengthMismatch`] if the first terminator is
    ///   earlier than `length` or missing from index `length`.
    ///
    /// # Safety
    ///
    /// `ptr` must be aligned and the first `min(length, n) + 1` elements
    /// must be readable, where `n` is the position of the terminator.
    pub unsafe fn verify(&self) -> Result<(), SentinelError> {
        if self.ptr.is_null() {
            return Err(SentinelError::NullPointer);
        }
        let limit = self.length.saturating_add(1);
        // SAFETY: forwarded caller contract.
        match unsafe { self.ptr.walk_length_bounded(limit) } {
            Some(found) if found == self.length => Ok(()),
            found => Err(SentinelError::LengthMismatch {
                declared: self.length,
                found,
            }),
        }
    }
}

impl<T> Clone for SentinelArray<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SentinelArray<T> {}

impl<T> PartialEq for SentinelArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.ptr == other.ptr
    }
}

impl<T> Eq for SentinelArray<T> {}

impl<T> fmt::Debug for SentinelArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SentinelArray")
            .field("length", &self.length)
            .field("ptr", &self.ptr)
            .finish()
    }
}
