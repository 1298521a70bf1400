//! Test fixtures for sentinel-terminated buffers.
//!
//! [`TerminatedBuf`] owns a buffer that is terminated by construction and
//! hands out the non-owning views from `sentinel-core`. The [`fixtures`]
//! module generates deterministic buffer contents for tests and benches.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::ffi::c_char;

use sentinel_core::{Sentinel, SentinelArray, SentinelPtr, SentinelPtrMut};
use smallvec::SmallVec;

/// Inline capacity before a [`TerminatedBuf`] spills to the heap,
/// terminator included.
pub const INLINE_CAPACITY: usize = 16;

/// An owned buffer that always ends with `T::SENTINEL`.
///
/// Short buffers live inline. Views returned by the `as_*` methods are
/// valid until the buffer is mutated or dropped.
pub struct TerminatedBuf<T: Sentinel + Copy> {
    elems: SmallVec<[T; INLINE_CAPACITY]>,
}

impl<T: Sentinel + Copy> TerminatedBuf<T> {
    /// An empty buffer holding only the terminator.
    pub fn new() -> Self {
        let mut elems = SmallVec::new();
        elems.push(T::SENTINEL);
        Self { elems }
    }

    /// Copies `body` and appends the terminator.
    ///
    /// # Panics
    ///
    /// If `body` already contains a terminator.
    pub fn from_body(body: &[T]) -> Self {
        assert!(
            !body.iter().any(|e| e.is_sentinel()),
            "body must not contain the terminator"
        );
        let mut elems = SmallVec::with_capacity(body.len() + 1);
        elems.extend_from_slice(body);
        elems.push(T::SENTINEL);
        Self { elems }
    }

    /// Appends `elem` before the terminator.
    ///
    /// # Panics
    ///
    /// If `elem` is the terminator.
    pub fn push(&mut self, elem: T) {
        assert!(!elem.is_sentinel(), "cannot push the terminator");
        let end = self.elems.len() - 1;
        self.elems.insert(end, elem);
    }

    /// Number of elements before the terminator.
    pub fn len(&self) -> usize {
        self.elems.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the buffer has moved to the heap.
    pub fn spilled(&self) -> bool {
        self.elems.spilled()
    }

    /// The elements before the terminator.
    pub fn body(&self) -> &[T] {
        &self.elems[..self.len()]
    }

    /// The elements including the terminator.
    pub fn as_slice_with_sentinel(&self) -> &[T] {
        &self.elems
    }

    pub fn as_ptr(&self) -> *const T {
        self.elems.as_ptr()
    }

    pub fn as_sentinel_ptr(&self) -> SentinelPtr<T> {
        SentinelPtr::assume(self.elems.as_ptr())
    }

    pub fn as_sentinel_ptr_mut(&mut self) -> SentinelPtrMut<T> {
        SentinelPtrMut::assume(self.elems.as_mut_ptr())
    }

    pub fn as_sentinel_array(&self) -> SentinelArray<T> {
        SentinelArray::new(self.len(), self.as_sentinel_ptr())
    }
}

impl<T: Sentinel + Copy> Default for TerminatedBuf<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminatedBuf<c_char> {
    /// Builds a C string buffer from UTF-8 text.
    ///
    /// # Panics
    ///
    /// If `text` contains an interior NUL.
    pub fn c_string(text: &str) -> Self {
        let body: Vec<c_char> = text.bytes().map(|b| b as c_char).collect();
        Self::from_body(&body)
    }
}
