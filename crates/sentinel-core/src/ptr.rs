//! Sentinel-terminated pointer wrappers.
//!
//! [`SentinelPtr`] and [`SentinelPtrMut`] are `#[repr(transparent)]`
//! wrappers over `*const T` / `*mut T`. Wrapping is an assertion, not a
//! check: [`SentinelPtr::assume`] records that the caller vouches for a
//! terminator somewhere at or after the address. Everything that reads
//! through the address is `unsafe` and carries the same contract.

#![allow(unsafe_code)]

use core::ffi::{c_char, CStr};
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::{ptr, slice};

use crate::config::ScanConfig;
use crate::error::SentinelError;
use crate::sentinel::Sentinel;

/// A read-only pointer to a sentinel-terminated buffer of `T`.
///
/// Exactly one address wide. Does not own the buffer and does not track
/// its lifetime; the caller keeps the buffer alive and unmodified for as
/// long as it reads through this value.
#[repr(transparent)]
pub struct SentinelPtr<T> {
    ptr: *const T,
}

impl<T> SentinelPtr<T> {
    /// Wraps `ptr`, asserting that it references a sentinel-terminated
    /// buffer (or is null, where null is meaningful to the caller).
    ///
    /// Performs no validation. Use
    /// [`from_slice_with_sentinel`](Self::from_slice_with_sentinel) when
    /// the buffer is available as a slice and should be checked.
    #[inline]
    pub const fn assume(ptr: *const T) -> Self {
        Self { ptr }
    }

    /// The null sentinel pointer.
    #[inline]
    pub const fn null() -> Self {
        Self { ptr: ptr::null() }
    }

    /// Returns `true` if the wrapped address is null.
    #[inline]
    pub fn is_null(self) -> bool {
        self.ptr.is_null()
    }

    /// Returns the wrapped address.
    #[inline]
    pub const fn as_ptr(self) -> *const T {
        self.ptr
    }
}

impl<T: Sentinel> SentinelPtr<T> {
    /// Wraps the start of `slice` after checking that it contains a terminator.
    ///
    /// The returned pointer is only as valid as the borrow it came from.
    pub fn from_slice_with_sentinel(slice: &[T]) -> Result<Self, SentinelError> {
        if slice.iter().any(|e| e.is_sentinel()) {
            Ok(Self::assume(slice.as_ptr()))
        } else {
            Err(SentinelError::MissingSentinel {
                scanned: slice.len(),
            })
        }
    }

    /// Counts the elements before the first terminator.
    ///
    /// O(n) in the number of elements scanned. Reads only; never
    /// allocates.
    ///
    /// # Safety
    ///
    /// - The address must be non-null, aligned, and point into a live
    ///   allocation.
    /// - A terminator must be reachable by forward traversal within that
    ///   allocation, and nothing may write to the scanned range while
    ///   this runs.
    pub unsafe fn walk_length(self) -> usize {
        debug_assert!(!self.ptr.is_null(), "walk_length on a null SentinelPtr");

        let mut len = 0;
        // SAFETY: the caller guarantees every element up to and including
        // the terminator is readable.
        while !unsafe { &*self.ptr.add(len) }.is_sentinel() {
            len += 1;
        }
        len
    }

    /// Counts the elements before the first terminator, examining at most
    /// `max` elements.
    ///
    /// Returns `Some(n)` with `n < max` if a terminator was found, and
    /// `None` if the first `max` elements contain none or the address is
    /// null.
    ///
    /// # Safety
    ///
    /// If non-null, the address must be aligned and the first
    /// `min(max, n + 1)` elements must be readable, where `n` is the
    /// position of the terminator.
    pub unsafe fn walk_length_bounded(self, max: usize) -> Option<usize> {
        if self.ptr.is_null() {
            return None;
        }
        // SAFETY: reads stop at the terminator or at `max`, both within
        // the range the caller vouched for.
        (0..max).find(|&i| unsafe { &*self.ptr.add(i) }.is_sentinel())
    }

    /// Checked length walk driven by `config`.
    ///
    /// # Errors
    ///
    /// - [`SentinelError::NullPointer`] if the address is null and
    ///   `config.allow_null` is unset.
    /// - [`SentinelError::MissingSentinel`] if `config.max_elements` is
    ///   set and no terminator appears within it.
    ///
    /// # Safety
    ///
    /// Same as [`walk_length_bounded`](Self::walk_length_bounded) when a
    /// limit is configured, and as [`walk_length`](Self::walk_length)
    /// otherwise.
    pub unsafe fn try_walk_length(self, config: &ScanConfig) -> Result<usize, SentinelError> {
        if self.ptr.is_null() {
            return if config.allow_null {
                Ok(0)
            } else {
                Err(SentinelError::NullPointer)
            };
        }
        match config.max_elements {
            // SAFETY: forwarded caller contract.
            Some(max) => unsafe { self.walk_length_bounded(max) }
                .ok_or(SentinelError::MissingSentinel { scanned: max }),
            // SAFETY: forwarded caller contract.
            None => Ok(unsafe { self.walk_length() }),
        }
    }

    /// Borrows the elements before the terminator.
    ///
    /// # Safety
    ///
    /// Same as [`walk_length`](Self::walk_length), and the buffer must
    /// stay alive and unmodified for `'a`.
    pub unsafe fn as_slice<'a>(self) -> &'a [T] {
        // SAFETY: forwarded caller contract.
        let len = unsafe { self.walk_length() };
        // SAFETY: `len` elements starting at `ptr` were just read.
        unsafe { slice::from_raw_parts(self.ptr, len) }
    }

    /// Borrows the elements up to and including the terminator.
    ///
    /// # Safety
    ///
    /// Same as [`as_slice`](Self::as_slice).
    pub unsafe fn as_slice_with_sentinel<'a>(self) -> &'a [T] {
        // SAFETY: forwarded caller contract.
        let len = unsafe { self.walk_length() };
        // SAFETY: the terminator at index `len` is part of the buffer.
        unsafe { slice::from_raw_parts(self.ptr, len + 1) }
    }

    /// Iterates over the elements before the terminator.
    ///
    /// A null address yields an empty iterator.
    ///
    /// # Safety
    ///
    /// If non-null, same as [`as_slice`](Self::as_slice).
    pub unsafe fn iter<'a>(self) -> Iter<'a, T> {
        Iter {
            cur: self.ptr,
            done: self.ptr.is_null(),
            _marker: PhantomData,
        }
    }
}

impl SentinelPtr<c_char> {
    /// Wraps the start of a [`CStr`], which is NUL-terminated by construction.
    #[inline]
    pub fn from_cstr(s: &CStr) -> Self {
        Self::assume(s.as_ptr())
    }

    /// Reinterprets the buffer as a [`CStr`].
    ///
    /// # Safety
    ///
    /// Same as [`CStr::from_ptr`].
    pub unsafe fn as_cstr<'a>(self) -> &'a CStr {
        // SAFETY: forwarded caller contract.
        unsafe { CStr::from_ptr(self.ptr) }
    }
}

impl<T> Clone for SentinelPtr<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SentinelPtr<T> {}

impl<T> PartialEq for SentinelPtr<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.ptr, other.ptr)
    }
}

impl<T> Eq for SentinelPtr<T> {}

impl<T> Hash for SentinelPtr<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ptr.hash(state);
    }
}

impl<T> fmt::Debug for SentinelPtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SentinelPtr").field(&self.ptr).finish()
    }
}

impl<T> fmt::Pointer for SentinelPtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Pointer::fmt(&self.ptr, f)
    }
}

impl<T> From<SentinelPtr<T>> for *const T {
    #[inline]
    fn from(p: SentinelPtr<T>) -> Self {
        p.ptr
    }
}

/// A mutable pointer to a sentinel-terminated buffer of `T`.
///
/// Same contract as [`SentinelPtr`]; additionally permits writes through
/// [`as_mut_slice`](Self::as_mut_slice). Overwriting the terminator
/// breaks the contract for every other view of the buffer.
#[repr(transparent)]
pub struct SentinelPtrMut<T> {
    ptr: *mut T,
}

impl<T> SentinelPtrMut<T> {
    /// Wraps `ptr`, asserting that it references a sentinel-terminated
    /// buffer. Performs no validation.
    #[inline]
    pub const fn assume(ptr: *mut T) -> Self {
        Self { ptr }
    }

    /// The null sentinel pointer.
    #[inline]
    pub const fn null() -> Self {
        Self {
            ptr: ptr::null_mut(),
        }
    }

    /// Returns `true` if the wrapped address is null.
    #[inline]
    pub fn is_null(self) -> bool {
        self.ptr.is_null()
    }

    /// Returns the wrapped address.
    #[inline]
    pub const fn as_mut_ptr(self) -> *mut T {
        self.ptr
    }

    /// Returns the wrapped address as a read-only pointer.
    #[inline]
    pub const fn as_ptr(self) -> *const T {
        self.ptr as *const T
    }

    /// Drops write access, keeping the sentinel contract.
    #[inline]
    pub const fn as_const(self) -> SentinelPtr<T> {
        SentinelPtr::assume(self.ptr as *const T)
    }
}

impl<T: Sentinel> SentinelPtrMut<T> {
    /// Wraps the start of `slice` after checking that it contains a terminator.
    pub fn from_mut_slice_with_sentinel(slice: &mut [T]) -> Result<Self, SentinelError> {
        if slice.iter().any(|e| e.is_sentinel()) {
            Ok(Self::assume(slice.as_mut_ptr()))
        } else {
            Err(SentinelError::MissingSentinel {
                scanned: slice.len(),
            })
        }
    }

    /// Counts the elements before the first terminator.
    ///
    /// # Safety
    ///
    /// Same as [`SentinelPtr::walk_length`].
    #[inline]
    pub unsafe fn walk_length(self) -> usize {
        // SAFETY: forwarded caller contract.
        unsafe { self.as_const().walk_length() }
    }

    /// Bounded variant of [`walk_length`](Self::walk_length).
    ///
    /// # Safety
    ///
    /// Same as [`SentinelPtr::walk_length_bounded`].
    #[inline]
    pub unsafe fn walk_length_bounded(self, max: usize) -> Option<usize> {
        // SAFETY: forwarded caller contract.
        unsafe { self.as_const().walk_length_bounded(max) }
    }

    /// Mutably borrows the elements before the terminator.
    ///
    /// The terminator itself is excluded so it cannot be overwritten
    /// through the returned slice.
    ///
    /// # Safety
    ///
    /// Same as [`SentinelPtr::as_slice`], and no other reference to the
    /// buffer may be live for `'a`.
    pub unsafe fn as_mut_slice<'a>(self) -> &'a mut [T] {
        // SAFETY: forwarded caller contract.
        let len = unsafe { self.walk_length() };
        // SAFETY: `len` elements were just read and the caller guarantees
        // exclusive access.
        unsafe { slice::from_raw_parts_mut(self.ptr, len) }
    }
}

impl SentinelPtrMut<c_char> {
    /// Reinterprets the buffer as a [`CStr`].
    ///
    /// # Safety
    ///
    /// Same as [`CStr::from_ptr`].
    pub unsafe fn as_cstr<'a>(self) -> &'a CStr {
        // SAFETY: forwarded caller contract.
        unsafe { self.as_const().as_cstr() }
    }
}

impl<T> Clone for SentinelPtrMut<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SentinelPtrMut<T> {}

impl<T> PartialEq for SentinelPtrMut<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.ptr, other.ptr)
    }
}

impl<T> Eq for SentinelPtrMut<T> {}

impl<T> Hash for SentinelPtrMut<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ptr.hash(state);
    }
}

impl<T> fmt::Debug for SentinelPtrMut<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SentinelPtrMut").field(&self.ptr).finish()
    }
}

impl<T> fmt::Pointer for SentinelPtrMut<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Pointer::fmt(&self.ptr, f)
    }
}

impl<T> From<SentinelPtrMut<T>> for *mut T {
    #[inline]
    fn from(p: SentinelPtrMut<T>) -> Self {
        p.ptr
    }
}

impl<T> From<SentinelPtrMut<T>> for SentinelPtr<T> {
    #[inline]
    fn from(p: SentinelPtrMut<T>) -> Self {
        p.as_const()
    }
}

/// Iterator over the elements of a sentinel-terminated buffer.
///
/// Created by [`SentinelPtr::iter`]. Stops at, and does not yield, the
/// terminator.
pub struct Iter<'a, T> {
    cur: *const T,
    done: bool,
    _marker: PhantomData<&'a T>,
}

impl<'a, T: Sentinel> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.done {
            return None;
        }
        // SAFETY: `cur` never advances past the terminator, which the
        // caller of `SentinelPtr::iter` guaranteed is readable for `'a`.
        let item = unsafe { &*self.cur };
        if item.is_sentinel() {
            self.done = true;
            return None;
        }
        // SAFETY: `item` is not the terminator, so the next element is
        // still inside the buffer.
        self.cur = unsafe { self.cur.add(1) };
        Some(item)
    }
}

impl<T: Sentinel> FusedIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::mem::size_of;

    #[test]
    fn assume_then_as_ptr_round_trips() {
        let buf = [1u8, 2, 3, 0];
        let raw = buf.as_ptr();
        let p = SentinelPtr::assume(raw);
        assert_eq!(p.as_ptr(), raw);
        let back: *const u8 = p.into();
        assert_eq!(back, raw);
    }

    #[test]
    fn walk_length_counts_before_terminator() {
        let buf = [5u32, 6, 7, 0, 9];
        let p = SentinelPtr::assume(buf.as_ptr());
        assert_eq!(unsafe { p.walk_length() }, 3);
    }

    #[test]
    fn walk_length_of_empty_buffer_is_zero() {
        let buf = [0u8];
        let p = SentinelPtr::assume(buf.as_ptr());
        assert_eq!(unsafe { p.walk_length() }, 0);
    }

    #[test]
    fn walk_does_not_mutate() {
        let buf = [b'a', b'b', 0u8];
        let before = buf;
        let p = SentinelPtr::assume(buf.as_ptr());
        let _ = unsafe { p.walk_length() };
        assert_eq!(buf, before);
    }

    #[test]
    fn bounded_walk_stops_at_limit() {
        let buf = [1u8, 2, 3, 0];
        let p = SentinelPtr::assume(buf.as_ptr());
        assert_eq!(unsafe { p.walk_length_bounded(4) }, Some(3));
        assert_eq!(unsafe { p.walk_length_bounded(3) }, None);
        assert_eq!(unsafe { p.walk_length_bounded(0) }, None);
    }

    #[test]
    fn bounded_walk_on_null_is_none() {
        let p = SentinelPtr::<u8>::null();
        assert!(p.is_null());
        assert_eq!(unsafe { p.walk_length_bounded(8) }, None);
    }

    #[test]
    fn try_walk_length_applies_config() {
        let buf = [1i16, 2, 0];
        let p = SentinelPtr::assume(buf.as_ptr());
        assert_eq!(unsafe { p.try_walk_length(&ScanConfig::default()) }, Ok(2));
        assert_eq!(unsafe { p.try_walk_length(&ScanConfig::bounded(3)) }, Ok(2));
        assert_eq!(
            unsafe { p.try_walk_length(&ScanConfig::bounded(2)) },
            Err(SentinelError::MissingSentinel { scanned: 2 })
        );

        let null = SentinelPtr::<i16>::null();
        assert_eq!(
            unsafe { null.try_walk_length(&ScanConfig::default()) },
            Err(SentinelError::NullPointer)
        );
        assert_eq!(
            unsafe { null.try_walk_length(&ScanConfig::new().with_allow_null(true)) },
            Ok(0)
        );
    }

    #[test]
    fn from_slice_requires_terminator() {
        let good = [3u8, 0];
        assert!(SentinelPtr::from_slice_with_sentinel(&good).is_ok());

        let bad = [3u8, 4];
        assert_eq!(
            SentinelPtr::from_slice_with_sentinel(&bad),
            Err(SentinelError::MissingSentinel { scanned: 2 })
        );
    }

    #[test]
    fn slices_exclude_and_include_terminator() {
        let buf = [b'h', b'i', 0u8, b'x'];
        let p = SentinelPtr::from_slice_with_sentinel(&buf).unwrap();
        assert_eq!(unsafe { p.as_slice() }, b"hi");
        assert_eq!(unsafe { p.as_slice_with_sentinel() }, b"hi\0");
    }

    #[test]
    fn iter_yields_elements_before_terminator() {
        let buf = ['a', 'b', 'c', '\0', 'd'];
        let p = SentinelPtr::assume(buf.as_ptr());
        let s: String = unsafe { p.iter() }.collect();
        assert_eq!(s, "abc");

        let mut it = unsafe { p.iter() };
        for _ in 0..3 {
            assert!(it.next().is_some());
        }
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn iter_over_null_is_empty() {
        let p = SentinelPtr::<u8>::null();
        assert_eq!(unsafe { p.iter() }.count(), 0);
    }

    #[test]
    fn cstr_interop() {
        let s = c"hello";
        let p = SentinelPtr::from_cstr(s);
        assert_eq!(unsafe { p.walk_length() }, 5);
        assert_eq!(unsafe { p.as_cstr() }, s);
    }

    #[test]
    fn null_terminated_pointer_vector() {
        let a = c"one";
        let b = c"two";
        let argv: [*const c_char; 3] = [a.as_ptr(), b.as_ptr(), ptr::null()];
        let p = SentinelPtr::assume(argv.as_ptr());
        assert_eq!(unsafe { p.walk_length() }, 2);
    }

    #[test]
    fn wrapper_is_pointer_sized() {
        assert_eq!(size_of::<SentinelPtr<u8>>(), size_of::<*const u8>());
        assert_eq!(size_of::<SentinelPtrMut<u64>>(), size_of::<*mut u64>());
        assert_eq!(size_of::<Option<SentinelPtr<u8>>>(), 2 * size_of::<usize>());
    }

    #[test]
    fn equality_and_hash_follow_address() {
        let buf = [1u8, 0];
        let a = SentinelPtr::assume(buf.as_ptr());
        let b = SentinelPtr::assume(buf.as_ptr());
        let c = SentinelPtr::assume(buf[1..].as_ptr());
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn debug_and_pointer_formatting() {
        let p = SentinelPtr::<u8>::null();
        assert_eq!(format!("{p:p}"), format!("{:p}", ptr::null::<u8>()));
        assert!(format!("{p:?}").starts_with("SentinelPtr("));
    }

    #[test]
    fn mut_ptr_writes_through_and_keeps_terminator() {
        let mut buf = *b"abc\0";
        let p = SentinelPtrMut::from_mut_slice_with_sentinel(&mut buf).unwrap();
        unsafe { p.as_mut_slice() }.make_ascii_uppercase();
        assert_eq!(unsafe { p.walk_length() }, 3);
        assert_eq!(unsafe { p.walk_length_bounded(3) }, None);
        assert_eq!(&buf, b"ABC\0");
    }

    #[test]
    fn mut_ptr_converts_to_const_and_raw() {
        let mut buf = [b'x' as c_char, 0];
        let raw = buf.as_mut_ptr();
        let p = SentinelPtrMut::assume(raw);
        let back: *mut c_char = p.into();
        assert_eq!(back, raw);

        let c: SentinelPtr<c_char> = p.into();
        assert_eq!(c.as_ptr(), raw as *const c_char);
        assert_eq!(unsafe { p.as_cstr() }.to_bytes(), b"x");
        assert!(SentinelPtrMut::<u8>::null().is_null());
    }
}
