//! C string functions: length walks, length-prefixed views, bounded copy.
//!
//! All functions treat the input as a [`CStrPtr`]: the caller asserts it
//! is NUL-terminated. A null input is reported as `NullPointer`; a null
//! out-pointer as `InvalidArgument`.

use std::ffi::c_char;

use sentinel_core::{CStrPtr, ScanConfig, SentinelArray};

use crate::status::SentinelStatus;
use crate::types::SentinelCStrArray;

/// Length of a NUL-terminated string, excluding the terminator.
///
/// `s` must be NUL-terminated. Writes the length to `*out_len`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn sentinel_cstr_length(s: *const c_char, out_len: *mut usize) -> i32 {
    ffi_guard!({
        if out_len.is_null() {
            return SentinelStatus::InvalidArgument as i32;
        }
        if s.is_null() {
            return SentinelStatus::NullPointer as i32;
        }
        // SAFETY: caller guarantees `s` is NUL-terminated.
        let len = unsafe { CStrPtr::assume(s).walk_length() };
        // SAFETY: out_len is valid per caller contract.
        unsafe { *out_len = len };
        SentinelStatus::Ok as i32
    })
}

/// Length of a string that is NUL-terminated within `max` bytes.
///
/// Reads at most `max` bytes. Returns `MissingSentinel` without writing
/// `*out_len` if none of them is NUL.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn sentinel_cstr_length_bounded(
    s: *const c_char,
    max: usize,
    out_len: *mut usize,
) -> i32 {
    ffi_guard!({
        if out_len.is_null() {
            return SentinelStatus::InvalidArgument as i32;
        }
        // SAFETY: caller guarantees `max` bytes (or up to the NUL) are readable.
        match unsafe { CStrPtr::assume(s).try_walk_length(&ScanConfig::bounded(max)) } {
            Ok(len) => {
                // SAFETY: out_len is valid per caller contract.
                unsafe { *out_len = len };
                SentinelStatus::Ok as i32
            }
            Err(e) => SentinelStatus::from(&e) as i32,
        }
    })
}

/// Build a length-prefixed view of a NUL-terminated string.
///
/// Walks `s` once and writes `{ length, s }` to `*out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn sentinel_cstr_array_make(s: *const c_char, out: *mut SentinelCStrArray) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return SentinelStatus::InvalidArgument as i32;
        }
        if s.is_null() {
            return SentinelStatus::NullPointer as i32;
        }
        let ptr = CStrPtr::assume(s);
        // SAFETY: caller guarantees `s` is NUL-terminated.
        let length = unsafe { ptr.walk_length() };
        let array = SentinelArray::new(length, ptr);
        // SAFETY: out is valid per caller contract.
        unsafe { *out = array.into() };
        SentinelStatus::Ok as i32
    })
}

/// Check that `array->ptr[array->length]` is the first NUL in the buffer.
///
/// Reads at most `array->length + 1` bytes.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn sentinel_cstr_array_verify(array: *const SentinelCStrArray) -> i32 {
    ffi_guard!({
        if array.is_null() {
            return SentinelStatus::InvalidArgument as i32;
        }
        // SAFETY: array is valid per caller contract.
        let array: SentinelArray<c_char> = unsafe { *array }.into();
        // SAFETY: caller guarantees `length + 1` bytes (or up to the NUL)
        // are readable.
        match unsafe { array.verify() } {
            Ok(()) => SentinelStatus::Ok as i32,
            Err(e) => SentinelStatus::from(&e) as i32,
        }
    })
}

/// Copy a NUL-terminated string into a caller buffer of `cap` bytes.
///
/// Copies at most `cap - 1` bytes and always NUL-terminates `buf`. If
/// `out_len` is non-null it receives the full source length, so a caller
/// can size a retry. Returns `BufferTooSmall` when the output was
/// truncated.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn sentinel_cstr_copy(
    s: *const c_char,
    buf: *mut c_char,
    cap: usize,
    out_len: *mut usize,
) -> i32 {
    ffi_guard!({
        if buf.is_null() || cap == 0 {
            return SentinelStatus::InvalidArgument as i32;
        }
        if s.is_null() {
            return SentinelStatus::NullPointer as i32;
        }
        // SAFETY: caller guarantees `s` is NUL-terminated.
        let src = unsafe { CStrPtr::assume(s).as_slice() };
        let copy_len = src.len().min(cap - 1);
        // SAFETY: buf points to cap valid bytes and does not overlap `s`.
        unsafe {
            std::ptr::copy_nonoverlapping(src.as_ptr(), buf, copy_len);
            *buf.add(copy_len) = 0;
        }
        if !out_len.is_null() {
            // SAFETY: out_len is valid per caller contract.
            unsafe { *out_len = src.len() };
        }
        if copy_len < src.len() {
            SentinelStatus::BufferTooSmall as i32
        } else {
            SentinelStatus::Ok as i32
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use sentinel_test_utils::TerminatedBuf;
    use std::ffi::CStr;

    const OK: i32 = SentinelStatus::Ok as i32;

    #[test]
    fn length_of_c_string() {
        let mut len = usize::MAX;
        assert_eq!(sentinel_cstr_length(c"sentinel".as_ptr(), &mut len), OK);
        assert_eq!(len, 8);

        assert_eq!(sentinel_cstr_length(c"".as_ptr(), &mut len), OK);
        assert_eq!(len, 0);
    }

    #[test]
    fn length_rejects_null_arguments() {
        let mut len = 0usize;
        assert_eq!(
            sentinel_cstr_length(std::ptr::null(), &mut len),
            SentinelStatus::NullPointer as i32
        );
        assert_eq!(
            sentinel_cstr_length(c"x".as_ptr(), std::ptr::null_mut()),
            SentinelStatus::InvalidArgument as i32
        );
    }

    #[test]
    fn bounded_length_respects_limit() {
        let buf = TerminatedBuf::<c_char>::from_body(&[b'a' as c_char, b'b' as c_char]);
        let mut len = 99usize;
        assert_eq!(sentinel_cstr_length_bounded(buf.as_ptr(), 3, &mut len), OK);
        assert_eq!(len, 2);

        len = 99;
        assert_eq!(
            sentinel_cstr_length_bounded(buf.as_ptr(), 2, &mut len),
            SentinelStatus::MissingSentinel as i32
        );
        assert_eq!(len, 99, "out_len must be untouched on failure");

        assert_eq!(
            sentinel_cstr_length_bounded(std::ptr::null(), 8, &mut len),
            SentinelStatus::NullPointer as i32
        );
    }

    #[test]
    fn array_make_then_verify() {
        let mut arr = SentinelCStrArray::default();
        let s = c"four";
        assert_eq!(sentinel_cstr_array_make(s.as_ptr(), &mut arr), OK);
        assert_eq!(arr.length, 4);
        assert_eq!(arr.ptr, s.as_ptr());
        assert_eq!(sentinel_cstr_array_verify(&arr), OK);
    }

    #[test]
    fn verify_detects_mismatch_and_null() {
        let s = c"four";
        let short = SentinelCStrArray {
            length: 2,
            ptr: s.as_ptr(),
        };
        assert_eq!(
            sentinel_cstr_array_verify(&short),
            SentinelStatus::LengthMismatch as i32
        );

        let null = SentinelCStrArray::default();
        assert_eq!(
            sentinel_cstr_array_verify(&null),
            SentinelStatus::NullPointer as i32
        );
        assert_eq!(
            sentinel_cstr_array_verify(std::ptr::null()),
            SentinelStatus::InvalidArgument as i32
        );
        assert_eq!(
            sentinel_cstr_array_make(s.as_ptr(), std::ptr::null_mut()),
            SentinelStatus::InvalidArgument as i32
        );
    }

    #[test]
    #[allow(unsafe_code)]
    fn copy_fits() {
        let mut buf = [0x7f as c_char; 16];
        let mut len = 0usize;
        assert_eq!(
            sentinel_cstr_copy(c"hello".as_ptr(), buf.as_mut_ptr(), buf.len(), &mut len),
            OK
        );
        assert_eq!(len, 5);
        // SAFETY: buf was NUL-terminated by the copy.
        let out = unsafe { CStr::from_ptr(buf.as_ptr()) };
        assert_eq!(out.to_bytes(), b"hello");
    }

    #[test]
    #[allow(unsafe_code)]
    fn copy_truncates_and_terminates() {
        let mut buf = [0x7f as c_char; 4];
        let mut len = 0usize;
        assert_eq!(
            sentinel_cstr_copy(c"hello".as_ptr(), buf.as_mut_ptr(), buf.len(), &mut len),
            SentinelStatus::BufferTooSmall as i32
        );
        assert_eq!(len, 5);
        // SAFETY: buf was NUL-terminated by the copy.
        let out = unsafe { CStr::from_ptr(buf.as_ptr()) };
        assert_eq!(out.to_bytes(), b"hel");
    }

    #[test]
    #[allow(unsafe_code)]
    fn copy_into_owned_buffer_through_mut_view() {
        let mut dst = TerminatedBuf::<c_char>::from_body(&[b'.' as c_char; 7]);
        let cap = dst.len() + 1;
        let view = dst.as_sentinel_ptr_mut();
        let mut len = 0usize;
        assert_eq!(
            sentinel_cstr_copy(c"abc".as_ptr(), view.as_mut_ptr(), cap, &mut len),
            OK
        );
        assert_eq!(len, 3);
        // SAFETY: the copy terminated the buffer after three bytes.
        assert_eq!(unsafe { view.walk_length() }, 3);
        assert_eq!(unsafe { view.as_cstr() }.to_bytes(), b"abc");
    }

    #[test]
    fn copy_rejects_bad_buffers() {
        let mut buf = [0 as c_char; 4];
        assert_eq!(
            sentinel_cstr_copy(c"x".as_ptr(), buf.as_mut_ptr(), 0, std::ptr::null_mut()),
            SentinelStatus::InvalidArgument as i32
        );
        assert_eq!(
            sentinel_cstr_copy(c"x".as_ptr(), std::ptr::null_mut(), 4, std::ptr::null_mut()),
            SentinelStatus::InvalidArgument as i32
        );
        assert_eq!(
            sentinel_cstr_copy(std::ptr::null(), buf.as_mut_ptr(), 4, std::ptr::null_mut()),
            SentinelStatus::NullPointer as i32
        );
    }

    proptest! {
        #[test]
        #[allow(unsafe_code)]
        fn copy_output_is_prefix_of_source(
            body in prop::collection::vec(1u8..=u8::MAX, 0..64),
            cap in 1usize..80,
        ) {
            let src = TerminatedBuf::<c_char>::from_body(
                &body.iter().map(|&b| b as c_char).collect::<Vec<_>>(),
            );
            let mut out = vec![0x7f as c_char; cap];
            let mut len = 0usize;
            let rc = sentinel_cstr_copy(src.as_ptr(), out.as_mut_ptr(), cap, &mut len);

            prop_assert_eq!(len, body.len());
            let fits = body.len() < cap;
            prop_assert_eq!(rc == OK, fits);
            // SAFETY: out was NUL-terminated by the copy.
            let copied = unsafe { CStr::from_ptr(out.as_ptr()) }.to_bytes();
            prop_assert_eq!(copied, &body[..body.len().min(cap - 1)]);
        }
    }
}
