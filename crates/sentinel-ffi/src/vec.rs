//! NULL-terminated pointer vectors (`argv`, `envp`, and the like).

use std::ffi::c_char;

use sentinel_core::SentinelPtr;

use crate::status::SentinelStatus;

/// Count the entries of a NULL-terminated vector of C strings.
///
/// `vec` must end with a null pointer. Writes the number of entries
/// before it to `*out_count`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn sentinel_ptr_vec_count(
    vec: *const *const c_char,
    out_count: *mut usize,
) -> i32 {
    ffi_guard!({
        if out_count.is_null() {
            return SentinelStatus::InvalidArgument as i32;
        }
        if vec.is_null() {
            return SentinelStatus::NullPointer as i32;
        }
        // SAFETY: caller guarantees `vec` is NULL-terminated.
        let count = unsafe { SentinelPtr::assume(vec).walk_length() };
        // SAFETY: out_count is valid per caller contract.
        unsafe { *out_count = count };
        SentinelStatus::Ok as i32
    })
}
