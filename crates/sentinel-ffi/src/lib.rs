//! C ABI for sentinel-terminated string and pointer-vector views.
//!
//! Every exported function returns an `i32` [`SentinelStatus`](status::SentinelStatus)
//! code and writes results through caller-provided out-pointers. Panics
//! are caught at the boundary and reported as `Panicked`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

/// Runs `$body` under `catch_unwind`, mapping a panic to `Panicked`.
///
/// `return` inside the body returns from the guarded closure, so early
/// exits with a status code work as in a plain function body.
macro_rules! ffi_guard {
    ($body:block) => {
        ffi_guard_or!($crate::status::SentinelStatus::Panicked as i32, $body)
    };
}

/// Like `ffi_guard!`, with an explicit fallback value on panic.
macro_rules! ffi_guard_or {
    ($fallback:expr, $body:block) => {
        match ::std::panic::catch_unwind(::std::panic::AssertUnwindSafe(|| $body)) {
            Ok(v) => v,
            Err(_) => $fallback,
        }
    };
}

pub mod cstr;
pub mod status;
pub mod types;
pub mod vec;
