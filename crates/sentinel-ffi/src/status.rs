//! C-compatible status codes.
//!
//! [`SentinelStatus`] is a `repr(i32)` enum covering every error the
//! exported functions can report. Conversion from [`SentinelError`] is
//! provided so checked core operations map straight onto return codes.

use std::ffi::{c_char, CStr};

use sentinel_core::SentinelError;

/// C-compatible status code returned by all FFI functions.
///
/// `Ok` = 0, all errors are negative. Values are ABI-stable.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SentinelStatus {
    /// Success.
    Ok = 0,
    /// An out-pointer or size argument is null, zero, or otherwise invalid.
    InvalidArgument = -1,
    /// The sentinel-terminated input pointer is null.
    NullPointer = -2,
    /// No terminator was found within the permitted range.
    MissingSentinel = -3,
    /// An array's declared length disagrees with its terminator.
    LengthMismatch = -4,
    /// Caller-provided buffer is too small; output was truncated.
    BufferTooSmall = -5,
    /// A Rust panic was caught at the FFI boundary.
    Panicked = -128,
}

impl SentinelStatus {
    /// Every status, in declaration order.
    pub const ALL: [SentinelStatus; 7] = [
        SentinelStatus::Ok,
        SentinelStatus::InvalidArgument,
        SentinelStatus::NullPointer,
        SentinelStatus::MissingSentinel,
        SentinelStatus::LengthMismatch,
        SentinelStatus::BufferTooSmall,
        SentinelStatus::Panicked,
    ];

    /// Looks up the status for a raw code.
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|s| *s as i32 == code)
    }

    /// Static, NUL-terminated name of the status.
    pub fn as_cstr(self) -> &'static CStr {
        match self {
            Self::Ok => c"SENTINEL_STATUS_OK",
            Self::InvalidArgument => c"SENTINEL_STATUS_INVALID_ARGUMENT",
            Self::NullPointer => c"SENTINEL_STATUS_NULL_POINTER",
            Self::MissingSentinel => c"SENTINEL_STATUS_MISSING_SENTINEL",
            Self::LengthMismatch => c"SENTINEL_STATUS_LENGTH_MISMATCH",
            Self::BufferTooSmall => c"SENTINEL_STATUS_BUFFER_TOO_SMALL",
            Self::Panicked => c"SENTINEL_STATUS_PANICKED",
        }
    }
}

impl From<&SentinelError> for SentinelStatus {
    fn from(e: &SentinelError) -> Self {
        match e {
            SentinelError::NullPointer => SentinelStatus::NullPointer,
            SentinelError::MissingSentinel { .. } => SentinelStatus::MissingSentinel,
            SentinelError::LengthMismatch { .. } => SentinelStatus::LengthMismatch,
        }
    }
}

/// Name of a status code as a static NUL-terminated string.
///
/// Unknown codes return null.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn sentinel_status_str(code: i32) -> *const c_char {
    ffi_guard_or!(std::ptr::null(), {
        match SentinelStatus::from_code(code) {
            Some(status) => status.as_cstr().as_ptr(),
            None => std::ptr::null(),
        }
    })
}
