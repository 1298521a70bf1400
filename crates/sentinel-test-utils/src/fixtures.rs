//! Deterministic buffer contents.
//!
//! - [`nonzero_bytes`]: pseudo-random bytes that never equal the terminator.
//! - [`c_strings`]: a set of C strings with assorted lengths.
//! - [`argv_of`]: a NULL-terminated pointer vector over existing strings.

use std::ffi::c_char;

use crate::TerminatedBuf;

/// `len` pseudo-random bytes in `1..=255`, reproducible from `seed`.
pub fn nonzero_bytes(seed: u64, len: usize) -> Vec<u8> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 33) % 255) as u8 + 1
        })
        .collect()
}

/// One C string for each entry in `lengths`, bodies from [`nonzero_bytes`].
pub fn c_strings(seed: u64, lengths: &[usize]) -> Vec<TerminatedBuf<c_char>> {
    lengths
        .iter()
        .enumerate()
        .map(|(i, &len)| {
            let body: Vec<c_char> = nonzero_bytes(seed ^ i as u64, len)
                .into_iter()
                .map(|b| b as c_char)
                .collect();
            TerminatedBuf::from_body(&body)
        })
        .collect()
}

/// A NULL-terminated vector pointing at each of `strings`.
///
/// The vector borrows nothing; keep `strings` alive while it is used.
pub fn argv_of(strings: &[TerminatedBuf<c_char>]) -> TerminatedBuf<*const c_char> {
    let ptrs: Vec<*const c_char> = strings.iter().map(|s| s.as_ptr()).collect();
    TerminatedBuf::from_body(&ptrs)
}
