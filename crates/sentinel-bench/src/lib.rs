//! Benchmark profiles for sentinel-ptr.
//!
//! - [`PROFILE_LENGTHS`]: buffer lengths used by every walk benchmark.
//! - [`byte_profile`]: one terminated byte buffer per profile length.
//! - [`argv_profile`]: a pointer vector over C strings of mixed lengths.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::ffi::c_char;

use sentinel_test_utils::fixtures::{argv_of, c_strings, nonzero_bytes};
use sentinel_test_utils::TerminatedBuf;

/// Body lengths, from inline-sized to well past a page.
pub const PROFILE_LENGTHS: [usize; 4] = [8, 64, 1024, 65_536];

/// One terminated byte buffer per entry in [`PROFILE_LENGTHS`].
pub fn byte_profile(seed: u64) -> Vec<TerminatedBuf<u8>> {
    PROFILE_LENGTHS
        .iter()
        .map(|&len| TerminatedBuf::from_body(&nonzero_bytes(seed, len)))
        .collect()
}

/// `count` C strings of 0..32 bytes plus a NULL-terminated vector over them.
///
/// The vector points into the returned strings; keep both together.
pub fn argv_profile(
    seed: u64,
    count: usize,
) -> (Vec<TerminatedBuf<c_char>>, TerminatedBuf<*const c_char>) {
    let lengths: Vec<usize> = (0..count).map(|i| i % 32).collect();
    let strings = c_strings(seed, &lengths);
    let argv = argv_of(&strings);
    (strings, argv)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_profile_matches_lengths() {
        let bufs = byte_profile(1);
        let lens: Vec<usize> = bufs.iter().map(|b| b.len()).collect();
        assert_eq!(lens, PROFILE_LENGTHS.to_vec());
    }

    #[test]
    fn argv_profile_counts() {
        let (strings, argv) = argv_profile(3, 100);
        assert_eq!(strings.len(), 100);
        assert_eq!(argv.len(), 100);
    }
}
