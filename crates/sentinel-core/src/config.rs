//! Scan configuration for checked length walks.

/// Limits applied by [`SentinelPtr::try_walk_length`](crate::SentinelPtr::try_walk_length).
///
/// Plain data; construct with [`ScanConfig::new`], [`ScanConfig::bounded`]
/// or [`Default`], then adjust fields directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanConfig {
    /// Maximum number of elements to examine, terminator included.
    ///
    /// Default: `None` (unbounded). Set this to the size of the
    /// underlying allocation when it is known so a missing terminator
    /// becomes an error instead of an out-of-bounds read.
    pub max_elements: Option<usize>,

    /// Whether a null address is a valid empty buffer.
    ///
    /// Default: `false` (null is rejected with
    /// [`SentinelError::NullPointer`](crate::SentinelError::NullPointer)).
    /// When `true`, a null address walks to length 0.
    pub allow_null: bool,
}

impl ScanConfig {
    /// Default element limit (unbounded).
    pub const DEFAULT_MAX_ELEMENTS: Option<usize> = None;

    /// Default null handling (reject).
    pub const DEFAULT_ALLOW_NULL: bool = false;

    /// Create a config with default values.
    pub const fn new() -> Self {
        Self {
            max_elements: Self::DEFAULT_MAX_ELEMENTS,
            allow_null: Self::DEFAULT_ALLOW_NULL,
        }
    }

    /// Create a config that examines at most `max_elements` elements.
    pub const fn bounded(max_elements: usize) -> Self {
        Self {
            max_elements: Some(max_elements),
            allow_null: Self::DEFAULT_ALLOW_NULL,
        }
    }

    /// Returns a copy with `allow_null` set.
    pub const fn with_allow_null(mut self, allow_null: bool) -> Self {
        self.allow_null = allow_null;
        self
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new()
    }
}
