//! The [`Sentinel`] trait: what counts as "the terminator" for an element type.

/// An element type with a distinguished terminator value.
///
/// There is deliberately no blanket implementation. A type opts in by
/// naming its terminator, so a buffer of `T` can only be walked when the
/// meaning of "end" is settled for that `T`.
///
/// Provided implementations:
///
/// | Element type | Terminator |
/// |--------------|------------|
/// | primitive integers | `0` |
/// | `char` | `'\0'` |
/// | `*const U`, `*mut U` | null |
pub trait Sentinel: Sized {
    /// The terminator value.
    const SENTINEL: Self;

    /// Returns `true` if `self` marks the end of a buffer.
    fn is_sentinel(&self) -> bool;
}

macro_rules! zero_sentinel {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Sentinel for $ty {
                const SENTINEL: Self = 0;

                #[inline]
                fn is_sentinel(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

zero_sentinel!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, usize, isize);

impl Sentinel for char {
    const SENTINEL: Self = '\0';

    #[inline]
    fn is_sentinel(&self) -> bool {
        *self == '\0'
    }
}

impl<U> Sentinel for *const U {
    const SENTINEL: Self = core::ptr::null();

    #[inline]
    fn is_sentinel(&self) -> bool {
        self.is_null()
    }
}

impl<U> Sentinel for *mut U {
    const SENTINEL: Self = core::ptr::null_mut();

    #[inline]
    fn is_sentinel(&self) -> bool {
        self.is_null()
    }
}
