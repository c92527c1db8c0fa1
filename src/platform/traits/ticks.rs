//! Tick arithmetic for fixed-width, wrapping clocks
//!
//! A hardware millisecond counter is an unsigned integer that silently
//! wraps to zero at its width. Every elapsed-time computation in this crate
//! goes through [`Ticks::wrapping_sub`], performed in the clock's own width,
//! so a wrapped counter still yields the correct difference.

use core::fmt::Debug;

/// Unsigned timestamp / duration type produced by a [`Clock`](super::Clock).
///
/// Implemented for `u16`, `u32` and `u64`. The same type is used for
/// timestamps and for durations, as with Arduino's `millis()`.
pub trait Ticks: Copy + Eq + Ord + Debug {
    /// Zero ticks
    const ZERO: Self;
    /// Largest representable tick value (the last value before wrap)
    const MAX: Self;
    /// Timeout used when none is given (500 ticks)
    const DEFAULT_TIMEOUT: Self;

    /// Modular subtraction over the type's width.
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// Modular addition over the type's width.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Widen to `u64` (lossless for every implementor).
    fn as_u64(self) -> u64;

    /// Narrow a `u64` to this width, discarding the high bits.
    fn truncate_from(value: u64) -> Self;

    /// Narrow a `u64` to this width, clamping to [`Ticks::MAX`].
    fn saturate_from(value: u64) -> Self {
        if value >= Self::MAX.as_u64() {
            Self::MAX
        } else {
            Self::truncate_from(value)
        }
    }
}

macro_rules! impl_ticks {
    ($($ty:ty),*) => {
        $(
            impl Ticks for $ty {
                const ZERO: Self = 0;
                const MAX: Self = <$ty>::MAX;
                const DEFAULT_TIMEOUT: Self = 500;

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$ty>::wrapping_sub(self, rhs)
                }

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$ty>::wrapping_add(self, rhs)
                }

                #[inline]
                fn as_u64(self) -> u64 {
                    self as u64
                }

                #[inline]
                fn truncate_from(value: u64) -> Self {
                    value as $ty
                }
            }
        )*
    };
}

impl_ticks!(u16, u32, u64);
