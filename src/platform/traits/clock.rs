//! Clock abstraction for polled timers
//!
//! This module provides the `Clock` trait that abstracts over different
//! monotonic counters (Embassy, a board's `millis()`, mock) so timer logic
//! can be tested on host without embedded dependencies.

use super::ticks::Ticks;

/// Monotonic, wrapping tick counter.
///
/// The counter is read-only to this crate and is allowed to wrap at the
/// width of [`Clock::Ticks`]; timers treat the wrap as a normal condition.
///
/// # Example
///
/// ```
/// use basic_timer::platform::traits::Clock;
/// use basic_timer::platform::mock::MockClock;
///
/// fn poll<C: Clock<Ticks = u32>>(clock: &C, last: &mut u32) -> bool {
///     if clock.now().wrapping_sub(*last) > 20 {
///         *last = clock.now();
///         return true;
///     }
///     false
/// }
///
/// let clock = MockClock::<u32>::new();
/// let mut last = 0;
/// clock.advance(21);
/// assert!(poll(&clock, &mut last));
/// ```
pub trait Clock {
    /// Timestamp and duration type of this clock
    type Ticks: Ticks;

    /// Returns the current counter value.
    fn now(&self) -> Self::Ticks;
}

impl<C: Clock + ?Sized> Clock for &C {
    type Ticks = C::Ticks;

    #[inline]
    fn now(&self) -> Self::Ticks {
        (**self).now()
    }
}

/// Adapts any `Fn() -> T` into a [`Clock`].
///
/// Lets a board support function such as `millis()` drive a timer directly.
///
/// ```
/// use basic_timer::platform::traits::{Clock, ClockFn};
///
/// fn millis() -> u32 {
///     1234
/// }
///
/// let clock = ClockFn::new(millis);
/// assert_eq!(clock.now(), 1234);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ClockFn<F> {
    read: F,
}

impl<F> ClockFn<F> {
    /// Wrap a counter-reading function
    pub const fn new(read: F) -> Self {
        Self { read }
    }
}

impl<F, T> Clock for ClockFn<F>
where
    F: Fn() -> T,
    T: Ticks,
{
    type Ticks = T;

    #[inline]
    fn now(&self) -> T {
        (self.read)()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    #[test]
    fn test_clock_fn_reads_closure() {
        let counter = Cell::new(7u16);
        let clock = ClockFn::new(|| counter.get());
        assert_eq!(clock.now(), 7);

        counter.set(9);
        assert_eq!(clock.now(), 9);
    }

    #[test]
    fn test_clock_ref_delegates() {
        let clock = ClockFn::new(|| 42u64);
        let by_ref = &clock;
        assert_eq!(Clock::now(&by_ref), 42);
    }
}
