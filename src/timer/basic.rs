//! Runtime-configurable timer core

use super::{expired, Countdown};
use crate::platform::traits::{Clock, Ticks};

/// Timer that reports when a timeout has passed since its last reset.
///
/// Holds only the timestamp of the last reset and the timeout; nothing is
/// scheduled. The caller polls [`has_expired`](Timer::has_expired) from its
/// loop at a cadence finer than the timeout.
///
/// A new timer has `last_reset = 0`, so it counts from the clock's origin
/// until the first [`reset`](Timer::reset).
///
/// # Example
///
/// ```
/// use basic_timer::platform::mock::MockClock;
/// use basic_timer::Timer;
///
/// let clock = MockClock::<u32>::new();
/// let mut timer = Timer::new(&clock, 100);
///
/// timer.reset();
/// clock.advance(100);
/// assert!(!timer.has_expired()); // strict: elapsed == timeout
/// clock.advance(1);
/// assert!(timer.has_expired());
/// ```
#[derive(Debug, Clone)]
pub struct Timer<C: Clock> {
    clock: C,
    last_reset: C::Ticks,
    timeout: C::Ticks,
}

impl<C: Clock> Timer<C> {
    /// Create a timer with the given timeout
    pub fn new(clock: C, timeout: C::Ticks) -> Self {
        Self {
            clock,
            last_reset: C::Ticks::ZERO,
            timeout,
        }
    }

    /// Create a timer with the default timeout (500 ticks)
    pub fn with_default_timeout(clock: C) -> Self {
        Self::new(clock, C::Ticks::DEFAULT_TIMEOUT)
    }

    /// Restart the timeout period from now
    pub fn reset(&mut self) {
        self.last_reset = self.clock.now();
    }

    /// Replace the timeout without touching the last reset timestamp
    pub fn set_timeout(&mut self, timeout: C::Ticks) {
        self.timeout = timeout;
    }

    pub fn timeout(&self) -> C::Ticks {
        self.timeout
    }

    /// Timestamp captured by the last reset
    pub fn last_reset(&self) -> C::Ticks {
        self.last_reset
    }

    /// Check if more than `timeout` ticks have elapsed since the last reset
    pub fn has_expired(&self) -> bool {
        expired(self.clock.now(), self.last_reset, self.timeout)
    }

    /// Ticks elapsed since the last reset, modulo the clock width
    pub fn elapsed_time(&self) -> C::Ticks {
        self.clock.now().wrapping_sub(self.last_reset)
    }

    pub fn now(&self) -> C::Ticks {
        self.clock.now()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Run `action` if the timer has expired.
    ///
    /// With `reset_on_expire` the timer is reset before `action` runs, so
    /// calling this every loop executes `action` once per timeout period.
    /// Without it, `action` runs on every call until the caller resets.
    ///
    /// Returns whether `action` ran.
    pub fn when_expired<F: FnOnce()>(&mut self, reset_on_expire: bool, action: F) -> bool {
        if !self.has_expired() {
            return false;
        }
        if reset_on_expire {
            self.reset();
        }
        action();
        true
    }
}

impl<C: Clock> Countdown for Timer<C> {
    type Ticks = C::Ticks;

    fn reset(&mut self) {
        Timer::reset(self);
    }

    fn has_expired(&self) -> bool {
        Timer::has_expired(self)
    }

    fn elapsed_time(&self) -> C::Ticks {
        Timer::elapsed_time(self)
    }

    fn timeout(&self) -> C::Ticks {
        self.timeout
    }

    fn now(&self) -> C::Ticks {
        self.clock.now()
    }
}
