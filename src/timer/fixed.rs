//! Timer with a compile-time timeout

use super::Countdown;
use crate::platform::traits::{Clock, Ticks};

/// Timer whose timeout is fixed at compile time.
///
/// Behaves exactly like [`Timer`](super::Timer) but stores only the last
/// reset timestamp, and the comparison against `TIMEOUT` can be folded by the
/// compiler. Elapsed time is computed in the clock width and compared
/// against `TIMEOUT` as `u64`, so a `TIMEOUT` wider than the clock never
/// expires.
///
/// ```
/// use basic_timer::platform::mock::MockClock;
/// use basic_timer::StaticTimer;
///
/// let clock = MockClock::<u32>::new();
/// let mut timer: StaticTimer<_, 250> = StaticTimer::new(&clock);
/// timer.reset();
/// clock.advance(251);
/// assert!(timer.has_expired());
/// ```
#[derive(Debug, Clone)]
pub struct StaticTimer<C: Clock, const TIMEOUT: u64> {
    clock: C,
    last_reset: C::Ticks,
}

impl<C: Clock, const TIMEOUT: u64> StaticTimer<C, TIMEOUT> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            last_reset: C::Ticks::ZERO,
        }
    }

    /// Restart the timeout period from now
    pub fn reset(&mut self) {
        self.last_reset = self.clock.now();
    }

    /// Timeout in the clock width, clamped to the largest tick value
    pub fn timeout(&self) -> C::Ticks {
        C::Ticks::saturate_from(TIMEOUT)
    }

    pub fn last_reset(&self) -> C::Ticks {
        self.last_reset
    }

    pub fn has_expired(&self) -> bool {
        self.elapsed_time().as_u64() > TIMEOUT
    }

    pub fn elapsed_time(&self) -> C::Ticks {
        self.clock.now().wrapping_sub(self.last_reset)
    }

    pub fn now(&self) -> C::Ticks {
        self.clock.now()
    }

    /// Run `action` if the timer has expired, optionally resetting first.
    ///
    /// See [`Timer::when_expired`](super::Timer::when_expired).
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

impl<C: Clock, const TIMEOUT: u64> Countdown for StaticTimer<C, TIMEOUT> {
    type Ticks = C::Ticks;

    fn reset(&mut self) {
        StaticTimer::reset(self);
    }

    fn has_expired(&self) -> bool {
        StaticTimer::has_expired(self)
    }

    fn elapsed_time(&self) -> C::Ticks {
        StaticTimer::elapsed_time(self)
    }

    fn timeout(&self) -> C::Ticks {
        StaticTimer::timeout(self)
    }

    fn now(&self) -> C::Ticks {
        self.clock.now()
    }
}
