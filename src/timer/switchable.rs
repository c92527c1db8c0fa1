//! Enable-gated timer

use super::{Countdown, StaticTimer, Timer};
use crate::platform::traits::Clock;

/// Timer that only finishes while enabled.
///
/// Every enable or disable resets the wrapped timer, and polling a disabled
/// timer keeps resetting it, so time spent disabled is never carried over.
/// A new switchable timer starts disabled.
///
/// ```
/// use basic_timer::platform::mock::MockClock;
/// use basic_timer::SwitchableTimer;
///
/// let clock = MockClock::<u32>::new();
/// let mut debounce = SwitchableTimer::new(&clock, 50);
///
/// clock.advance(1_000);
/// assert!(!debounce.has_finished());
///
/// debounce.enable();
/// clock.advance(51);
/// assert!(debounce.has_finished());
/// ```
#[derive(Debug, Clone)]
pub struct SwitchableTimer<T> {
    timer: T,
    enabled: bool,
}

/// Switchable timer with a compile-time timeout
pub type StaticSwitchableTimer<C, const TIMEOUT: u64> = SwitchableTimer<StaticTimer<C, TIMEOUT>>;

impl<T: Countdown> SwitchableTimer<T> {
    /// Wrap an existing timer (disabled)
    pub fn from_timer(timer: T) -> Self {
        Self {
            timer,
            enabled: false,
        }
    }

    pub fn enable(&mut self) {
        self.set_enabled(true);
    }

    pub fn disable(&mut self) {
        self.set_enabled(false);
    }

    /// Enable or disable the timer, restarting its period either way
    pub fn set_enabled(&mut self, enabled: bool) {
        self.timer.reset();
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the timer is enabled and has expired.
    ///
    /// While disabled this resets the timer and returns `false`.
    pub fn has_finished(&mut self) -> bool {
        if !self.enabled {
            self.timer.reset();
            return false;
        }
        self.timer.has_expired()
    }

    /// Restart the current period without changing the enabled state
    pub fn reset(&mut self) {
        self.timer.reset();
    }

    pub fn elapsed_time(&self) -> T::Ticks {
        self.timer.elapsed_time()
    }

    pub fn timeout(&self) -> T::Ticks {
        self.timer.timeout()
    }

    /// Wrapped timer
    pub fn inner(&self) -> &T {
        &self.timer
    }
}

impl<C: Clock> SwitchableTimer<Timer<C>> {
    /// Create a disabled timer with the given timeout
    pub fn new(clock: C, timeout: C::Ticks) -> Self {
        Self::from_timer(Timer::new(clock, timeout))
    }

    pub fn set_timeout(&mut self, timeout: C::Ticks) {
        self.timer.set_timeout(timeout);
    }
}

impl<C: Clock, const TIMEOUT: u64> SwitchableTimer<StaticTimer<C, TIMEOUT>> {
    /// Create a disabled timer with the compile-time timeout
    pub fn new_static(clock: C) -> Self {
        Self::from_timer(StaticTimer::new(clock))
    }
}
