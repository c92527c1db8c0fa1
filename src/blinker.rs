//! Blinkers: a boolean toggled at a fixed interval
//!
//! Meant for status LEDs and similar periodic on/off outputs. A blinker
//! only uses the [`Countdown`] contract of the timer it wraps.

use crate::platform::traits::{Clock, Ticks};
use crate::timer::{Countdown, StaticTimer, Timer};

/// Boolean that toggles every time its timer expires.
///
/// The blink time is how long the state stays on or off, i.e. half the
/// period. Call [`run`](Blinker::run) or [`update`](Blinker::update) at
/// least once per loop.
///
/// ```
/// use basic_timer::platform::mock::MockClock;
/// use basic_timer::Blinker;
///
/// let clock = MockClock::<u32>::new();
/// let mut led = Blinker::new(&clock, 250);
/// led.reset();
///
/// clock.advance(251);
/// assert!(led.update());
/// clock.advance(251);
/// assert!(!led.update());
/// ```
#[derive(Debug, Clone)]
pub struct Blinker<T> {
    timer: T,
    state: bool,
}

/// Blinker with a compile-time blink time
pub type StaticBlinker<C, const TIMEOUT: u64> = Blinker<StaticTimer<C, TIMEOUT>>;

impl<T: Countdown> Blinker<T> {
    /// Wrap an existing timer; the state starts `false`
    pub fn from_timer(timer: T) -> Self {
        Self {
            timer,
            state: false,
        }
    }

    /// Toggle the state if the blink time has passed
    pub fn run(&mut self) {
        if self.timer.has_expired() {
            self.timer.reset();
            self.state = !self.state;
        }
    }

    /// Run the blinker and return the resulting state
    pub fn update(&mut self) -> bool {
        self.run();
        self.state
    }

    /// Return to the initial `false` state and restart the period
    pub fn reset(&mut self) {
        self.state = false;
        self.timer.reset();
    }

    /// Current state, without updating
    pub fn state(&self) -> bool {
        self.state
    }

    /// Overwrite the current state; the period is not restarted
    pub fn set_state(&mut self, state: bool) {
        self.state = state;
    }

    pub fn blink_time(&self) -> T::Ticks {
        self.timer.timeout()
    }
}

impl<C: Clock> Blinker<Timer<C>> {
    pub fn new(clock: C, blink_time: C::Ticks) -> Self {
        Self::from_timer(Timer::new(clock, blink_time))
    }

    /// Blinker with the default blink time (500 ticks)
    pub fn with_default_blink_time(clock: C) -> Self {
        Self::new(clock, C::Ticks::DEFAULT_TIMEOUT)
    }

    pub fn set_blink_time(&mut self, blink_time: C::Ticks) {
        self.timer.set_timeout(blink_time);
    }
}

impl<C: Clock, const TIMEOUT: u64> Blinker<StaticTimer<C, TIMEOUT>> {
    pub fn new_static(clock: C) -> Self {
        Self::from_timer(StaticTimer::new(clock))
    }
}

/// Blinker that can be switched off.
///
/// While disabled, [`state`](SwitchableBlinker::state) is always `true`
/// (a status LED held solid on). The toggling itself keeps running
/// underneath. A new switchable blinker starts disabled.
#[derive(Debug, Clone)]
pub struct SwitchableBlinker<T> {
    blinker: Blinker<T>,
    enabled: bool,
}

/// Switchable blinker with a compile-time blink time
pub type StaticSwitchableBlinker<C, const TIMEOUT: u64> =
    SwitchableBlinker<StaticTimer<C, TIMEOUT>>;

impl<T: Countdown> SwitchableBlinker<T> {
    pub fn from_timer(timer: T) -> Self {
        Self {
            blinker: Blinker::from_timer(timer),
            enabled: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn toggle_enabled(&mut self) {
        self.enabled = !self.enabled;
    }

    pub fn run(&mut self) {
        self.blinker.run();
    }

    /// Run the blinker and return the gated state.
    ///
    /// Returns `true` while disabled, the same as [`state`](Self::state).
    /// The Arduino library's `SwitchableBlinker::update()` returned the raw
    /// toggle here even when disabled; code ported from it that expects the
    /// raw toggle should use a plain [`Blinker`].
    pub fn update(&mut self) -> bool {
        self.blinker.run();
        self.state()
    }

    pub fn reset(&mut self) {
        self.blinker.reset();
    }

    /// Blink state when enabled, `true` when disabled
    pub fn state(&self) -> bool {
        !self.enabled || self.blinker.state()
    }

    pub fn blink_time(&self) -> T::Ticks {
        self.blinker.blink_time()
    }
}

impl<C: Clock> SwitchableBlinker<Timer<C>> {
    pub fn new(clock: C, blink_time: C::Ticks) -> Self {
        Self::from_timer(Timer::new(clock, blink_time))
    }

    pub fn set_blink_time(&mut self, blink_time: C::Ticks) {
        self.blinker.set_blink_time(blink_time);
    }
}

impl<C: Clock, const TIMEOUT: u64> SwitchableBlinker<StaticTimer<C, TIMEOUT>> {
    pub fn new_static(clock: C) -> Self {
        Self::from_timer(StaticTimer::new(clock))
    }
}
