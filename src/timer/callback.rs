//! Callback timer with one-shot and continuous run modes
//!
//! [`CallbackTimer`] wraps a [`Timer`] with a one-byte state register and
//! dispatches a bound [`ExpireHandler`] from [`run`](CallbackTimer::run),
//! which the caller invokes once per loop iteration.
//!
//! # State machine
//!
//! ```text
//!             start()                    expiry seen by run()
//!   Idle ───────────────▶ ArmedWaiting ───────────────────────▶ ArmedFired
//!    ▲                     │  ▲    │                               │
//!    └──── stop() ─────────┘  │    └─ continuous: re-armed ◀──┐    │
//!    ▲                        │       in the same run()      ─┘    │
//!    │                        └────── reset() / start() ───────────┤
//!    └──────────────────────────────── stop() ─────────────────────┘
//! ```
//!
//! In one-shot mode the handler runs exactly once per armed period, however
//! often `run()` is polled after expiry. In continuous mode the timer resets
//! itself on every expiry and the handler runs once per period.

use core::fmt;

use bitflags::bitflags;

use super::Timer;
use crate::config::TimerConfig;
use crate::platform::error::{Result, TimerError};
use crate::platform::traits::Clock;
use crate::{log_debug, log_info, log_trace};

/// Timer run mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum RunMode {
    /// Fire once, then wait for an explicit reset or restart
    #[default]
    OneShot = 0,
    /// Fire once per timeout period, re-arming automatically
    Continuous = 1,
}

impl TryFrom<u8> for RunMode {
    type Error = TimerError;

    fn try_from(raw: u8) -> Result<Self> {
        match raw {
            0 => Ok(RunMode::OneShot),
            1 => Ok(RunMode::Continuous),
            other => Err(TimerError::InvalidRunMode(other)),
        }
    }
}

impl From<RunMode> for u8 {
    fn from(mode: RunMode) -> u8 {
        mode as u8
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunMode::OneShot => write!(f, "one-shot"),
            RunMode::Continuous => write!(f, "continuous"),
        }
    }
}

bitflags! {
    /// Packed callback timer state
    ///
    /// Bit 0 holds the run mode, bits 6 and 7 the started and
    /// fired-this-period flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TimerFlags: u8 {
        /// Run mode is continuous (clear: one-shot)
        const CONTINUOUS = 1 << 0;
        /// Timer has been started
        const STARTED = 1 << 6;
        /// Timer expired during the current period
        const EXPIRED = 1 << 7;
    }
}

/// Observable state of a [`CallbackTimer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerState {
    /// Not started; expiry is never reported
    Idle,
    /// Started, waiting for the current period to expire
    ArmedWaiting,
    /// Started and expired; waiting for reset (one-shot only)
    ArmedFired,
}

/// Action run by a [`CallbackTimer`] when it expires.
///
/// Implemented for every `FnMut()`, so a closure capturing its context or a
/// plain `fn()` can be bound directly. Implement it on a struct when the
/// handler owns state of its own.
pub trait ExpireHandler {
    fn on_expire(&mut self);
}

impl<F: FnMut()> ExpireHandler for F {
    fn on_expire(&mut self) {
        self()
    }
}

/// Timer that calls a handler when its timeout expires.
///
/// The handler is borrowed, not owned, and is invoked synchronously from
/// [`run`](CallbackTimer::run) on the caller's thread.
///
/// # Example
///
/// ```
/// use core::cell::Cell;
/// use basic_timer::platform::mock::MockClock;
/// use basic_timer::{CallbackTimer, RunMode};
///
/// let clock = MockClock::<u32>::new();
/// let count = Cell::new(0);
/// let mut on_expire = || count.set(count.get() + 1);
///
/// let mut timer = CallbackTimer::new(&clock, 100, RunMode::Continuous);
/// timer.on_expire(&mut on_expire);
/// timer.start();
///
/// for _ in 0..10 {
///     clock.advance(101);
///     timer.run();
/// }
/// assert_eq!(count.get(), 10);
/// ```
pub struct CallbackTimer<'a, C: Clock> {
    timer: Timer<C>,
    flags: TimerFlags,
    callback: Option<&'a mut dyn ExpireHandler>,
}

impl<'a, C: Clock> CallbackTimer<'a, C> {
    /// Create a stopped timer with no handler bound
    pub fn new(clock: C, timeout: C::Ticks, mode: RunMode) -> Self {
        let mut timer = Self {
            timer: Timer::new(clock, timeout),
            flags: TimerFlags::empty(),
            callback: None,
        };
        timer.set_mode(mode);
        timer
    }

    /// Create a stopped timer with a handler bound
    pub fn with_callback(
        clock: C,
        timeout: C::Ticks,
        callback: &'a mut dyn ExpireHandler,
        mode: RunMode,
    ) -> Self {
        let mut timer = Self::new(clock, timeout, mode);
        timer.callback = Some(callback);
        timer
    }

    /// Create a timer from a configuration, starting it if `auto_start` is set
    pub fn from_config(clock: C, config: &TimerConfig<C::Ticks>) -> Self {
        let mut timer = Self::new(clock, config.timeout, config.mode);
        if config.auto_start {
            timer.start();
        }
        timer
    }

    /// Current timeout and mode, with `auto_start` reflecting whether the
    /// timer is running
    pub fn config(&self) -> TimerConfig<C::Ticks> {
        TimerConfig {
            timeout: self.timer.timeout(),
            mode: self.mode(),
            auto_start: self.has_started(),
        }
    }

    /// Set timeout and mode and reset the timer.
    ///
    /// Does not start the timer; a running timer keeps running with the new
    /// settings.
    pub fn prepare(&mut self, timeout: C::Ticks, mode: RunMode) {
        self.timer.set_timeout(timeout);
        self.set_mode(mode);
        self.reset();
        log_debug!(
            "callback timer prepared: timeout {}, {}",
            crate::platform::traits::Ticks::as_u64(timeout),
            mode
        );
    }

    /// Start or restart the timer from now
    pub fn start(&mut self) {
        self.reset();
        self.flags.insert(TimerFlags::STARTED);
        log_debug!(
            "callback timer started at {}",
            crate::platform::traits::Ticks::as_u64(self.timer.now())
        );
    }

    /// Prepare the timer with the given settings, then start it
    pub fn begin(&mut self, timeout: C::Ticks, mode: RunMode) {
        self.prepare(timeout, mode);
        self.start();
        log_info!(
            "callback timer running: timeout {}, {}",
            crate::platform::traits::Ticks::as_u64(timeout),
            mode
        );
    }

    /// Start with the current settings. Alias of [`start`](Self::start).
    pub fn begin_default(&mut self) {
        self.start();
    }

    /// Stop the timer. Timeout, mode and last reset are kept.
    pub fn stop(&mut self) {
        self.flags.remove(TimerFlags::STARTED);
        log_debug!(
            "callback timer stopped at {}",
            crate::platform::traits::Ticks::as_u64(self.timer.now())
        );
    }

    /// Alias of [`stop`](Self::stop).
    pub fn end(&mut self) {
        self.stop();
    }

    /// Bind the handler called on expiry, replacing any previous one
    pub fn on_expire(&mut self, callback: &'a mut dyn ExpireHandler) {
        self.callback = Some(callback);
    }

    /// Unbind the handler; expiries are still tracked
    pub fn clear_on_expire(&mut self) {
        self.callback = None;
    }

    /// Poll the timer, dispatching the handler on expiry.
    ///
    /// Call once per loop iteration. Returns `true` when this call observed
    /// an expiry (whether or not a handler was bound).
    pub fn run(&mut self) -> bool {
        if !self.has_expired() || self.has_previously_expired() {
            return false;
        }

        self.flags.insert(TimerFlags::EXPIRED);
        if self.mode() == RunMode::Continuous {
            self.reset();
        }

        log_trace!(
            "callback timer expired at {}",
            crate::platform::traits::Ticks::as_u64(self.timer.now())
        );
        if let Some(callback) = self.callback.as_deref_mut() {
            callback.on_expire();
        }
        true
    }

    /// Restart the timeout period and clear the fired flag
    pub fn reset(&mut self) {
        self.timer.reset();
        self.flags.remove(TimerFlags::EXPIRED);
    }

    /// Change the run mode without touching timing state
    pub fn set_mode(&mut self, mode: RunMode) {
        self.flags.set(TimerFlags::CONTINUOUS, mode == RunMode::Continuous);
    }

    pub fn mode(&self) -> RunMode {
        if self.flags.contains(TimerFlags::CONTINUOUS) {
            RunMode::Continuous
        } else {
            RunMode::OneShot
        }
    }

    pub fn has_started(&self) -> bool {
        self.flags.contains(TimerFlags::STARTED)
    }

    /// Whether the current period has already expired and been dispatched
    pub fn has_previously_expired(&self) -> bool {
        self.flags.contains(TimerFlags::EXPIRED)
    }

    /// Whether the timer is started and its timeout has passed
    pub fn has_expired(&self) -> bool {
        self.has_started() && self.timer.has_expired()
    }

    pub fn state(&self) -> TimerState {
        if !self.has_started() {
            TimerState::Idle
        } else if self.has_previously_expired() {
            TimerState::ArmedFired
        } else {
            TimerState::ArmedWaiting
        }
    }

    /// Raw state register
    pub fn flags(&self) -> TimerFlags {
        self.flags
    }

    pub fn timeout(&self) -> C::Ticks {
        self.timer.timeout()
    }

    /// Replace the timeout; the current period is not restarted
    pub fn set_timeout(&mut self, timeout: C::Ticks) {
        self.timer.set_timeout(timeout);
    }

    pub fn elapsed_time(&self) -> C::Ticks {
        self.timer.elapsed_time()
    }

    pub fn now(&self) -> C::Ticks {
        self.timer.now()
    }
}

impl<C: Clock + fmt::Debug> fmt::Debug for CallbackTimer<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackTimer")
            .field("timer", &self.timer)
            .field("flags", &self.flags)
            .field("callback_bound", &self.callback.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::MockClock;
    use core::cell::Cell;
    use core::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn test_run_mode_from_u8() {
        assert_eq!(RunMode::try_from(0), Ok(RunMode::OneShot));
        assert_eq!(RunMode::try_from(1), Ok(RunMode::Continuous));
        assert_eq!(RunMode::try_from(2), Err(TimerError::InvalidRunMode(2)));
        assert_eq!(u8::from(RunMode::Continuous), 1);
    }

    #[test]
    fn test_new_timer_is_idle() {
        let clock = MockClock::<u32>::with_initial(10_000);
        let mut timer = CallbackTimer::new(&clock, 100, RunMode::OneShot);
        assert_eq!(timer.state(), TimerState::Idle);
        assert!(!timer.has_started());
        // Elapsed time is far past the timeout, but the timer is not started
        assert!(!timer.has_expired());
        assert!(!timer.run());
    }

    #[test]
    fn test_flag_layout() {
        let clock = MockClock::<u32>::new();
        let mut timer = CallbackTimer::new(&clock, 10, RunMode::Continuous);
        assert_eq!(timer.flags().bits(), 0b0000_0001);

        timer.set_mode(RunMode::OneShot);
        timer.start();
        assert_eq!(timer.flags().bits(), 0b0100_0000);

        clock.set(11);
        timer.run();
        assert_eq!(timer.flags().bits(), 0b1100_0000);
    }

    #[test]
    fn test_one_shot_fires_once() {
        let clock = MockClock::<u32>::new();
        let fired = Cell::new(0u32);
        let mut on_fire = || fired.set(fired.get() + 1);
        let mut timer = CallbackTimer::new(&clock, 100, RunMode::OneShot);
        timer.on_expire(&mut on_fire);
        timer.start();

        for (time, expected) in [(50, 0), (150, 1), (200, 1), (300, 1)] {
            clock.set(time);
            timer.run();
            assert_eq!(fired.get(), expected, "at t={}", time);
        }
        assert_eq!(timer.state(), TimerState::ArmedFired);
        assert!(timer.has_previously_expired());
    }

    #[test]
    fn test_continuous_fires_every_period() {
        let clock = MockClock::<u32>::new();
        let fired = Cell::new(0u32);
        let mut on_fire = || fired.set(fired.get() + 1);
        let mut timer = CallbackTimer::new(&clock, 100, RunMode::Continuous);
        timer.on_expire(&mut on_fire);
        timer.start();

        clock.set(50);
        assert!(!timer.run());
        clock.set(150);
        assert!(timer.run());
        assert_eq!(fired.get(), 1);
        assert_eq!(timer.state(), TimerState::ArmedWaiting);
        assert!(!timer.has_previously_expired());

        clock.set(200);
        assert!(!timer.run());
        clock.set(250);
        assert!(!timer.run()); // exactly one timeout since the fire at 150
        clock.set(251);
        assert!(timer.run());
        assert_eq!(fired.get(), 2);

        clock.set(300);
        assert!(!timer.run());
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn test_stop_suppresses_callback() {
        let clock = MockClock::<u32>::new();
        let fired = Cell::new(0u32);
        let mut on_fire = || fired.set(fired.get() + 1);
        let mut timer = CallbackTimer::new(&clock, 100, RunMode::Continuous);
        timer.on_expire(&mut on_fire);
        timer.start();
        timer.stop();
        assert_eq!(timer.state(), TimerState::Idle);

        for time in [101, 1_000, 100_000] {
            clock.set(time);
            assert!(!timer.run());
        }
        assert_eq!(fired.get(), 0);

        // Restarting re-arms from the current time
        timer.start();
        assert!(!timer.run());
        clock.advance(100);
        assert!(!timer.run());
        clock.advance(1);
        assert!(timer.run());
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_stop_keeps_settings() {
        let clock = MockClock::<u32>::new();
        let mut timer = CallbackTimer::new(&clock, 100, RunMode::Continuous);
        clock.set(40);
        timer.start();
        timer.stop();
        assert_eq!(timer.timeout(), 100);
        assert_eq!(timer.mode(), RunMode::Continuous);
        clock.set(70);
        assert_eq!(timer.elapsed_time(), 30);
    }

    #[test]
    fn test_reset_rearms_one_shot() {
        let clock = MockClock::<u32>::new();
        let fired = Cell::new(0u32);
        let mut on_fire = || fired.set(fired.get() + 1);
        let mut timer = CallbackTimer::new(&clock, 500, RunMode::OneShot);
        timer.on_expire(&mut on_fire);
        timer.start();

        clock.set(501);
        assert!(timer.run());
        clock.set(600);
        assert!(!timer.run());

        timer.reset();
        assert_eq!(timer.state(), TimerState::ArmedWaiting);
        clock.set(1_100);
        assert!(!timer.run());
        clock.set(1_101);
        assert!(timer.run());
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn test_prepare_does_not_start() {
        let clock = MockClock::<u32>::new();
        let mut timer = CallbackTimer::new(&clock, 100, RunMode::OneShot);
        clock.set(30);
        timer.prepare(250, RunMode::Continuous);

        assert!(!timer.has_started());
        assert_eq!(timer.timeout(), 250);
        assert_eq!(timer.mode(), RunMode::Continuous);
        assert_eq!(timer.elapsed_time(), 0);

        clock.set(1_000);
        assert!(!timer.run());
    }

    #[test]
    fn test_prepare_clears_fired_flag() {
        let clock = MockClock::<u32>::new();
        let mut timer = CallbackTimer::new(&clock, 10, RunMode::OneShot);
        timer.start();
        clock.set(11);
        assert!(timer.run());
        assert!(timer.has_previously_expired());

        timer.prepare(10, RunMode::OneShot);
        assert!(!timer.has_previously_expired());
        assert!(timer.has_started());
        clock.set(22);
        assert!(timer.run());
    }

    #[test]
    fn test_begin_prepares_and_starts() {
        let clock = MockClock::<u32>::new();
        let mut timer = CallbackTimer::new(&clock, 100, RunMode::OneShot);
        clock.set(5);
        timer.begin(20, RunMode::Continuous);
        assert_eq!(timer.state(), TimerState::ArmedWaiting);
        assert_eq!(timer.timeout(), 20);
        assert_eq!(timer.mode(), RunMode::Continuous);

        timer.end();
        assert_eq!(timer.state(), TimerState::Idle);
        timer.begin_default();
        assert!(timer.has_started());
    }

    #[test]
    fn test_set_mode_keeps_timing_state() {
        let clock = MockClock::<u32>::new();
        let mut timer = CallbackTimer::new(&clock, 10, RunMode::OneShot);
        timer.start();
        clock.set(11);
        assert!(timer.run());

        timer.set_mode(RunMode::Continuous);
        assert!(timer.has_started());
        assert!(timer.has_previously_expired());
        assert_eq!(timer.elapsed_time(), 11);
        // Fired flag is still set from the one-shot period
        assert!(!timer.run());
    }

    #[test]
    fn test_unbound_callback_is_skipped() {
        let clock = MockClock::<u32>::new();
        let mut timer = CallbackTimer::new(&clock, 10, RunMode::OneShot);
        timer.start();
        clock.set(11);
        assert!(timer.run());
        assert_eq!(timer.state(), TimerState::ArmedFired);
    }

    #[test]
    fn test_rebind_callback() {
        let clock = MockClock::<u32>::new();
        let first = Cell::new(0u32);
        let second = Cell::new(0u32);
        let mut on_first = || first.set(first.get() + 1);
        let mut on_second = || second.set(second.get() + 1);

        let mut timer =
            CallbackTimer::with_callback(&clock, 10, &mut on_first, RunMode::Continuous);
        timer.start();
        clock.set(11);
        timer.run();

        timer.on_expire(&mut on_second);
        clock.set(22);
        timer.run();

        timer.clear_on_expire();
        clock.set(33);
        assert!(timer.run());

        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 1);
    }

    struct Counter {
        hits: u32,
    }

    impl ExpireHandler for Counter {
        fn on_expire(&mut self) {
            self.hits += 1;
        }
    }

    #[test]
    fn test_handler_struct() {
        let clock = MockClock::<u32>::new();
        let mut counter = Counter { hits: 0 };
        {
            let mut timer =
                CallbackTimer::with_callback(&clock, 5, &mut counter, RunMode::Continuous);
            timer.start();
            for _ in 0..4 {
                clock.advance(6);
                timer.run();
            }
        }
        assert_eq!(counter.hits, 4);
    }

    #[test]
    fn test_fn_pointer_handler() {
        static CALLS: AtomicU32 = AtomicU32::new(0);
        fn bump() {
            CALLS.fetch_add(1, Ordering::Relaxed);
        }

        let clock = MockClock::<u32>::new();
        let mut handler: fn() = bump;
        let mut timer =
            CallbackTimer::with_callback(&clock, 1, &mut handler, RunMode::OneShot);
        timer.start();
        clock.set(2);
        timer.run();
        timer.run();
        assert_eq!(CALLS.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_continuous_across_wrap() {
        let clock = MockClock::<u16>::with_initial(u16::MAX - 100);
        let fired = Cell::new(0u32);
        let mut on_fire = || fired.set(fired.get() + 1);
        let mut timer = CallbackTimer::new(&clock, 150, RunMode::Continuous);
        timer.on_expire(&mut on_fire);
        timer.start();

        for _ in 0..20 {
            clock.advance(151);
            assert!(timer.run());
        }
        assert_eq!(fired.get(), 20);
    }

    #[test]
    fn test_config_round_trip() {
        let clock = MockClock::<u32>::new();
        let config = TimerConfig::new(300, RunMode::Continuous).with_auto_start(true);
        let timer = CallbackTimer::from_config(&clock, &config);
        assert!(timer.has_started());
        assert_eq!(timer.config(), config);

        let idle = CallbackTimer::from_config(&clock, &TimerConfig::default());
        assert_eq!(idle.state(), TimerState::Idle);
        assert_eq!(idle.timeout(), 500);
        assert_eq!(idle.mode(), RunMode::OneShot);
    }
}
