#![cfg_attr(not(test), no_std)]

//! basic_timer - Polled software timers for cooperative embedded loops
//!
//! Timers here never schedule anything: they remember when they were last
//! reset and answer "has the timeout passed?" against a monotonic counter
//! that the caller polls from its own loop. The counter may wrap at its
//! width (a 32-bit millisecond counter wraps after ~49.7 days); all elapsed
//! time is computed with modular subtraction, so the wrap is harmless.
//!
//! # Modules
//!
//! - [`platform`]: `Clock` / `Ticks` traits, mock and Embassy clocks, errors
//! - [`timer`]: `Timer`, `StaticTimer`, `CallbackTimer`, `SwitchableTimer`
//! - [`blinker`]: boolean toggles built on a timer
//! - [`config`]: callback timer settings and defaults
//! - [`logging`]: `log_*!` macros (defmt on target, println in host tests)
//!
//! # Features
//!
//! - `embassy`: clocks backed by `embassy_time::Instant`
//! - `defmt`: route log macros to defmt
//!
//! # Example
//!
//! ```
//! use core::cell::Cell;
//! use basic_timer::platform::mock::MockClock;
//! use basic_timer::{CallbackTimer, RunMode};
//!
//! let clock = MockClock::<u32>::new();
//! let fired = Cell::new(false);
//! let mut on_timeout = || fired.set(true);
//!
//! let mut timeout = CallbackTimer::new(&clock, 500, RunMode::OneShot);
//! timeout.on_expire(&mut on_timeout);
//! timeout.start();
//!
//! clock.set(501);
//! timeout.run();
//! assert!(fired.get());
//! ```

pub mod blinker;
pub mod config;
pub mod logging;
pub mod platform;
pub mod timer;

pub use blinker::{Blinker, StaticBlinker, StaticSwitchableBlinker, SwitchableBlinker};
pub use config::TimerConfig;
pub use platform::{Clock, ClockFn, Result, Ticks, TimerError};
pub use timer::{
    CallbackTimer, Countdown, ExpireHandler, RunMode, StaticSwitchableTimer, StaticTimer,
    SwitchableTimer, Timer, TimerFlags, TimerState,
};
