//! Mock platform implementation for testing
//!
//! Provides a clock whose time is moved by hand, so timer behaviour
//! (including counter wraparound) can be tested on host without hardware.
//!
//! Unlike the hardware clocks this module is always compiled; downstream
//! crates use it in their own tests.
//!
//! # Example
//!
//! ```
//! use basic_timer::platform::mock::MockClock;
//! use basic_timer::Timer;
//!
//! let clock = MockClock::<u32>::new();
//! let mut timer = Timer::new(&clock, 100);
//! timer.reset();
//! clock.advance(101);
//! assert!(timer.has_expired());
//! ```

mod clock;

pub use clock::MockClock;
