//! Embassy-based clock implementations.
//!
//! This module provides [`Clock`] implementations backed by the Embassy
//! time driver, for embedded targets running the Embassy executor.

use crate::platform::traits::Clock;

/// Embassy clock reporting milliseconds since boot as `u64`.
///
/// A 64-bit millisecond counter does not wrap in practice.
///
/// # Example
///
/// ```ignore
/// use basic_timer::platform::embassy::EmbassyClock;
/// use basic_timer::Timer;
///
/// let mut heartbeat = Timer::new(EmbassyClock, 1_000);
/// heartbeat.reset();
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    type Ticks = u64;

    fn now(&self) -> u64 {
        embassy_time::Instant::now().as_millis()
    }
}

/// Embassy clock reporting milliseconds since boot truncated to `u32`.
///
/// Wraps after ~49.7 days, matching a classic 32-bit `millis()` counter
/// and halving the storage of every timer that uses it.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock32;

impl Clock for EmbassyClock32 {
    type Ticks = u32;

    fn now(&self) -> u32 {
        embassy_time::Instant::now().as_millis() as u32
    }
}
