//! Timer core and run-mode state machine
//!
//! - [`basic`]: runtime-configurable [`Timer`]
//! - [`fixed`]: [`StaticTimer`] with a compile-time timeout
//! - [`callback`]: [`CallbackTimer`] dispatching a handler on expiry
//! - [`switchable`]: [`SwitchableTimer`] gated behind an enable flag
//!
//! Expiry is `now - last_reset > timeout`, with the subtraction done in the
//! clock's own unsigned width so a wrapped counter is handled without any
//! special case. Note the strict comparison: a timer whose elapsed time
//! equals its timeout has not expired yet.

pub mod basic;
pub mod callback;
pub mod fixed;
pub mod switchable;

pub use basic::Timer;
pub use callback::{CallbackTimer, ExpireHandler, RunMode, TimerFlags, TimerState};
pub use fixed::StaticTimer;
pub use switchable::{StaticSwitchableTimer, SwitchableTimer};

use crate::platform::traits::Ticks;

/// Shared contract of the timer cores.
///
/// Blinkers and switchable timers are written against this trait, so each
/// exists once and works with both [`Timer`] and [`StaticTimer`].
pub trait Countdown {
    /// Tick type of the underlying clock
    type Ticks: Ticks;

    /// Restart the timeout period from the current clock value.
    fn reset(&mut self);

    /// Whether more than `timeout()` ticks have passed since the last reset.
    fn has_expired(&self) -> bool;

    /// Ticks since the last reset, modulo the clock width.
    fn elapsed_time(&self) -> Self::Ticks;

    /// Configured timeout.
    fn timeout(&self) -> Self::Ticks;

    /// Current clock value.
    fn now(&self) -> Self::Ticks;
}

/// Wraparound-safe expiry test shared by every core.
#[inline]
pub(crate) fn expired<T: Ticks>(now: T, last_reset: T, timeout: T) -> bool {
    now.wrapping_sub(last_reset) > timeout
}
