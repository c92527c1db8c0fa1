//! Callback timer configuration
//!
//! Holds the settings a [`CallbackTimer`](crate::CallbackTimer) is built
//! from, with the defaults a timer gets when nothing is specified.

use crate::log_warn;
use crate::platform::error::Result;
use crate::platform::traits::Ticks;
use crate::timer::RunMode;

/// Callback timer settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerConfig<T: Ticks = u32> {
    /// Timeout in clock ticks (default: 500)
    pub timeout: T,
    /// Run mode (default: one-shot)
    pub mode: RunMode,
    /// Start the timer as soon as it is built (default: false)
    pub auto_start: bool,
}

impl<T: Ticks> Default for TimerConfig<T> {
    fn default() -> Self {
        Self {
            timeout: T::DEFAULT_TIMEOUT,
            mode: RunMode::OneShot,
            auto_start: false,
        }
    }
}

impl<T: Ticks> TimerConfig<T> {
    pub fn new(timeout: T, mode: RunMode) -> Self {
        Self {
            timeout,
            mode,
            auto_start: false,
        }
    }

    /// Build a configuration from a timeout and a raw run mode byte
    /// (0 = one-shot, 1 = continuous).
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::InvalidRunMode`](crate::TimerError::InvalidRunMode)
    /// for any other byte.
    pub fn from_raw(timeout: T, mode: u8) -> Result<Self> {
        let mode = RunMode::try_from(mode).inspect_err(|_| {
            log_warn!("rejected timer config: invalid run mode {}", mode);
        })?;
        Ok(Self::new(timeout, mode))
    }

    pub fn with_auto_start(mut self, auto_start: bool) -> Self {
        self.auto_start = auto_start;
        self
    }
}
