//! Timer error types
//!
//! Timer operations themselves are total; the only fallible step is decoding
//! raw configuration values (for example a run mode stored as a byte).

use core::fmt;

/// Result type for configuration decoding
pub type Result<T> = core::result::Result<T, TimerError>;

/// Timer configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerError {
    /// Raw run mode byte is neither one-shot (0) nor continuous (1)
    InvalidRunMode(u8),
}

impl fmt::Display for TimerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerError::InvalidRunMode(raw) => write!(f, "Invalid timer run mode: {}", raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_run_mode_display() {
        let err = TimerError::InvalidRunMode(7);
        assert_eq!(format!("{}", err), "Invalid timer run mode: 7");
    }
}
