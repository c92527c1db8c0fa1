//! Platform abstraction layer
//!
//! This module isolates the clock source from timer logic. Timers only see
//! the [`Clock`] trait; concrete clocks live in the submodules.

pub mod error;
pub mod traits;

// Platform implementations (feature-gated)
#[cfg(feature = "embassy")]
pub mod embassy;

pub mod mock;

// Re-export commonly used types
pub use error::{Result, TimerError};
pub use traits::{Clock, ClockFn, Ticks};
