//! Platform abstraction traits
//!
//! This module defines the traits a time source must provide.

pub mod clock;
pub mod ticks;

pub use clock::{Clock, ClockFn};
pub use ticks::Ticks;
