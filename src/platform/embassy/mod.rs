//! Embassy platform implementation
//!
//! Available with the `embassy` feature.

mod clock;

pub use clock::{EmbassyClock, EmbassyClock32};
