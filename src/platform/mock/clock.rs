//! Mock clock implementation for testing

use core::cell::Cell;

use crate::platform::traits::{Clock, Ticks};

/// Mock clock with controllable time advancement.
///
/// Time only moves when a test calls [`set`](MockClock::set) or
/// [`advance`](MockClock::advance). Advancing wraps at the width of `T`,
/// the same way a hardware counter does.
///
/// Timers borrow the clock (`&MockClock` is itself a [`Clock`]), so a test
/// keeps its own handle to move time while the timer under test reads it.
///
/// # Example
///
/// ```
/// use basic_timer::platform::mock::MockClock;
/// use basic_timer::platform::traits::Clock;
///
/// let clock = MockClock::<u32>::with_initial(u32::MAX);
/// clock.advance(2);
/// assert_eq!(clock.now(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockClock<T: Ticks = u32> {
    current: Cell<T>,
}

impl<T: Ticks> MockClock<T> {
    /// Create a new mock clock starting at zero
    pub fn new() -> Self {
        Self::with_initial(T::ZERO)
    }

    /// Create a new mock clock starting at the given tick
    pub fn with_initial(ticks: T) -> Self {
        Self {
            current: Cell::new(ticks),
        }
    }

    /// Set the current tick to an absolute value
    pub fn set(&self, ticks: T) {
        self.current.set(ticks);
    }

    /// Advance the current tick, wrapping at the width of `T`
    pub fn advance(&self, ticks: T) {
        self.current.set(self.current.get().wrapping_add(ticks));
    }
}

impl<T: Ticks> Clock for MockClock<T> {
    type Ticks = T;

    fn now(&self) -> T {
        self.current.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_clock_initial_value() {
        let clock = MockClock::<u32>::new();
        assert_eq!(clock.now(), 0);
    }

    #[test]
    fn test_mock_clock_with_initial() {
        let clock = MockClock::<u64>::with_initial(5_000);
        assert_eq!(clock.now(), 5_000);
    }

    #[test]
    fn test_mock_clock_set() {
        let clock = MockClock::<u32>::new();
        clock.set(1_000);
        assert_eq!(clock.now(), 1_000);
    }

    #[test]
    fn test_mock_clock_advance() {
        let clock = MockClock::<u32>::new();
        clock.advance(500);
        assert_eq!(clock.now(), 500);

        clock.advance(500);
        assert_eq!(clock.now(), 1_000);
    }

    #[test]
    fn test_mock_clock_advance_wraps() {
        let clock = MockClock::<u16>::with_initial(u16::MAX - 1);
        clock.advance(3);
        assert_eq!(clock.now(), 1);
    }

    #[test]
    fn test_mock_clock_shared_by_reference() {
        let clock = MockClock::<u32>::new();
        let reader = &clock;
        clock.advance(25);
        assert_eq!(reader.now(), 25);
    }
}
