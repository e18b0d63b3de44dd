//! Wall-clock readings for time-based seeding
//!
//! The generator never reads the system clock directly. It asks a [`Clock`]
//! for a [`ClockReading`], which keeps seeding replayable in tests.

use chrono::{Datelike, Local, Timelike};
use serde::{Deserialize, Serialize};

/// Local wall-clock time at millisecond resolution
///
/// # Example
/// ```
/// use rndm::ClockReading;
///
/// let reading = ClockReading::new(2026, 10, 14, 17, 34, 0, 123);
/// assert_eq!(reading.encode(), 20_261_014_173_400_123);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockReading {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub millisecond: u32,
}

impl ClockReading {
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            millisecond,
        }
    }

    /// Pack the reading into one decimal-weighted integer
    ///
    /// Layout is `YYYY MM DD hh mm ss mmm` read as a decimal number.
    /// Arithmetic wraps modulo 2^64.
    pub fn encode(&self) -> u64 {
        (self.year as i64 as u64)
            .wrapping_mul(10_000_000_000_000)
            .wrapping_add((self.month as u64).wrapping_mul(100_000_000_000))
            .wrapping_add((self.day as u64).wrapping_mul(1_000_000_000))
            .wrapping_add((self.hour as u64).wrapping_mul(10_000_000))
            .wrapping_add((self.minute as u64).wrapping_mul(100_000))
            .wrapping_add((self.second as u64).wrapping_mul(1_000))
            .wrapping_add(self.millisecond as u64)
    }
}

/// Source of wall-clock readings
pub trait Clock {
    fn now(&self) -> ClockReading;
}

/// Local system time via `chrono`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> ClockReading {
        let now = Local::now();
        // nanosecond() exceeds 999_999_999 during a leap second
        let millisecond = (now.nanosecond() / 1_000_000).min(999);
        ClockReading {
            year: now.year(),
            month: now.month(),
            day: now.day(),
            hour: now.hour(),
            minute: now.minute(),
            second: now.second(),
            millisecond,
        }
    }
}

/// Clock frozen at one reading
///
/// # Example
/// ```
/// use rndm::{Clock, ClockReading, FixedClock};
///
/// let clock = FixedClock::new(ClockReading::new(2026, 1, 1, 0, 0, 0, 0));
/// assert_eq!(clock.now().year, 2026);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedClock {
    reading: ClockReading,
}

impl FixedClock {
    pub fn new(reading: ClockReading) -> Self {
        Self { reading }
    }

    /// Move the frozen reading
    pub fn set(&mut self, reading: ClockReading) {
        self.reading = reading;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> ClockReading {
        self.reading
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> ClockReading {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_weights() {
        let reading = ClockReading::new(1, 2, 3, 4, 5, 6, 7);
        assert_eq!(reading.encode(), 10_203_040_506_007);
    }

    #[test]
    fn test_system_clock_fields_in_range() {
        let reading = SystemClock.now();
        assert!((1..=12).contains(&reading.month));
        assert!((1..=31).contains(&reading.day));
        assert!(reading.hour < 24);
        assert!(reading.minute < 60);
        assert!(reading.second < 61);
        assert!(reading.millisecond < 1000);
    }
}
