//! Business clock
//!
//! The past-reservation check compares against "now" shifted back by a
//! configured number of hours, approximating the restaurant's local
//! timezone (see `Config::clock_offset_hours`).

use chrono::{Duration, NaiveDateTime, Timelike, Utc};

/// Wall clock shifted by the configured offset
#[derive(Debug, Clone, Copy)]
pub struct BusinessClock {
    offset_hours: i64,
}

impl BusinessClock {
    pub fn new(offset_hours: i64) -> Self {
        Self { offset_hours }
    }

    /// Current time minus the offset, truncated to the minute
    ///
    /// Truncation keeps the comparison granularity aligned with the
    /// `HH:MM` reservation times.
    pub fn now(&self) -> NaiveDateTime {
        let now = Utc::now().naive_utc() - Duration::hours(self.offset_hours);
        now.with_second(0)
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_shifts_the_clock_back() {
        let shifted = BusinessClock::new(5).now();
        let plain = BusinessClock::new(0).now();
        // plain is sampled second, so the gap is at least the offset
        let diff = plain - shifted;
        assert_eq!(diff.num_hours(), 5);
    }

    #[test]
    fn now_is_truncated_to_the_minute() {
        let now = BusinessClock::new(5).now();
        assert_eq!(now.second(), 0);
        assert_eq!(now.nanosecond(), 0);
    }
}
