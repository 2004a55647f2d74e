//! Timestamp formatting and clocks

use chrono::{Local, NaiveDateTime};
use std::cell::Cell;

/// Display format for entry timestamps, e.g. `05 Mar 25, 09:07 PM`
pub const TIMESTAMP_FORMAT: &str = "%d %b %y, %I:%M %p";

/// Format an instant as an entry timestamp
pub fn format_timestamp(at: &NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Source of the current time
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

/// Local wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Manually driven clock
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Cell<NaiveDateTime>,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        FixedClock {
            now: Cell::new(now),
        }
    }

    pub fn set(&self, now: NaiveDateTime) {
        self.now.set(now);
    }

    pub fn advance(&self, by: chrono::Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_format_evening() {
        assert_eq!(format_timestamp(&at(2025, 3, 5, 21, 7)), "05 Mar 25, 09:07 PM");
    }

    #[test]
    fn test_format_morning() {
        assert_eq!(
            format_timestamp(&at(2024, 12, 31, 8, 30)),
            "31 Dec 24, 08:30 AM"
        );
    }

    #[test]
    fn test_format_midnight_and_noon() {
        assert_eq!(format_timestamp(&at(2025, 1, 1, 0, 0)), "01 Jan 25, 12:00 AM");
        assert_eq!(
            format_timestamp(&at(2025, 1, 1, 12, 45)),
            "01 Jan 25, 12:45 PM"
        );
    }

    #[test]
    fn test_fixed_clock_advance() {
        let clock = FixedClock::new(at(2025, 3, 5, 9, 0));
        clock.advance(Duration::minutes(90));
        assert_eq!(clock.now(), at(2025, 3, 5, 10, 30));

        clock.set(at(2026, 1, 1, 0, 0));
        assert_eq!((&clock).now(), at(2026, 1, 1, 0, 0));
    }
}
