// Test fixtures - reusable test data
// Provides consistent instants across the integration tests

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};

/// Sample instants for testing
pub mod instants {
    use super::*;

    pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    /// Returns Apr 25, 2026 at midnight (the default event date)
    pub fn event_day() -> DateTime<Utc> {
        at(2026, 4, 25, 0, 0)
    }

    /// Returns Jan 31, 2026 at midnight (month-end clamping)
    pub fn jan_31_2026() -> DateTime<Utc> {
        at(2026, 1, 31, 0, 0)
    }

    /// Returns Feb 29, 2028 at noon (leap year)
    pub fn leap_day_2028() -> DateTime<Utc> {
        at(2028, 2, 29, 12, 0)
    }
}
