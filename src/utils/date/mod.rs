// Date utility functions
// Calendar arithmetic shared by the countdown and reminder services

use chrono::{DateTime, Months, NaiveDateTime, TimeZone};

/// Adds whole calendar months to a wall-clock datetime, keeping the time.
///
/// The day of month is clamped to the last valid day of the resulting month,
/// so Jan 31 + 1 month is Feb 28 (Feb 29 in leap years). Returns `None`
/// outside chrono's range.
pub fn add_months(date: NaiveDateTime, months: u32) -> Option<NaiveDateTime> {
    date.checked_add_months(Months::new(months))
}

/// Whole calendar days between the local dates of `from` and `to`.
/// Negative when `to` falls on an earlier date.
pub fn calendar_days_between<Tz: TimeZone>(from: &DateTime<Tz>, to: &DateTime<Tz>) -> i64 {
    (to.date_naive() - from.date_naive()).num_days()
}
