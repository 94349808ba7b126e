//! Decomposition of the time left until a target instant into calendar units.

use chrono::{DateTime, Duration, TimeZone};

use crate::models::countdown::CountdownBreakdown;
use crate::utils::date::add_months;

const MINUTES_PER_HOUR: i64 = 60;
const MINUTES_PER_DAY: i64 = 24 * MINUTES_PER_HOUR;

/// Computes the countdown from `now` to `target`.
///
/// Whole calendar months are extracted first: the month cursor is
/// `now + k months` (day clamped to the end of shorter months) for the
/// largest `k` that does not pass `target`. The rest is split into days,
/// hours and minutes; leftover seconds are truncated. Everything after the
/// completion check is measured on the wall clock of the instants' zone, so
/// a DST switch never adds or removes an hour.
///
/// Once `target` is reached or passed the result is
/// [`CountdownBreakdown::complete`], however long ago that was.
pub fn compute_countdown<Tz: TimeZone>(
    now: &DateTime<Tz>,
    target: &DateTime<Tz>,
) -> CountdownBreakdown {
    if target <= now {
        return CountdownBreakdown::complete();
    }

    let start = now.naive_local();
    let end = target.naive_local();

    let mut months = 0u32;
    let mut cursor = start;
    while let Some(next) = add_months(start, months + 1) {
        if next > end {
            break;
        }
        months += 1;
        cursor = next;
    }

    // Inside a repeated hour the target's wall clock can trail the cursor's.
    let total_minutes = (end - cursor).max(Duration::zero()).num_minutes();
    let days = total_minutes / MINUTES_PER_DAY;
    let hours = (total_minutes % MINUTES_PER_DAY) / MINUTES_PER_HOUR;
    let minutes = total_minutes % MINUTES_PER_HOUR;

    CountdownBreakdown::new(
        months,
        u32::try_from(days).unwrap_or(u32::MAX),
        hours as u32,
        minutes as u32,
    )
}
