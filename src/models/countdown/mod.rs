use serde::{Deserialize, Serialize};

/// Time left until an event, split into calendar units.
///
/// Every field is the remainder after the next-larger unit has been
/// extracted as many times as possible, so `hours < 24` and `minutes < 60`.
/// Once the event is reached the breakdown collapses to all zeroes with
/// `is_complete` set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CountdownBreakdown {
    pub months: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub is_complete: bool,
}

impl CountdownBreakdown {
    pub const fn new(months: u32, days: u32, hours: u32, minutes: u32) -> Self {
        Self {
            months,
            days,
            hours,
            minutes,
            is_complete: false,
        }
    }

    /// The terminal state returned once the target has been reached or passed.
    pub const fn complete() -> Self {
        Self {
            months: 0,
            days: 0,
            hours: 0,
            minutes: 0,
            is_complete: true,
        }
    }

    /// True when no whole minute is left, whether or not the event is complete.
    pub fn is_zero(&self) -> bool {
        self.months == 0 && self.days == 0 && self.hours == 0 && self.minutes == 0
    }
}
