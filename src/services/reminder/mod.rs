//! Reminder milestones before the event.
//!
//! A milestone is due when the number of calendar days left hits 30, 7 or 1.
//! [`ReminderTracker`] remembers which milestones were already reported so a
//! caller polling several times a day announces each one only once.

use std::collections::HashSet;

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::models::word_forms::WordForms;
use crate::services::plural::format_quantity;
use crate::utils::date::calendar_days_between;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReminderMilestone {
    /// 30 days left
    Month,
    /// 7 days left
    Week,
    /// The event is tomorrow
    Day,
}

impl ReminderMilestone {
    pub const ALL: [ReminderMilestone; 3] = [Self::Month, Self::Week, Self::Day];

    pub fn days_before(self) -> i64 {
        match self {
            Self::Month => 30,
            Self::Week => 7,
            Self::Day => 1,
        }
    }

    pub fn for_days_until(days: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.days_before() == days)
    }

    pub fn headline(self) -> &'static str {
        match self {
            Self::Month => "1 месяц до события!",
            Self::Week => "1 неделя до события!",
            Self::Day => "Завтра событие!",
        }
    }
}

/// Calendar days from the local date of `now` to that of `target`.
pub fn days_until<Tz: TimeZone>(now: &DateTime<Tz>, target: &DateTime<Tz>) -> i64 {
    calendar_days_between(now, target)
}

/// Full reminder text: the headline plus the agreeing day count.
pub fn reminder_message(
    milestone: ReminderMilestone,
    title: &str,
    days_left: i64,
    day_forms: &WordForms,
) -> String {
    format!(
        "{}\nДо события «{title}» осталось {}.",
        milestone.headline(),
        format_quantity(days_left, day_forms)
    )
}

pub struct ReminderTracker<Tz: TimeZone> {
    target: DateTime<Tz>,
    sent: HashSet<ReminderMilestone>,
}

impl<Tz: TimeZone> ReminderTracker<Tz> {
    pub fn new(target: DateTime<Tz>) -> Self {
        Self {
            target,
            sent: HashSet::new(),
        }
    }

    /// Returns the milestone due at `now`, unless it was already reported.
    pub fn check(&mut self, now: &DateTime<Tz>) -> Option<ReminderMilestone> {
        let days = days_until(now, &self.target);
        let milestone = ReminderMilestone::for_days_until(days)?;

        if !self.sent.insert(milestone) {
            return None;
        }

        log::info!("Reminder milestone {milestone:?} reached ({days} days left)");
        Some(milestone)
    }

    pub fn was_sent(&self, milestone: ReminderMilestone) -> bool {
        self.sent.contains(&milestone)
    }
}
