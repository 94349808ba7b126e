//! Russian numeral agreement and countdown display text.

use crate::models::countdown::CountdownBreakdown;
use crate::models::word_forms::{UnitWordForms, WordForms};

/// Picks the word form that agrees with `n` under Russian plural rules.
///
/// Numbers ending in 11-19 take `many`; otherwise a last digit of 1 takes
/// `one`, 2-4 takes `few`, anything else `many`. Negative numbers use their
/// magnitude.
pub fn select_form(n: i64, forms: &WordForms) -> &str {
    let n = n.unsigned_abs();
    let last_digit = n % 10;
    let last_two_digits = n % 100;

    if (11..=19).contains(&last_two_digits) {
        &forms.many
    } else if last_digit == 1 {
        &forms.one
    } else if (2..=4).contains(&last_digit) {
        &forms.few
    } else {
        &forms.many
    }
}

/// Renders `n` followed by its agreeing form, e.g. `"21 день"`.
pub fn format_quantity(n: i64, forms: &WordForms) -> String {
    format!("{n} {}", select_form(n, forms))
}

/// Renders the non-zero units of a countdown, largest first:
/// `"1 месяц 2 дня 3 часа 4 минуты"`.
///
/// Less than a minute left renders as zero minutes. A complete breakdown
/// renders as an empty string.
pub fn format_countdown(breakdown: &CountdownBreakdown, units: &UnitWordForms) -> String {
    if breakdown.is_complete {
        return String::new();
    }
    if breakdown.is_zero() {
        return format_quantity(0, &units.minutes);
    }

    [
        (breakdown.months, &units.months),
        (breakdown.days, &units.days),
        (breakdown.hours, &units.hours),
        (breakdown.minutes, &units.minutes),
    ]
    .into_iter()
    .filter(|(value, _)| *value > 0)
    .map(|(value, forms)| format_quantity(i64::from(value), forms))
    .collect::<Vec<_>>()
    .join(" ")
}
