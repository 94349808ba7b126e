// Property-based tests for countdown decomposition and plural selection

use chrono::{DateTime, Duration, Months, TimeZone, Utc};
use chrono_tz::Europe::Berlin;
use proptest::prelude::*;

use event_countdown::{compute_countdown, select_form, WordForms};

fn instant(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

// 2000-01-01 .. 2100-01-01
const RANGE: std::ops::Range<i64> = 946_684_800..4_102_444_800;

proptest! {
    /// Property: once the target is reached the breakdown is complete and zero
    #[test]
    fn prop_past_target_is_complete(target in RANGE, past in 0i64..400 * 86_400) {
        let target = instant(target);
        let now = target + Duration::seconds(past);
        let result = compute_countdown(&now, &target);
        prop_assert!(result.is_complete);
        prop_assert!(result.is_zero());
    }

    /// Property: every field stays within its unit's range
    #[test]
    fn prop_fields_in_range(now in RANGE, ahead in 1i64..5 * 365 * 86_400) {
        let now = instant(now);
        let result = compute_countdown(&now, &(now + Duration::seconds(ahead)));
        prop_assert!(!result.is_complete);
        prop_assert!(result.days < 31);
        prop_assert!(result.hours < 24);
        prop_assert!(result.minutes < 60);
    }

    /// Property: field ranges also hold across DST switches in a named zone
    #[test]
    fn prop_fields_in_range_with_dst(now in RANGE, ahead in 1i64..3 * 365 * 86_400) {
        let now = instant(now).with_timezone(&Berlin);
        let target = now + Duration::seconds(ahead);
        let result = compute_countdown(&now, &target);
        prop_assert!(!result.is_complete);
        prop_assert!(result.days < 31, "{:?} -> {:?}: {:?}", now, target, result);
        prop_assert!(result.hours < 24);
        prop_assert!(result.minutes < 60);

        // No extra month fits on the wall clock either.
        let next = now.naive_local().checked_add_months(Months::new(result.months + 1)).unwrap();
        prop_assert!(next > target.naive_local());
    }

    /// Property: rebuilding an instant from the breakdown lands within a
    /// minute of the target without passing it
    #[test]
    fn prop_reconstruction_within_a_minute(now in RANGE, ahead in 1i64..5 * 365 * 86_400) {
        let now = instant(now);
        let target = now + Duration::seconds(ahead);
        let result = compute_countdown(&now, &target);

        let rebuilt = now.checked_add_months(Months::new(result.months)).unwrap()
            + Duration::days(result.days.into())
            + Duration::hours(result.hours.into())
            + Duration::minutes(result.minutes.into());
        prop_assert!(rebuilt <= target);
        prop_assert!(target - rebuilt < Duration::minutes(1));
    }

    /// Property: no extra month fits in the remainder
    #[test]
    fn prop_months_are_maximal(now in RANGE, ahead in 1i64..5 * 365 * 86_400) {
        let now = instant(now);
        let target = now + Duration::seconds(ahead);
        let result = compute_countdown(&now, &target);
        let next = now.checked_add_months(Months::new(result.months + 1)).unwrap();
        prop_assert!(next > target);
    }

    /// Property: identical inputs give identical results
    #[test]
    fn prop_is_pure(now in RANGE, ahead in -86_400i64..86_400 * 90) {
        let now = instant(now);
        let target = now + Duration::seconds(ahead);
        prop_assert_eq!(compute_countdown(&now, &target), compute_countdown(&now, &target));
    }

    /// Property: plural form depends only on the last two digits
    #[test]
    fn prop_plural_depends_on_last_two_digits(n in 0i64..1_000_000) {
        let forms = WordForms::from(["one", "few", "many"]);
        prop_assert_eq!(select_form(n, &forms), select_form(n % 100, &forms));
        prop_assert_eq!(select_form(n, &forms), select_form(-n, &forms));
    }
}
