//! End-to-end checks through the public API
//!
//! Clock-dependent calls pass an explicit base, and calendar checks use
//! noon UTC so they hold in any local zone between UTC-11 and UTC+11.

use breaking_date_utils::{
    formatters, validators, Calendar, DateError, DateFormatOptions, FixedHost, Moment,
};
use breaking_date_utils::moment::MAX_TIMESTAMP_MILLIS;
use breaking_date_utils::{DESCRIPTION, NAME, VERSION};
use chrono::{FixedOffset, TimeZone, Utc};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn base() -> Moment {
    Moment::parse("2025-01-06T10:00:00Z")
}

#[rstest]
#[case("2025-01-06T12:00:00Z", "in 2 hours")]
#[case("2025-01-05T10:00:00Z", "1 day ago")]
#[case("2025-01-06T10:00:30Z", "just now")]
#[case("2025-01-06T09:59:30Z", "just now")]
#[case("2025-01-06T09:58:00Z", "2 minutes ago")]
#[case("2025-01-06T09:00:00Z", "1 hour ago")]
#[case("2025-01-16T10:00:00Z", "in 10 days")]
fn relative_time_against_fixed_base(#[case] moment: &str, #[case] expected: &str) {
    assert_eq!(
        formatters::to_relative_time(Moment::parse(moment), Some(base())),
        expected
    );
}

#[rstest]
#[case(90_061_000, "1d 1h 1m 1s")]
#[case(172_800_000, "2d 0h 0m 0s")]
#[case(7_322_000, "2h 2m 2s")]
#[case(61_000, "1m 1s")]
#[case(999, "0s")]
fn duration_rendering(#[case] ms: i64, #[case] expected: &str) {
    assert_eq!(formatters::format_duration(ms), expected);
}

#[test]
fn weekend_on_known_dates() {
    let saturday = Moment::parse("2025-01-04T12:00:00Z");
    let monday = Moment::parse("2025-01-06T12:00:00Z");
    assert!(validators::is_weekend(saturday));
    assert!(!validators::is_weekend(monday));
    assert!(validators::is_weekday(monday));
}

#[test]
fn leap_years() {
    assert!(validators::is_leap_year(2000));
    assert!(!validators::is_leap_year(1900));
    assert!(validators::is_leap_year(2024));
    assert!(!validators::is_leap_year(2023));
}

#[test]
fn invalid_moment_is_rejected_everywhere() {
    let bad = Moment::parse("definitely not a date");
    let good = base();

    assert!(!validators::is_valid_moment(&bad));
    assert!(!validators::is_past(bad, Some(good)));
    assert!(!validators::is_future(bad, Some(good)));
    assert!(!validators::is_today(bad, Some(good)));
    assert!(!validators::is_yesterday(bad, Some(good)));
    assert!(!validators::is_tomorrow(bad, Some(good)));
    assert!(!validators::is_in_range(bad, good, good));
    assert!(!validators::is_weekend(bad));
    assert!(!validators::is_weekday(bad));
    assert!(!validators::is_same_day(bad, good));
    assert!(!validators::is_same_month(bad, good));
    assert!(!validators::is_same_year(bad, good));

    assert_eq!(formatters::to_iso_string(bad), formatters::INVALID_DATE);
    assert_eq!(formatters::to_short_date(bad), formatters::INVALID_DATE);
    assert_eq!(
        formatters::try_to_human_string(bad, &DateFormatOptions::default()),
        Err(DateError::InvalidMoment)
    );
}

#[test]
fn past_and_future_with_explicit_base() {
    assert!(validators::is_past(Moment::parse("2025-01-06T09:00:00Z"), Some(base())));
    assert!(validators::is_future(Moment::parse("2025-01-06T11:00:00Z"), Some(base())));
    assert!(!validators::is_past(base(), Some(base())));
    assert!(!validators::is_future(base(), Some(base())));
}

#[test]
fn default_base_is_the_system_clock() {
    let long_ago = Moment::parse("2000-01-01T00:00:00Z");
    let far_ahead = Moment::parse("2999-01-01T00:00:00Z");
    assert!(validators::is_past(long_ago, None));
    assert!(validators::is_future(far_ahead, None));
    assert_eq!(formatters::to_relative_time(Moment::now(), None), "just now");
    assert!(validators::is_today(Moment::now(), None));
}

#[test]
fn moments_from_chrono() {
    let dt = Utc.with_ymd_and_hms(2025, 1, 6, 10, 0, 0).unwrap();
    assert_eq!(Moment::from(dt), base());

    let offset = FixedOffset::east_opt(3600).unwrap();
    let dt = offset.with_ymd_and_hms(2025, 1, 6, 11, 0, 0).unwrap();
    assert_eq!(Moment::from(dt), base());
}

#[test]
fn pinned_calendar_formats_in_its_zone() {
    let offset = FixedOffset::west_opt(8 * 3600).unwrap();
    let calendar = Calendar::new(FixedHost::new(base(), offset));
    let moment = Moment::parse("2025-01-06T05:30:45Z");

    assert_eq!(calendar.to_short_date(moment), "01/05/2025");
    assert_eq!(calendar.to_time_string(moment, true), "21:30:45");
    assert_eq!(
        calendar.to_human_string(moment, &DateFormatOptions::default()),
        "January 5, 2025 at 09:30 PM"
    );
    assert!(calendar.is_yesterday(moment, None));
    assert!(calendar.is_weekend(moment));
}

#[rstest]
#[case(-23)]
#[case(-12)]
#[case(0)]
#[case(14)]
#[case(23)]
fn range_ends_in_any_zone(#[case] hours: i32) {
    let offset = FixedOffset::east_opt(hours * 3600).unwrap();

    for millis in [MAX_TIMESTAMP_MILLIS, -MAX_TIMESTAMP_MILLIS] {
        let moment = Moment::from_millis(millis);
        assert!(moment.is_valid());

        let calendar = Calendar::new(FixedHost::new(moment, offset));
        assert_ne!(calendar.to_short_date(moment), formatters::INVALID_DATE);
        assert_ne!(calendar.to_time_string(moment, true), formatters::INVALID_DATE);
        assert_ne!(
            calendar.to_human_string(moment, &DateFormatOptions::default()),
            formatters::INVALID_DATE
        );
        assert!(calendar.is_today(moment, None));
        assert!(!calendar.is_tomorrow(moment, None));
        assert!(!calendar.is_yesterday(moment, None));
        assert!(calendar.is_weekend(moment) || calendar.is_weekday(moment));
        assert!(calendar.is_same_year(moment, moment));
    }

    for millis in [MAX_TIMESTAMP_MILLIS + 1, -MAX_TIMESTAMP_MILLIS - 1] {
        let moment = Moment::from_millis(millis);
        let calendar = Calendar::new(FixedHost::new(moment, offset));
        assert!(!moment.is_valid());
        assert_eq!(calendar.to_short_date(moment), formatters::INVALID_DATE);
        assert!(!calendar.is_today(moment, None));
    }
}

#[test]
fn iso_strings() {
    assert!(validators::is_iso_string("2025-01-06T10:00:00.000Z"));
    assert!(!validators::is_iso_string("2025-01-06 10:00:00"));
    assert_eq!(
        formatters::to_iso_string(Moment::parse("2025-01-06T10:00:00Z")),
        "2025-01-06T10:00:00.000Z"
    );
    assert_eq!(base().to_string(), "2025-01-06T10:00:00.000Z");
}

#[test]
fn package_metadata() {
    assert_eq!(NAME, "breaking-date-utils");
    assert_eq!(VERSION, "0.1.0");
    assert!(!DESCRIPTION.is_empty());
}
