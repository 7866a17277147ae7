//! Date validation functions
//!
//! Every predicate that takes a [`Moment`] answers `false` as soon as any of
//! its moments is invalid.

use crate::host::{Calendar, Host};
use crate::moment::Moment;
use chrono::Datelike;
use once_cell::sync::Lazy;
use regex::Regex;

static ISO_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}(\.[0-9]{3})?Z?$").unwrap()
});

/// Check if a moment holds a real timestamp
pub fn is_valid_moment(moment: &Moment) -> bool {
    moment.is_valid()
}

/// Check if a string is an ISO-8601 timestamp naming a real instant
///
/// ```rust
/// use breaking_date_utils::is_iso_string;
///
/// assert!(is_iso_string("2025-01-06T10:30:00.000Z"));
/// assert!(!is_iso_string("2025-02-30T10:30:00Z"));
/// assert!(!is_iso_string("2025-01-06"));
/// ```
pub fn is_iso_string(s: &str) -> bool {
    ISO_REGEX.is_match(s) && Moment::parse(s).is_valid()
}

/// Strictly before `base` (now when `None`)
pub fn is_past(moment: Moment, base: Option<Moment>) -> bool {
    Calendar::system().is_past(moment, base)
}

/// Strictly after `base` (now when `None`)
pub fn is_future(moment: Moment, base: Option<Moment>) -> bool {
    Calendar::system().is_future(moment, base)
}

pub fn is_today(moment: Moment, base: Option<Moment>) -> bool {
    Calendar::system().is_today(moment, base)
}

pub fn is_yesterday(moment: Moment, base: Option<Moment>) -> bool {
    Calendar::system().is_yesterday(moment, base)
}

pub fn is_tomorrow(moment: Moment, base: Option<Moment>) -> bool {
    Calendar::system().is_tomorrow(moment, base)
}

/// `start <= moment <= end`
pub fn is_in_range(moment: Moment, start: Moment, end: Moment) -> bool {
    match (
        moment.timestamp_millis(),
        start.timestamp_millis(),
        end.timestamp_millis(),
    ) {
        (Some(at), Some(start), Some(end)) => start <= at && at <= end,
        _ => false,
    }
}

/// Saturday or Sunday in the local zone
pub fn is_weekend(moment: Moment) -> bool {
    Calendar::system().is_weekend(moment)
}

/// Monday through Friday in the local zone
pub fn is_weekday(moment: Moment) -> bool {
    Calendar::system().is_weekday(moment)
}

/// Gregorian leap year rule
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn is_same_day(first: Moment, second: Moment) -> bool {
    Calendar::system().is_same_day(first, second)
}

pub fn is_same_month(first: Moment, second: Moment) -> bool {
    Calendar::system().is_same_month(first, second)
}

pub fn is_same_year(first: Moment, second: Moment) -> bool {
    Calendar::system().is_same_year(first, second)
}

impl<H: Host> Calendar<H> {
    pub fn is_past(&self, moment: Moment, base: Option<Moment>) -> bool {
        let base = self.base_or_now(base);
        match (moment.timestamp_millis(), base.timestamp_millis()) {
            (Some(at), Some(base)) => at < base,
            _ => false,
        }
    }

    pub fn is_future(&self, moment: Moment, base: Option<Moment>) -> bool {
        let base = self.base_or_now(base);
        match (moment.timestamp_millis(), base.timestamp_millis()) {
            (Some(at), Some(base)) => at > base,
            _ => false,
        }
    }

    pub fn is_today(&self, moment: Moment, base: Option<Moment>) -> bool {
        self.is_days_from(moment, base, 0)
    }

    pub fn is_yesterday(&self, moment: Moment, base: Option<Moment>) -> bool {
        self.is_days_from(moment, base, -1)
    }

    pub fn is_tomorrow(&self, moment: Moment, base: Option<Moment>) -> bool {
        self.is_days_from(moment, base, 1)
    }

    /// Calendar-day comparison against `base` shifted by `days`
    fn is_days_from(&self, moment: Moment, base: Option<Moment>, days: i64) -> bool {
        let base = self.base_or_now(base);
        let (Some(date), Some(base_date)) = (self.local_date(moment), self.local_date(base)) else {
            return false;
        };

        base_date
            .checked_add_signed(chrono::Duration::days(days))
            .map_or(false, |target| target == date)
    }

    pub fn is_weekend(&self, moment: Moment) -> bool {
        matches!(self.day_of_week(moment), Some(0 | 6))
    }

    pub fn is_weekday(&self, moment: Moment) -> bool {
        matches!(self.day_of_week(moment), Some(1..=5))
    }

    /// Local day of the week, 0 = Sunday .. 6 = Saturday
    fn day_of_week(&self, moment: Moment) -> Option<u32> {
        self.local(moment).map(|dt| dt.weekday().num_days_from_sunday())
    }

    pub fn is_same_day(&self, first: Moment, second: Moment) -> bool {
        match (self.local_date(first), self.local_date(second)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    pub fn is_same_month(&self, first: Moment, second: Moment) -> bool {
        match (self.local_year_month(first), self.local_year_month(second)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    pub fn is_same_year(&self, first: Moment, second: Moment) -> bool {
        match (self.local_year_month(first), self.local_year_month(second)) {
            (Some((a, _)), Some((b, _))) => a == b,
            _ => false,
        }
    }
}
