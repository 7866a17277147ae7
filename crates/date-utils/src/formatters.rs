//! Date formatting functions
//!
//! Formatters never fail. An invalid [`Moment`] renders as [`INVALID_DATE`],
//! matching what host date libraries print for a NaN timestamp.
//!
//! The free functions here read the system clock and local zone. Use the
//! matching [`Calendar`] methods to pin both.

use crate::config::DateFormatOptions;
use crate::error::{DateError, Result};
use crate::host::{shift, Calendar, Host};
use crate::locale::{Locale, Zone};
use crate::moment::Moment;
use chrono::Datelike;

/// Rendering of an invalid moment
pub const INVALID_DATE: &str = "Invalid Date";

const SECOND_MS: u64 = 1_000;
const MINUTE_MS: u64 = 60 * SECOND_MS;
const HOUR_MS: u64 = 60 * MINUTE_MS;
const DAY_MS: u64 = 24 * HOUR_MS;

/// `YYYY-MM-DDTHH:mm:ss.sssZ` in UTC
///
/// Years outside 0..=9999 use the expanded six-digit form, e.g.
/// `+262142-12-30T23:59:59.999Z`.
pub fn to_iso_string(moment: Moment) -> String {
    let Some(dt) = moment.datetime() else {
        return INVALID_DATE.to_string();
    };

    let year = dt.year();
    let year = if (0..=9999).contains(&year) {
        format!("{:04}", year)
    } else if year < 0 {
        format!("-{:06}", year.unsigned_abs())
    } else {
        format!("+{:06}", year)
    };

    format!("{}-{}", year, dt.format("%m-%dT%H:%M:%S%.3fZ"))
}

/// Long date and time in the requested locale and zone
///
/// Unsupported locales fall back to `en-US`, unsupported zones to the
/// host's local zone. See [`try_to_human_string`] for the strict variant.
pub fn to_human_string(moment: Moment, options: &DateFormatOptions) -> String {
    Calendar::system().to_human_string(moment, options)
}

pub fn try_to_human_string(moment: Moment, options: &DateFormatOptions) -> Result<String> {
    Calendar::system().try_to_human_string(moment, options)
}

/// `MM/DD/YYYY` in the local zone
pub fn to_short_date(moment: Moment) -> String {
    Calendar::system().to_short_date(moment)
}

/// 24-hour `HH:MM`, or `HH:MM:SS` with `include_seconds`, in the local zone
pub fn to_time_string(moment: Moment, include_seconds: bool) -> String {
    Calendar::system().to_time_string(moment, include_seconds)
}

/// Describe `moment` relative to `base` (now when `None`)
///
/// ```rust
/// use breaking_date_utils::{to_relative_time, Moment};
///
/// let base = Moment::parse("2025-01-06T10:00:00Z");
/// let later = Moment::parse("2025-01-06T12:00:00Z");
/// assert_eq!(to_relative_time(later, Some(base)), "in 2 hours");
/// ```
pub fn to_relative_time(moment: Moment, base: Option<Moment>) -> String {
    Calendar::system().to_relative_time(moment, base)
}

/// Render a millisecond count as `1d 2h 3m 4s`, starting at the largest
/// non-zero unit
///
/// Negative durations are rendered by magnitude.
///
/// ```rust
/// use breaking_date_utils::format_duration;
///
/// assert_eq!(format_duration(90_061_000), "1d 1h 1m 1s");
/// assert_eq!(format_duration(45_000), "45s");
/// ```
pub fn format_duration(duration_ms: i64) -> String {
    let total = duration_ms.unsigned_abs();
    let days = total / DAY_MS;
    let hours = total % DAY_MS / HOUR_MS;
    let minutes = total % HOUR_MS / MINUTE_MS;
    let seconds = total % MINUTE_MS / SECOND_MS;

    if days > 0 {
        format!("{}d {}h {}m {}s", days, hours, minutes, seconds)
    } else if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

impl<H: Host> Calendar<H> {
    pub fn to_human_string(&self, moment: Moment, options: &DateFormatOptions) -> String {
        let Some(utc) = moment.datetime() else {
            return INVALID_DATE.to_string();
        };

        let locale = options.locale.parse::<Locale>().unwrap_or_else(|e| {
            tracing::debug!("{}, falling back to {}", e, Locale::default());
            Locale::default()
        });

        let offset = match options.timezone.as_deref().map(str::parse::<Zone>) {
            Some(Ok(zone)) => zone.offset(),
            Some(Err(e)) => {
                tracing::warn!("{}, using the local time zone", e);
                self.host().local_offset(&utc)
            }
            None => self.host().local_offset(&utc),
        };

        match shift(&utc, offset) {
            Some(local) => locale.format_long(&local),
            None => INVALID_DATE.to_string(),
        }
    }

    pub fn try_to_human_string(
        &self,
        moment: Moment,
        options: &DateFormatOptions,
    ) -> Result<String> {
        let utc = moment.to_datetime()?;
        let (locale, zone) = options.validate()?;
        let offset = match zone {
            Some(zone) => zone.offset(),
            None => self.host().local_offset(&utc),
        };
        let local = shift(&utc, offset).ok_or(DateError::InvalidMoment)?;
        Ok(locale.format_long(&local))
    }

    pub fn to_short_date(&self, moment: Moment) -> String {
        match self.local(moment) {
            Some(dt) => dt.format("%m/%d/%Y").to_string(),
            None => INVALID_DATE.to_string(),
        }
    }

    pub fn to_time_string(&self, moment: Moment, include_seconds: bool) -> String {
        let pattern = if include_seconds { "%H:%M:%S" } else { "%H:%M" };
        match self.local(moment) {
            Some(dt) => dt.format(pattern).to_string(),
            None => INVALID_DATE.to_string(),
        }
    }

    pub fn to_relative_time(&self, moment: Moment, base: Option<Moment>) -> String {
        let base = self.base_or_now(base);
        let (Some(at), Some(from)) = (moment.timestamp_millis(), base.timestamp_millis()) else {
            return INVALID_DATE.to_string();
        };

        let diff = at - from;
        let magnitude = diff.unsigned_abs();

        let (count, unit) = if magnitude >= DAY_MS {
            (magnitude / DAY_MS, "day")
        } else if magnitude >= HOUR_MS {
            (magnitude / HOUR_MS, "hour")
        } else if magnitude >= MINUTE_MS {
            (magnitude / MINUTE_MS, "minute")
        } else {
            return "just now".to_string();
        };

        let plural = if count == 1 { "" } else { "s" };
        if diff > 0 {
            format!("in {} {}{}", count, unit, plural)
        } else {
            format!("{} {}{} ago", count, unit, plural)
        }
    }
}
