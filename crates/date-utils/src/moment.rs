//! The `Moment` value type
//!
//! A `Moment` is an instant with millisecond resolution, or the invalid
//! instant. Construction never fails; anything that cannot be represented
//! (unparseable text, timestamps more than [`MAX_TIMESTAMP_MILLIS`] from the
//! epoch) produces the invalid moment, which every validator rejects and every formatter renders as
//! [`INVALID_DATE`](crate::formatters::INVALID_DATE).

use crate::error::{DateError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Largest distance from the epoch, in milliseconds, that a moment may have
///
/// One day inside chrono's `DateTime::<Utc>::MAX_UTC` (`+262142-12-31`), so
/// any valid moment can be shifted by a UTC offset of up to ±24h without
/// leaving the representable range.
pub const MAX_TIMESTAMP_MILLIS: i64 = 8_210_266_790_399_999;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<DateTime<Utc>>", into = "Option<DateTime<Utc>>")]
pub struct Moment(Option<DateTime<Utc>>);

impl Moment {
    /// The invalid moment
    pub const fn invalid() -> Self {
        Self(None)
    }

    /// Current instant according to the system clock
    pub fn now() -> Self {
        Self::from(Utc::now())
    }

    /// Moment at `millis` milliseconds since the Unix epoch
    pub fn from_millis(millis: i64) -> Self {
        if millis.unsigned_abs() > MAX_TIMESTAMP_MILLIS.unsigned_abs() {
            return Self::invalid();
        }
        Self(DateTime::from_timestamp_millis(millis))
    }

    /// Lenient parse: anything unparseable becomes the invalid moment
    ///
    /// Accepts RFC 3339 timestamps, ISO date-times without an offset (read
    /// as UTC), plain `YYYY-MM-DD` dates (UTC midnight) and RFC 2822.
    pub fn parse(input: &str) -> Self {
        match input.parse() {
            Ok(moment) => moment,
            Err(e) => {
                tracing::trace!("{}", e);
                Self::invalid()
            }
        }
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_some()
    }

    /// Milliseconds since the Unix epoch, `None` when invalid
    pub fn timestamp_millis(&self) -> Option<i64> {
        self.0.map(|dt| dt.timestamp_millis())
    }

    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        self.0
    }

    pub fn to_datetime(&self) -> Result<DateTime<Utc>> {
        self.0.ok_or(DateError::InvalidMoment)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Moment {
    fn from(dt: DateTime<Tz>) -> Self {
        Self::from_millis(dt.timestamp_millis())
    }
}

impl From<Option<DateTime<Utc>>> for Moment {
    fn from(dt: Option<DateTime<Utc>>) -> Self {
        dt.map(Self::from).unwrap_or_else(Self::invalid)
    }
}

impl From<Moment> for Option<DateTime<Utc>> {
    fn from(moment: Moment) -> Self {
        moment.0
    }
}

impl TryFrom<Moment> for DateTime<Utc> {
    type Error = DateError;

    fn try_from(moment: Moment) -> Result<Self> {
        moment.to_datetime()
    }
}

impl FromStr for Moment {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self> {
        let input = s.trim();

        let parsed = DateTime::parse_from_rfc3339(input)
            .map(|dt| dt.with_timezone(&Utc))
            .or_else(|_| {
                NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f").map(|n| n.and_utc())
            })
            .or_else(|_| NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M").map(|n| n.and_utc()))
            .or_else(|_| {
                NaiveDate::parse_from_str(input, "%Y-%m-%d")
                    .map(|d| d.and_time(NaiveTime::MIN).and_utc())
            })
            .or_else(|_| DateTime::parse_from_rfc2822(input).map(|dt| dt.with_timezone(&Utc)));

        match parsed {
            Ok(dt) => {
                let moment = Self::from(dt);
                if moment.is_valid() {
                    Ok(moment)
                } else {
                    Err(DateError::InvalidMoment)
                }
            }
            Err(_) => Err(DateError::Parse {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Moment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::formatters::to_iso_string(*self))
    }
}
