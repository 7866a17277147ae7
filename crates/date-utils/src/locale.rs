//! Display locales and time zones understood by the human formatter

use crate::error::{DateError, Result};
use chrono::{DateTime, Datelike, FixedOffset, Offset, Timelike, Utc};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    EnUs,
    EnGb,
    DeDe,
    FrFr,
    EsEs,
}

const EN_MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

const DE_MONTHS: [&str; 12] = [
    "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September", "Oktober",
    "November", "Dezember",
];

const FR_MONTHS: [&str; 12] = [
    "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
    "octobre", "novembre", "décembre",
];

const ES_MONTHS: [&str; 12] = [
    "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto", "septiembre",
    "octubre", "noviembre", "diciembre",
];

impl Locale {
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::EnGb => "en-GB",
            Locale::DeDe => "de-DE",
            Locale::FrFr => "fr-FR",
            Locale::EsEs => "es-ES",
        }
    }

    fn month_name(&self, month0: u32) -> &'static str {
        let months = match self {
            Locale::EnUs | Locale::EnGb => &EN_MONTHS,
            Locale::DeDe => &DE_MONTHS,
            Locale::FrFr => &FR_MONTHS,
            Locale::EsEs => &ES_MONTHS,
        };
        months[month0 as usize % 12]
    }

    /// Long date followed by hour and minute, e.g. `January 6, 2025 at 10:30 AM`
    pub fn format_long(&self, dt: &DateTime<FixedOffset>) -> String {
        let day = dt.day();
        let year = dt.year();
        let month = self.month_name(dt.month0());
        let (hour, minute) = (dt.hour(), dt.minute());

        match self {
            Locale::EnUs => {
                let (is_pm, hour12) = dt.hour12();
                let meridiem = if is_pm { "PM" } else { "AM" };
                format!(
                    "{} {}, {} at {:02}:{:02} {}",
                    month, day, year, hour12, minute, meridiem
                )
            }
            Locale::EnGb => format!("{} {} {} at {:02}:{:02}", day, month, year, hour, minute),
            Locale::DeDe => format!("{}. {} {} um {:02}:{:02}", day, month, year, hour, minute),
            Locale::FrFr => format!("{} {} {} à {:02}:{:02}", day, month, year, hour, minute),
            Locale::EsEs => format!("{} de {} de {}, {:02}:{:02}", day, month, year, hour, minute),
        }
    }
}

impl FromStr for Locale {
    type Err = DateError;

    /// Accepts `en-US`, `en_us`, `EN`, ... A bare language picks its
    /// default region.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().replace('_', "-").to_ascii_lowercase();
        let mut parts = normalized.split('-');
        let language = parts.next().unwrap_or_default();
        let region = parts.next();

        let locale = match (language, region) {
            ("en", Some("gb" | "uk")) => Locale::EnGb,
            ("en", _) => Locale::EnUs,
            ("de", _) => Locale::DeDe,
            ("fr", _) => Locale::FrFr,
            ("es", _) => Locale::EsEs,
            _ => return Err(DateError::UnknownLocale(s.to_string())),
        };
        Ok(locale)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A display time zone
///
/// Only UTC and fixed offsets are supported; named regional zones are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Utc,
    Fixed(FixedOffset),
}

impl Zone {
    pub fn offset(&self) -> FixedOffset {
        match self {
            Zone::Utc => Utc.fix(),
            Zone::Fixed(offset) => *offset,
        }
    }
}

impl FromStr for Zone {
    type Err = DateError;

    /// Accepts `UTC`, `GMT`, `Etc/UTC`, `Etc/GMT`, `Z`, and offsets like
    /// `+05:30`, `-0800`, `+02`, optionally prefixed with `UTC` or `GMT`.
    fn from_str(s: &str) -> Result<Self> {
        let unknown = || DateError::UnknownTimezone(s.to_string());
        let trimmed = s.trim();
        let upper = trimmed.to_ascii_uppercase();

        if matches!(upper.as_str(), "UTC" | "GMT" | "Z" | "ETC/UTC" | "ETC/GMT") {
            return Ok(Zone::Utc);
        }

        let offset = upper
            .strip_prefix("UTC")
            .or_else(|| upper.strip_prefix("GMT"))
            .unwrap_or(&upper);

        let (sign, rest) = match offset.as_bytes().first() {
            Some(b'+') => (1, &offset[1..]),
            Some(b'-') => (-1, &offset[1..]),
            _ => return Err(unknown()),
        };

        let digits: String = rest.chars().filter(|c| *c != ':').collect();
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(unknown());
        }

        let (hours, minutes) = match digits.len() {
            1 | 2 => (digits.parse::<i32>().map_err(|_| unknown())?, 0),
            4 => (
                digits[..2].parse::<i32>().map_err(|_| unknown())?,
                digits[2..].parse::<i32>().map_err(|_| unknown())?,
            ),
            _ => return Err(unknown()),
        };

        if hours > 23 || minutes > 59 {
            return Err(unknown());
        }

        FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
            .map(Zone::Fixed)
            .ok_or_else(unknown)
    }
}
