//! # Breaking Date Utils
//!
//! Date and time formatting and validation over a small [`Moment`] value type.
//!
//! ## Features
//!
//! - **Formatters**: ISO, long human-readable, short date, 24-hour time,
//!   relative time (`"in 2 hours"`, `"1 day ago"`) and durations
//!   (`"1d 1h 1m 1s"`)
//! - **Validators**: validity, ISO strings, past/future, calendar-day checks,
//!   ranges, weekends, leap years
//! - **Pinned host**: [`Calendar`] with a [`FixedHost`] makes clock- and
//!   zone-dependent calls reproducible
//!
//! ## Example
//!
//! ```rust
//! use breaking_date_utils::{formatters, validators, Calendar, FixedHost, Moment};
//!
//! let now = Moment::parse("2025-01-06T10:00:00Z");
//! let calendar = Calendar::new(FixedHost::utc(now));
//!
//! assert_eq!(formatters::to_iso_string(now), "2025-01-06T10:00:00.000Z");
//! assert_eq!(
//!     calendar.to_relative_time(Moment::parse("2025-01-05T10:00:00Z"), None),
//!     "1 day ago"
//! );
//! assert!(validators::is_leap_year(2024));
//! ```

pub mod config;
pub mod error;
pub mod formatters;
pub mod host;
pub mod locale;
pub mod moment;
pub mod validators;

// Re-export all functions at the crate root
pub use formatters::*;
pub use validators::*;

pub use config::DateFormatOptions;
pub use error::DateError;
pub use host::{Calendar, FixedHost, Host, SystemHost};
pub use locale::{Locale, Zone};
pub use moment::Moment;

/// Package name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Package version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
