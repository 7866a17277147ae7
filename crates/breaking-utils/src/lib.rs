//! # breaking-utils
//!
//! String and date utilities in one dependency.
//!
//! ## Quick Start
//!
//! ```rust
//! use breaking_utils::{dates, strings};
//!
//! assert_eq!(strings::slugify("Hello World!"), "hello-world");
//! assert_eq!(dates::format_duration(90_061_000), "1d 1h 1m 1s");
//! ```
//!
//! ## Features
//!
//! - **`strings`** - String formatters and validators (`breaking-string-utils`)
//! - **`dates`** - Date formatters and validators (`breaking-date-utils`)
//!
//! Both are on by default. Each component crate is reachable as a module
//! (`strings`, `dates`) and through grouped `*_formatters` / `*_validators`
//! aliases. String functions are also flattened into the crate root, as are
//! the date types and functions.

#[cfg(feature = "strings")]
pub use breaking_string_utils as strings;

#[cfg(feature = "strings")]
pub use breaking_string_utils::{formatters as string_formatters, validators as string_validators};

#[cfg(feature = "strings")]
pub use breaking_string_utils::{formatters::*, validators::*};

#[cfg(feature = "dates")]
pub use breaking_date_utils as dates;

#[cfg(feature = "dates")]
pub use breaking_date_utils::{formatters as date_formatters, validators as date_validators};

#[cfg(feature = "dates")]
pub use breaking_date_utils::{
    formatters::*, validators::*, Calendar, DateError, DateFormatOptions, FixedHost, Host,
    Locale, Moment, SystemHost, Zone,
};

/// Package name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Package version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
