//! Error types for the fallible date APIs

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("Invalid date")]
    InvalidMoment,

    #[error("Cannot parse {input:?} as a date")]
    Parse { input: String },

    #[error("Unsupported locale: {0}")]
    UnknownLocale(String),

    #[error("Unsupported time zone: {0}")]
    UnknownTimezone(String),
}

pub type Result<T> = std::result::Result<T, DateError>;
