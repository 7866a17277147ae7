// File: src/config.rs
// Purpose: Formatting options, loadable from a TOML `[format]` table

use crate::error::Result;
use crate::locale::{Locale, Zone};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Options for [`to_human_string`](crate::formatters::to_human_string)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateFormatOptions {
    /// Display locale tag (default: "en-US")
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Display time zone; the host's local zone when absent
    #[serde(default)]
    pub timezone: Option<String>,
}

/// Top-level layout of a config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    format: DateFormatOptions,
}

fn default_locale() -> String {
    Locale::default().tag().to_string()
}

impl Default for DateFormatOptions {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            timezone: None,
        }
    }
}

impl DateFormatOptions {
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    /// Resolve the locale and zone, failing on anything unsupported
    pub fn validate(&self) -> Result<(Locale, Option<Zone>)> {
        let locale = self.locale.parse::<Locale>()?;
        let zone = self.timezone.as_deref().map(str::parse::<Zone>).transpose()?;
        Ok((locale, zone))
    }

    /// Parse options from the `[format]` table of a TOML document
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let file: ConfigFile = toml::from_str(content).context("Failed to parse format options")?;
        Ok(file.format)
    }

    /// Load options from a TOML file; a missing file yields the defaults
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}
