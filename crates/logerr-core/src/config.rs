//! Configuration snapshots for the log facility.
//!
//! A [`LogConfig`] is never mutated once published. Reconfiguration builds a
//! fresh value, normalizes it and replaces the current snapshot wholesale.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::paths::PathMode;

/// Default timestamp pattern (RFC 3339 with numeric offset).
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Where the timestamp goes relative to the rendered error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum TimePosition {
    /// No timestamp.
    Off = 0,
    /// `<time> <class>: <message>`
    #[default]
    Before = 1,
    /// `<class>: <message> <time>`
    After = 2,
}

/// Unrecognized raw values fall back to [`TimePosition::Off`].
impl From<u8> for TimePosition {
    fn from(raw: u8) -> Self {
        match raw {
            1 => Self::Before,
            2 => Self::After,
            _ => Self::Off,
        }
    }
}

/// Time zone used to render timestamps.
///
/// Serialized as `"local"`, `"utc"` or an IANA zone name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Location {
    /// The host's local time zone.
    #[default]
    Local,
    Utc,
    /// A named IANA zone such as `Europe/Berlin`.
    Zone(Tz),
}

impl Location {
    /// Render `at` in this zone using a strftime pattern.
    ///
    /// A pattern chrono cannot render yields an empty string; `set_config`
    /// rejects such patterns before they can reach a published snapshot.
    #[must_use]
    pub fn format(self, at: DateTime<Utc>, pattern: &str) -> String {
        let mut out = String::with_capacity(pattern.len() + 16);
        let written = match self {
            Self::Local => write!(out, "{}", at.with_timezone(&chrono::Local).format(pattern)),
            Self::Utc => write!(out, "{}", at.format(pattern)),
            Self::Zone(tz) => write!(out, "{}", at.with_timezone(&tz).format(pattern)),
        };
        written.map(|()| out).unwrap_or_default()
    }
}

impl FromStr for Location {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("local") {
            return Ok(Self::Local);
        }
        if trimmed.eq_ignore_ascii_case("utc") {
            return Ok(Self::Utc);
        }
        trimmed
            .parse::<Tz>()
            .map(Self::Zone)
            .map_err(|_| ConfigError::UnknownTimeZone(trimmed.to_string()))
    }
}

impl TryFrom<String> for Location {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Location> for String {
    fn from(location: Location) -> Self {
        location.to_string()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => f.write_str("local"),
            Self::Utc => f.write_str("utc"),
            Self::Zone(tz) => f.write_str(tz.name()),
        }
    }
}

/// Formatting and destination settings for the log facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// strftime pattern for timestamps. Empty means [`DEFAULT_TIME_FORMAT`].
    pub time_format: String,

    /// Placement of the timestamp in rendered log lines.
    pub time_position: TimePosition,

    /// Zone used to render timestamps. `None` means local time.
    pub location: Option<Location>,

    /// Destination file. Empty discards all output.
    pub log_path: String,

    /// How `log_path` is anchored.
    pub path_mode: PathMode,

    /// Append to an existing file instead of truncating it.
    pub append: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            time_position: TimePosition::Before,
            location: Some(Location::Local),
            log_path: String::new(),
            path_mode: PathMode::Absolute,
            append: true,
        }
    }
}

impl LogConfig {
    /// Fill in defaults for unset fields and validate the time format.
    pub fn normalized(mut self) -> Result<Self, ConfigError> {
        if self.time_format.is_empty() {
            self.time_format = DEFAULT_TIME_FORMAT.to_string();
        }
        if self.location.is_none() {
            self.location = Some(Location::Local);
        }
        if StrftimeItems::new(&self.time_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::InvalidTimeFormat(self.time_format));
        }
        Ok(self)
    }

    /// Whether this configuration writes nowhere.
    #[must_use]
    pub fn is_discard(&self) -> bool {
        self.log_path.is_empty()
    }

    /// Render a timestamp with this snapshot's zone and pattern.
    #[must_use]
    pub fn format_time(&self, at: DateTime<Utc>) -> String {
        self.location
            .unwrap_or_default()
            .format(at, &self.time_format)
    }
}
