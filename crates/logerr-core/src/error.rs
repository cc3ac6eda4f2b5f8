//! Errors raised while reconfiguring the log facility.
//!
//! Two families exist: configuration errors (the requested settings make no
//! sense) and I/O errors (the environment or filesystem refused). Both are
//! returned synchronously from `set_config` and never retried.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving, validating or installing a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A raw path-mode value did not name any known mode.
    #[error("configuration error: unknown path mode {0}")]
    UnknownPathMode(u8),

    /// The time format could not be parsed as a strftime pattern.
    #[error("configuration error: invalid time format {0:?}")]
    InvalidTimeFormat(String),

    /// The time zone name is not a known IANA zone.
    #[error("configuration error: unknown time zone {0:?}")]
    UnknownTimeZone(String),

    /// Failed to get the current working directory.
    #[error("Cannot determine current directory: {0}")]
    CurrentDir(#[source] io::Error),

    /// Failed to locate the running executable.
    #[error("Cannot determine executable path: {0}")]
    Executable(#[source] io::Error),

    /// Failed to create the parent directory of the log file.
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to open or create the log file.
    #[error("Failed to open log file {path}: {source}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConfigError {
    /// Whether this error came from the environment or filesystem rather than
    /// from the settings themselves.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(
            self,
            Self::CurrentDir(_) | Self::Executable(_) | Self::CreateDir { .. } | Self::OpenFile { .. }
        )
    }
}
