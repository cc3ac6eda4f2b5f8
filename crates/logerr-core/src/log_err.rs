//! Classified, timestamped errors.

use std::error::Error;
use std::fmt;

use chrono::{DateTime, Utc};

use crate::class::Class;
use crate::config::{LogConfig, TimePosition};
use crate::logger::Logger;

/// Boxed cause carried by a [`LogErr`].
pub type Cause = Box<dyn Error + Send + Sync + 'static>;

/// Rendering of an absent error.
pub const NIL: &str = "<nil>";

/// An error with a severity class, a message, its creation time and an
/// optional underlying cause.
///
/// `Display` yields `"<class>: <message>"`, followed by `": <cause>"` when a
/// cause is present. Log lines additionally carry the timestamp, placed and
/// formatted according to the logger's current configuration.
#[derive(Debug)]
pub struct LogErr {
    class: Class,
    message: String,
    at: DateTime<Utc>,
    cause: Option<Cause>,
}

impl LogErr {
    /// Create an error stamped with the current time.
    pub fn new(class: Class, message: impl Into<String>) -> Self {
        Self::at_time(class, message, Utc::now())
    }

    /// Create an error wrapping `cause`, stamped with the current time.
    pub fn wrap(class: Class, message: impl Into<String>, cause: impl Into<Cause>) -> Self {
        Self {
            cause: Some(cause.into()),
            ..Self::new(class, message)
        }
    }

    /// Create an error with an explicit creation time.
    pub fn at_time(class: Class, message: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            class,
            message: message.into(),
            at,
            cause: None,
        }
    }

    #[must_use]
    pub const fn class(&self) -> Class {
        self.class
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// When the error was created.
    #[must_use]
    pub const fn time(&self) -> DateTime<Utc> {
        self.at
    }

    /// The wrapped cause, if any.
    #[must_use]
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Same as `to_string()`.
    #[must_use]
    pub fn error_string(&self) -> String {
        self.to_string()
    }

    /// `error_string` for a possibly absent error; `None` renders as `"<nil>"`.
    #[must_use]
    pub fn error_or_nil(err: Option<&Self>) -> String {
        err.map_or_else(|| NIL.to_string(), Self::error_string)
    }

    /// Render the log line using the global logger's configuration.
    #[must_use]
    pub fn log_string(&self) -> String {
        self.log_string_in(Logger::global())
    }

    /// `log_string` for a possibly absent error; `None` renders as `"<nil>"`.
    #[must_use]
    pub fn log_string_or_nil(err: Option<&Self>) -> String {
        err.map_or_else(|| NIL.to_string(), Self::log_string)
    }

    /// Render the log line using `logger`'s current configuration.
    #[must_use]
    pub fn log_string_in(&self, logger: &Logger) -> String {
        self.log_string_with(&logger.config_snapshot())
    }

    /// Render the log line for a given configuration snapshot.
    ///
    /// The cause is not part of the log line.
    #[must_use]
    pub fn log_string_with(&self, config: &LogConfig) -> String {
        let base = format!("{}: {}", self.class, self.message);
        match config.time_position {
            TimePosition::Off => base,
            TimePosition::Before => format!("{} {base}", config.format_time(self.at)),
            TimePosition::After => format!("{base} {}", config.format_time(self.at)),
        }
    }

    /// Write this error to the global logger and return it.
    #[must_use = "logging returns the error for further propagation"]
    pub fn log(self) -> Self {
        self.log_to(Logger::global())
    }

    /// Write this error to `logger` and return it.
    #[must_use = "logging returns the error for further propagation"]
    pub fn log_to(self, logger: &Logger) -> Self {
        logger.write_payload(self.log_string_in(logger));
        self
    }

    /// Log a possibly absent error to the global logger. `None` writes nothing.
    #[must_use]
    pub fn log_opt(err: Option<Self>) -> Option<Self> {
        err.map(Self::log)
    }
}

impl fmt::Display for LogErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.class, self.message)?;
        if let Some(cause) = &self.cause {
            write!(f, ": {cause}")?;
        }
        Ok(())
    }
}

impl Error for LogErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn Error + 'static))
    }
}
