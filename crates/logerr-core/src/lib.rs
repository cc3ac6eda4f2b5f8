//! Classified, timestamped errors written to a runtime-reconfigurable sink.
//!
//! A [`LogErr`] carries a [`Class`], a message, its creation time and an
//! optional cause. Logging one writes a single line to the current sink, which
//! is either nothing (discard) or a file chosen by [`LogConfig`]. The sink and
//! configuration can be replaced at any time from any thread; see [`Logger`]
//! for the consistency guarantees.
//!
//! ```no_run
//! use logerr_core::{Class, LogConfig, LogErr, PathMode};
//!
//! logerr_core::set_config(LogConfig {
//!     log_path: "logs/app.log".into(),
//!     path_mode: PathMode::WorkingDir,
//!     ..LogConfig::default()
//! })?;
//!
//! let err = LogErr::wrap(Class::Error, "save failed", "disk full").log();
//! assert_eq!(err.to_string(), "error: save failed: disk full");
//! # Ok::<(), logerr_core::ConfigError>(())
//! ```

#![deny(unused_crate_dependencies)]

pub mod class;
pub mod config;
pub mod error;
pub mod log_err;
pub mod logger;
pub mod paths;
pub mod ports;
pub mod sink;

use std::error::Error;

pub use class::Class;
pub use config::{DEFAULT_TIME_FORMAT, Location, LogConfig, TimePosition};
pub use error::ConfigError;
pub use log_err::{Cause, LogErr};
pub use logger::Logger;
pub use paths::{PathMode, resolve_log_path};
pub use ports::{LogFile, LogFileSystem, StdFileSystem};
pub use sink::Sink;

/// Reconfigure the process-wide logger. See [`Logger::set_config`].
pub fn set_config(config: LogConfig) -> Result<(), ConfigError> {
    Logger::global().set_config(config)
}

/// The process-wide logger's current configuration.
#[must_use]
pub fn get_config() -> LogConfig {
    Logger::global().config()
}

/// Write `err` to the process-wide logger and return it.
pub fn log<E: Error + 'static>(err: E) -> E {
    Logger::global().log(err)
}

/// Write a borrowed, type-erased error to the process-wide logger.
///
/// Use this for `Box<dyn Error + Send + Sync>`: `logerr_core::log_dyn(&*err)`.
pub fn log_dyn(err: &(dyn Error + 'static)) {
    Logger::global().log_dyn(err);
}

/// Write `err` to the process-wide logger if present.
pub fn log_opt<E: Error + 'static>(err: Option<E>) -> Option<E> {
    Logger::global().log_opt(err)
}

/// Log the error arm of `result` to the process-wide logger.
pub fn log_result<T, E: Error + 'static>(result: Result<T, E>) -> Result<T, E> {
    Logger::global().log_result(result)
}
