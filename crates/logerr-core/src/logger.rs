//! The log facility's shared state: current sink and configuration.
//!
//! Both live in independent [`ArcSwap`] cells. Each cell is read and replaced
//! atomically, but the pair is not: while `set_config` runs, a reader can see
//! the new sink with the old configuration or the reverse. A reader never sees
//! a closed file, because a superseded file sink is dropped only after the
//! last writer holding it finishes.

use std::error::Error;
use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;
use tracing::{debug, info, warn};

use crate::config::LogConfig;
use crate::error::ConfigError;
use crate::log_err::LogErr;
use crate::paths::{parent_to_create, resolve_log_path};
use crate::ports::{LogFileSystem, StdFileSystem};
use crate::sink::Sink;

/// Process-wide logger used by the free functions and [`LogErr::log`].
static GLOBAL_LOGGER: LazyLock<Logger> = LazyLock::new(Logger::new);

/// Holder of the active sink and configuration snapshot.
///
/// Most programs use [`Logger::global`]; tests and embedders can create
/// independent instances.
pub struct Logger {
    sink: ArcSwap<Sink>,
    config: ArcSwap<LogConfig>,
    fs: Arc<dyn LogFileSystem>,
}

impl Logger {
    /// Create a logger that discards output and uses the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_file_system(Arc::new(StdFileSystem))
    }

    /// Create a logger that opens destinations through `fs`.
    #[must_use]
    pub fn with_file_system(fs: Arc<dyn LogFileSystem>) -> Self {
        Self {
            sink: ArcSwap::from_pointee(Sink::Discard),
            config: ArcSwap::from_pointee(LogConfig::default()),
            fs,
        }
    }

    /// The process-wide logger.
    pub fn global() -> &'static Self {
        &GLOBAL_LOGGER
    }

    /// Install a new configuration and its destination.
    ///
    /// The candidate is normalized first. An empty `log_path` switches to the
    /// discard sink without touching the filesystem. Otherwise the path is
    /// resolved, its parent directory created and the file opened; only then is
    /// the new sink swapped in and the configuration published.
    ///
    /// On error the previous sink and configuration stay active.
    pub fn set_config(&self, candidate: LogConfig) -> Result<(), ConfigError> {
        self.apply(candidate).inspect_err(|err| {
            warn!(error = %err, "Rejected log configuration");
        })
    }

    fn apply(&self, candidate: LogConfig) -> Result<(), ConfigError> {
        let config = candidate.normalized()?;

        let sink = if config.is_discard() {
            debug!("Log output disabled");
            Sink::Discard
        } else {
            self.open_sink(&config)?
        };

        self.replace_sink(sink);
        self.config.store(Arc::new(config));
        Ok(())
    }

    fn open_sink(&self, config: &LogConfig) -> Result<Sink, ConfigError> {
        let path = resolve_log_path(&config.log_path, config.path_mode)?;

        if let Some(dir) = parent_to_create(&path) {
            self.fs
                .create_dir_all(dir)
                .map_err(|source| ConfigError::CreateDir {
                    path: dir.to_path_buf(),
                    source,
                })?;
        }

        let file = self
            .fs
            .open_log_file(&path, config.append)
            .map_err(|source| ConfigError::OpenFile {
                path: path.clone(),
                source,
            })?;

        info!(path = %path.display(), append = config.append, "Log file installed");
        Ok(Sink::File { path, file })
    }

    fn replace_sink(&self, sink: Sink) {
        // The old sink closes here unless a writer still holds it.
        drop(self.sink.swap(Arc::new(sink)));
    }

    /// A copy of the current configuration snapshot.
    #[must_use]
    pub fn config(&self) -> LogConfig {
        LogConfig::clone(&self.config.load())
    }

    /// The current configuration snapshot without copying it.
    #[must_use]
    pub fn config_snapshot(&self) -> Arc<LogConfig> {
        self.config.load_full()
    }

    /// Path of the active file sink, or `None` while discarding.
    #[must_use]
    pub fn sink_path(&self) -> Option<PathBuf> {
        self.sink.load().path().map(Path::to_path_buf)
    }

    /// Write `err` to the current sink and hand it back.
    ///
    /// A [`LogErr`] is rendered with [`LogErr::log_string_in`]; any other error
    /// with its `Display` output. See [`Logger::log_dyn`] for boxed errors.
    pub fn log<E: Error + 'static>(&self, err: E) -> E {
        self.log_dyn(&err);
        err
    }

    /// Like [`Logger::log`], but `None` is passed through without writing.
    pub fn log_opt<E: Error + 'static>(&self, err: Option<E>) -> Option<E> {
        if let Some(err) = &err {
            self.log_dyn(err);
        }
        err
    }

    /// Log the error arm of `result` and pass the result through.
    pub fn log_result<T, E: Error + 'static>(&self, result: Result<T, E>) -> Result<T, E> {
        if let Err(err) = &result {
            self.log_dyn(err);
        }
        result
    }

    /// Write a borrowed, type-erased error.
    ///
    /// This is the entry point for `Box<dyn Error + Send + Sync>` values, which
    /// do not implement `Error` themselves: call `logger.log_dyn(&*boxed)`.
    /// A `LogErr` is recognised directly or behind a `Box` or `Arc`.
    pub fn log_dyn(&self, err: &(dyn Error + 'static)) {
        let payload = match classified(err) {
            Some(log_err) => log_err.log_string_with(&self.config.load()),
            None => err.to_string(),
        };
        self.write_payload(payload);
    }

    /// Append a newline and write the line in one call. Failures are dropped.
    pub(crate) fn write_payload(&self, mut payload: String) {
        payload.push('\n');
        let sink = self.sink.load_full();
        sink.write_line(payload.as_bytes());
    }
}

/// Find a `LogErr` behind `err`, looking through one `Box` or `Arc`.
fn classified<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a LogErr> {
    err.downcast_ref::<LogErr>()
        .or_else(|| err.downcast_ref::<Box<LogErr>>().map(|boxed| &**boxed))
        .or_else(|| err.downcast_ref::<Arc<LogErr>>().map(|shared| &**shared))
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("sink", &*self.sink.load())
            .field("config", &*self.config.load())
            .finish_non_exhaustive()
    }
}
