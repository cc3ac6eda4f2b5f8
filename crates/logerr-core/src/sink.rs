//! The active write destination.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::ports::LogFile;

/// Where log lines currently go.
///
/// A file sink owns its handle; the file is closed when the `Sink` is dropped.
/// Because writers hold the sink through an `Arc`, a superseded file stays
/// open until the last in-flight write against it has returned.
pub enum Sink {
    /// Absorbs every write.
    Discard,
    /// An open file at a resolved path.
    File { path: PathBuf, file: Box<dyn LogFile> },
}

impl Sink {
    /// Write one line, ignoring failures.
    pub(crate) fn write_line(&self, line: &[u8]) {
        if let Self::File { file, .. } = self {
            let _ = file.write_line(line);
        }
    }

    /// Path of the backing file, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Discard => None,
            Self::File { path, .. } => Some(path),
        }
    }

    #[must_use]
    pub const fn is_discard(&self) -> bool {
        matches!(self, Self::Discard)
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Discard => f.write_str("Discard"),
            Self::File { path, .. } => f.debug_struct("File").field("path", path).finish(),
        }
    }
}

impl Drop for Sink {
    fn drop(&mut self) {
        if let Self::File { path, .. } = self {
            debug!(path = %path.display(), "Closing log file");
        }
    }
}
