//! Resolution of the configured log path into an absolute filesystem path.
//!
//! Resolution performs no filesystem writes. The only environment queries are
//! the working directory and the executable location, each made only when the
//! matching [`PathMode`] is selected.

use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How a logical log path is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum PathMode {
    /// Use the path exactly as given.
    #[default]
    Absolute = 0,
    /// Join onto the process working directory at reconfiguration time.
    WorkingDir = 1,
    /// Join onto the directory containing the running executable.
    Executable = 2,
}

impl TryFrom<u8> for PathMode {
    type Error = ConfigError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::Absolute),
            1 => Ok(Self::WorkingDir),
            2 => Ok(Self::Executable),
            other => Err(ConfigError::UnknownPathMode(other)),
        }
    }
}

/// Turn a logical path and mode into the path that will be opened.
pub fn resolve_log_path(path: &str, mode: PathMode) -> Result<PathBuf, ConfigError> {
    match mode {
        PathMode::Absolute => Ok(PathBuf::from(path)),
        PathMode::WorkingDir => env::current_dir()
            .map(|cwd| cwd.join(path))
            .map_err(ConfigError::CurrentDir),
        PathMode::Executable => {
            let exe = env::current_exe().map_err(ConfigError::Executable)?;
            let dir = exe.parent().unwrap_or_else(|| Path::new(""));
            Ok(dir.join(path))
        }
    }
}

/// Parent directory that must exist before `path` can be opened.
///
/// Returns `None` for bare file names, which live in the current directory.
pub(crate) fn parent_to_create(path: &Path) -> Option<&Path> {
    path.parent()
        .filter(|dir| !dir.as_os_str().is_empty() && *dir != Path::new("."))
}
