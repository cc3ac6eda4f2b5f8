//! Port definitions for the filesystem the log facility writes to.
//!
//! `Logger` only touches the filesystem through [`LogFileSystem`], so tests can
//! substitute a recording double and hosts can redirect output.

use std::fs::{DirBuilder, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// An open log destination.
///
/// Writes take `&self` so a destination can be shared between threads
/// without a lock.
pub trait LogFile: Send + Sync {
    /// Write one complete, newline-terminated line.
    fn write_line(&self, line: &[u8]) -> io::Result<()>;
}

impl LogFile for File {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        let mut handle: &Self = self;
        handle.write_all(line)
    }
}

/// Filesystem operations needed to install a file-backed sink.
#[cfg_attr(test, mockall::automock)]
pub trait LogFileSystem: Send + Sync {
    /// Create `dir` and any missing ancestors.
    fn create_dir_all(&self, dir: &Path) -> io::Result<()>;

    /// Open `path` for writing, creating it if needed.
    ///
    /// `append` selects append semantics; otherwise existing content is truncated.
    fn open_log_file(&self, path: &Path, append: bool) -> io::Result<Box<dyn LogFile>>;
}

/// The real filesystem.
///
/// Directories are created with mode `0o755` and files with `0o644` on unix.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl LogFileSystem for StdFileSystem {
    fn create_dir_all(&self, dir: &Path) -> io::Result<()> {
        if dir.is_dir() {
            return Ok(());
        }
        let mut builder = DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(0o755);
        }
        builder.create(dir)
    }

    fn open_log_file(&self, path: &Path, append: bool) -> io::Result<Box<dyn LogFile>> {
        let mut options = OpenOptions::new();
        options.create(true);
        if append {
            options.append(true);
        } else {
            options.write(true).truncate(true);
        }
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o644);
        }
        let file = options.open(path)?;
        Ok(Box::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn creates_nested_directories() {
        let temp = tempdir().unwrap();
        let nested = temp.path().join("a").join("b").join("c");

        StdFileSystem.create_dir_all(&nested).unwrap();
        assert!(nested.is_dir());

        // Existing directories are fine.
        StdFileSystem.create_dir_all(&nested).unwrap();
    }

    #[test]
    fn truncate_and_append_modes() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("app.log");
        fs::write(&path, "old\n").unwrap();

        let file = StdFileSystem.open_log_file(&path, true).unwrap();
        file.write_line(b"appended\n").unwrap();
        drop(file);
        assert_eq!(fs::read_to_string(&path).unwrap(), "old\nappended\n");

        let file = StdFileSystem.open_log_file(&path, false).unwrap();
        file.write_line(b"fresh\n").unwrap();
        drop(file);
        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh\n");
    }

    #[cfg(unix)]
    #[test]
    fn new_files_get_log_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempdir().unwrap();
        let path = temp.path().join("perm.log");
        drop(StdFileSystem.open_log_file(&path, true).unwrap());

        // The process umask can only clear bits.
        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode & !0o644, 0);
        assert_ne!(mode & 0o600, 0);
    }
}
