//! Severity classes attached to every [`LogErr`](crate::LogErr).

use std::fmt;

/// Severity class of a classified error.
///
/// Only the textual name is meaningful; no ordering is implied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Class {
    #[default]
    Unknown = 0,
    Info = 1,
    Warning = 2,
    Error = 3,
    Critical = 4,
}

impl Class {
    /// Stable lowercase name used in rendered error strings.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Critical => "critical",
        }
    }
}

/// Raw discriminants outside `0..=4` collapse to [`Class::Unknown`].
impl From<u8> for Class {
    fn from(raw: u8) -> Self {
        match raw {
            1 => Self::Info,
            2 => Self::Warning,
            3 => Self::Error,
            4 => Self::Critical,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
