// Engine error types: fatal errors and the degraded-field marker

use std::path::PathBuf;
use thiserror::Error;

/// Fatal extraction failure; aborts the call that hit it.
#[derive(Error, Debug)]
pub enum ProcfsError {
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },
}

impl ProcfsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ProcfsError::Io {
            path: path.into(),
            source,
        }
    }

    /// True for the data-format class (source opened but its shape was wrong).
    pub fn is_parse(&self) -> bool {
        matches!(self, ProcfsError::Parse { .. })
    }
}

/// A source or field that fell back to its default instead of failing.
///
/// Parser helpers return `Result<T, Defaulted>`. Degraded call sites absorb it;
/// fatal call sites lift it into [`ProcfsError::Parse`] with `?`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaulted {
    pub source: PathBuf,
    pub reason: String,
}

impl Defaulted {
    pub(crate) fn new(source: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for Defaulted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.source.display(), self.reason)
    }
}

impl From<Defaulted> for ProcfsError {
    fn from(d: Defaulted) -> Self {
        ProcfsError::Parse {
            path: d.source,
            reason: d.reason,
        }
    }
}
