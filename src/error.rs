//! Error types for paramlimit.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while selecting or analyzing files.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("{}:{line}:{column}: syntax error", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
    },
    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A malformed exclude glob. Only ever logged; such a pattern matches nothing.
    #[error("invalid exclude pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
    #[error("parser setup failed: {0}")]
    Language(#[from] tree_sitter::LanguageError),
    #[error("invalid tree-sitter query: {0}")]
    Query(#[from] tree_sitter::QueryError),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
