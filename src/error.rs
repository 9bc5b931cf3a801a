use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Every failure surfaced by the library.
///
/// Wrapped errors are reachable through `source()`; render with `{:#}` (anyhow)
/// or walk the chain to see them.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error{}", display_path(.path))]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: io::Error,
    },

    #[error("arithmetic error: {0}")]
    Arithmetic(String),

    #[error("invalid JSON text")]
    Parse(#[source] serde_json::Error),

    #[error("value cannot be encoded as JSON")]
    Serialize(#[source] serde_json::Error),

    #[error("usage error: {0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io_at(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: Some(path.into()),
            source,
        }
    }

    pub(crate) fn arithmetic(message: impl Into<String>) -> Self {
        Error::Arithmetic(message.into())
    }
}

impl From<io::Error> for Error {
    fn from(source: io::Error) -> Self {
        Error::Io { path: None, source }
    }
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!(" at {}", p.display()),
        None => String::new(),
    }
}
