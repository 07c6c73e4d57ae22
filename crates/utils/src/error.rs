//! Result and Error types for the utils module

use std::path::PathBuf;

/// Type alias for `Result<T, utils::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug)]
/// The error type for `topas_utils`
pub enum Error {
    /// File could not be opened or read
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Error {
    /// Path of the file that caused the error
    pub fn path(&self) -> &std::path::Path {
        match self {
            Error::Io { path, .. } => path,
        }
    }
}

// error boilerplate
impl core::fmt::Display for Error {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
        match self {
            Error::Io { path, source } => write!(fmt, "failed to read {path:?}: {source}"),
        }
    }
}

// implement standard error trait to use with ? operator
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
        }
    }
}
