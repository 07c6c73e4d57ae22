//! Result and Error types for the ntuple module

use std::path::PathBuf;

/// Type alias for `Result<T, ntuple::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for `topas-ntuple`
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The header does not announce any known phase space dialect
    #[error("unrecognised phase space format for {path:?}: {reason}")]
    UnrecognisedFormat { path: PathBuf, reason: String },

    /// Column descriptions missing or unusable
    #[error("malformed header in {path:?}: {reason}")]
    MalformedHeader { path: PathBuf, reason: String },

    /// Data inconsistent with the column layout in the header
    #[error("inconsistent number of {context} in {path:?} (expected {expected}, found {found})")]
    ShapeMismatch {
        path: PathBuf,
        context: &'static str,
        expected: usize,
        found: usize,
    },

    /// An ASCII value that could not be parsed
    #[error("malformed data in {path:?} on line {line}: {reason}")]
    MalformedData {
        path: PathBuf,
        line: u64,
        reason: String,
    },

    /// Underlying file I/O error
    #[error("failed to read {path:?}")]
    IOFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<topas_utils::Error> for Error {
    fn from(err: topas_utils::Error) -> Self {
        match err {
            topas_utils::Error::Io { path, source } => Self::IOFailure { path, source },
        }
    }
}
