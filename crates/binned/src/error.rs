//! Result and Error types for the binned module

use std::path::PathBuf;

/// Type alias for `Result<T, binned::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for `topas-binned`
///
/// Every variant names the file that caused it.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Unknown storage format, i.e. not a `.csv` or `.bin` file
    #[error("unrecognised format for {path:?}: {reason}")]
    UnrecognisedFormat { path: PathBuf, reason: String },

    /// A required part of the header could not be found or is invalid
    #[error("malformed header in {path:?}: {reason}")]
    MalformedHeader { path: PathBuf, reason: String },

    /// Data inconsistent with the binning and statistics in the header
    #[error("inconsistent number of {context} in {path:?} (expected {expected}, found {found})")]
    ShapeMismatch {
        path: PathBuf,
        context: &'static str,
        expected: usize,
        found: usize,
    },

    /// A data value that could not be parsed
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
