//! Readers for the ASCII and binary scorer formats
//!
//! Both formats go through the same three steps:
//!
//! - parse the header into a [BinnedHeader]
//! - load one flat column of values per statistic
//! - reshape every column into the binning, last axis fastest
//!
//! The only real difference is where the header lives and how values are laid
//! out on disk.

mod ascii;
mod binary;

// standard library
use std::collections::HashMap;
use std::ffi::OsStr;
use std::path::Path;

// crate modules
use crate::element::BinnedElement;
use crate::error::{Error, Result};
use crate::header::BinnedHeader;
use crate::result::BinnedResult;

// topas modules
use topas_utils::f;

// external crates
use log::debug;
use ndarray::{ArrayD, IxDyn};

/// Storage style of a binned result, decided by the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Storage {
    /// `.csv` text with a `#` comment header
    Ascii,
    /// `.bin` raw values with a `.binheader` companion
    Binary,
}

impl Storage {
    /// Infer the storage style from the extension of `path`
    ///
    /// Extensions are matched exactly, as TOPAS always writes them lowercase.
    ///
    /// ```rust
    /// # use topas_binned::Storage;
    /// assert_eq!(Storage::from_path("Dose.csv").unwrap(), Storage::Ascii);
    /// assert_eq!(Storage::from_path("Dose.bin").unwrap(), Storage::Binary);
    /// assert!(Storage::from_path("Dose.root").is_err());
    /// assert!(Storage::from_path("Dose.CSV").is_err());
    /// ```
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match path.extension().and_then(OsStr::to_str) {
            Some("csv") => Ok(Self::Ascii),
            Some("bin") => Ok(Self::Binary),
            other => Err(Error::UnrecognisedFormat {
                path: path.to_path_buf(),
                reason: f!("expected a .csv or .bin extension, found {other:?}"),
            }),
        }
    }
}

/// Read a binned scorer result as double precision values
///
/// Returns a [BinnedResult] with one array per statistic. The storage style is
/// chosen from the extension of `path`.
///
/// - `path` - Path to the `.csv` or `.bin` file, can be [&str], [String], [Path], etc...
///
/// Example
/// ```rust, no_run
/// # use topas_binned::{read_binned, BinnedResult};
/// // Binary results find their header in "Dose.binheader" automatically
/// let result: BinnedResult = read_binned("path/to/Dose.bin").unwrap();
/// println!("{result}");
/// ```
pub fn read_binned<P: AsRef<Path>>(path: P) -> Result<BinnedResult<f64>> {
    read_binned_as::<f64, P>(path)
}

/// Read a binned scorer result with a chosen element type
///
/// ASCII values are parsed directly into `T`. Binary files always store
/// `f64`, which is converted to `T` as it is loaded.
///
/// Example
/// ```rust, no_run
/// # use topas_binned::{read_binned_as, BinnedResult};
/// let result: BinnedResult<f32> = read_binned_as("path/to/Dose.csv").unwrap();
/// ```
pub fn read_binned_as<T: BinnedElement, P: AsRef<Path>>(path: P) -> Result<BinnedResult<T>> {
    let path = path.as_ref();
    debug!("Reading binned result {path:?}");

    let (header, columns) = match Storage::from_path(path)? {
        Storage::Ascii => ascii::read(path)?,
        Storage::Binary => binary::read(path)?,
    };

    let data = reshape(path, &header, columns)?;
    Ok(BinnedResult::new(path.to_path_buf(), header, data))
}

/// Read only the header of a binned scorer result
///
/// Nothing is read from the data of binary results, so this is a cheap way to
/// inspect the binning and statistics.
pub fn read_binned_header<P: AsRef<Path>>(path: P) -> Result<BinnedHeader> {
    let path = path.as_ref();
    match Storage::from_path(path)? {
        Storage::Ascii => ascii::read_header(path),
        Storage::Binary => binary::read_header(path),
    }
}

/// Attach the file path to a header parsing failure
pub(crate) fn parse_header<S: AsRef<str>>(lines: &[S], path: &Path) -> Result<BinnedHeader> {
    BinnedHeader::parse(lines).map_err(|reason| Error::MalformedHeader {
        path: path.to_path_buf(),
        reason,
    })
}

/// Shape every flat statistic column into the binning of the header
fn reshape<T>(
    path: &Path,
    header: &BinnedHeader,
    columns: Vec<Vec<T>>,
) -> Result<HashMap<String, ArrayD<T>>> {
    let shape = header.shape();

    header
        .statistics
        .iter()
        .cloned()
        .zip(columns)
        .map(|(statistic, values)| {
            let found = values.len();
            let array = ArrayD::from_shape_vec(IxDyn(&shape), values).map_err(|_| {
                Error::ShapeMismatch {
                    path: path.to_path_buf(),
                    context: "bins",
                    expected: header.n_bins(),
                    found,
                }
            })?;
            Ok((statistic, array))
        })
        .collect()
}
