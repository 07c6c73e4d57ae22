//! Binary `.bin` scorer results
//!
//! The data file is nothing but native-endian `f64` values. The statistics of
//! each bin are stored together, so for statistics `[Sum, Mean]` the layout is
//!
//! ```text
//! <bin 0 Sum> <bin 0 Mean> <bin 1 Sum> <bin 1 Mean> ... and so on
//! ```
//!
//! The header is the same text as the ASCII header, without the `#` markers,
//! in a file named by appending `header` to the data path.

// standard library
use std::path::Path;

// crate modules
use crate::element::BinnedElement;
use crate::error::{Error, Result};
use crate::header::BinnedHeader;
use crate::reader::parse_header;

// topas modules
use topas_utils::{read_bytes, read_lines, PathExt};

// external crates
use log::debug;

/// Width of every stored value
const VALUE_SIZE: usize = std::mem::size_of::<f64>();

/// Read the companion header and one column of values per statistic
pub(super) fn read<T: BinnedElement>(path: &Path) -> Result<(BinnedHeader, Vec<Vec<T>>)> {
    let header = read_header(path)?;
    let bytes = read_bytes(path)?;
    let columns = split_statistics(&bytes, &header, path)?;
    Ok((header, columns))
}

/// Read only the companion header file
pub(super) fn read_header(path: &Path) -> Result<BinnedHeader> {
    let header_path = path.with_suffix("header");
    debug!("Reading binned header {header_path:?}");
    let lines = read_lines(&header_path)?;
    parse_header(&lines, &header_path)
}

/// Deal the flat values out to their statistics
///
/// Value `k` belongs to statistic `k % n_statistics`.
fn split_statistics<T: BinnedElement>(
    bytes: &[u8],
    header: &BinnedHeader,
    path: &Path,
) -> Result<Vec<Vec<T>>> {
    let n_statistics = header.n_statistics();
    let expected = n_statistics * header.n_bins() * VALUE_SIZE;

    if bytes.len() != expected {
        return Err(Error::ShapeMismatch {
            path: path.to_path_buf(),
            context: "bytes",
            expected,
            found: bytes.len(),
        });
    }

    let mut columns: Vec<Vec<T>> = (0..n_statistics)
        .map(|_| Vec::with_capacity(header.n_bins()))
        .collect();

    let mut buffer = [0u8; VALUE_SIZE];
    for (k, chunk) in bytes.chunks_exact(VALUE_SIZE).enumerate() {
        buffer.copy_from_slice(chunk);
        columns[k % n_statistics].push(T::from_f64(f64::from_ne_bytes(buffer)));
    }

    debug!("Read {} values for {n_statistics} statistics", bytes.len() / VALUE_SIZE);
    Ok(columns)
}
