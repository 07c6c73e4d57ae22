//! ASCII `.csv` scorer results
//!
//! The header is every `#` line of the file. Data rows are comma separated,
//! starting with one bin index per dimension followed by one value per
//! statistic.
//!
//! ```text
//! # Z in 3 bins of 0.1 cm
//! # DoseToWaterBinned ( Gy ) : Sum   Mean
//! 0, 0, 0, 1.25, 0.125
//! 0, 0, 1, 2.5, 0.25
//! 0, 0, 2, 3.75, 0.375
//! ```

// standard library
use std::path::Path;

// crate modules
use crate::element::BinnedElement;
use crate::error::{Error, Result};
use crate::header::BinnedHeader;
use crate::reader::parse_header;

// topas modules
use topas_utils::{f, read_text, StringExt};

// external crates
use log::debug;

/// Read the header and one column of values per statistic
pub(super) fn read<T: BinnedElement>(path: &Path) -> Result<(BinnedHeader, Vec<Vec<T>>)> {
    let text = read_text(path)?;
    let header = header_from_text(&text, path)?;
    let columns = read_columns(&text, &header, path)?;
    Ok((header, columns))
}

/// Read only the comment header
pub(super) fn read_header(path: &Path) -> Result<BinnedHeader> {
    let text = read_text(path)?;
    header_from_text(&text, path)
}

fn header_from_text(text: &str, path: &Path) -> Result<BinnedHeader> {
    let lines = text
        .lines()
        .filter(|line| line.is_comment())
        .collect::<Vec<&str>>();
    parse_header(&lines, path)
}

/// Split the comma separated rows into statistic columns
///
/// Bin index columns are skipped, everything must line up with the header.
fn read_columns<T: BinnedElement>(
    text: &str,
    header: &BinnedHeader,
    path: &Path,
) -> Result<Vec<Vec<T>>> {
    let n_index = header.n_dimensions();
    let width = n_index + header.n_statistics();

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut columns: Vec<Vec<T>> = (0..header.n_statistics())
        .map(|_| Vec::with_capacity(header.n_bins()))
        .collect();

    for record in reader.records() {
        let record = record.map_err(|e| Error::MalformedData {
            path: path.to_path_buf(),
            line: e.position().map(|p| p.line()).unwrap_or_default(),
            reason: e.to_string(),
        })?;

        // whitespace-only lines survive as a single empty field
        if record.iter().all(str::is_empty) {
            continue;
        }

        if record.len() != width {
            return Err(Error::ShapeMismatch {
                path: path.to_path_buf(),
                context: "columns",
                expected: width,
                found: record.len(),
            });
        }

        let line = record.position().map(|p| p.line()).unwrap_or_default();
        for (column, field) in columns.iter_mut().zip(record.iter().skip(n_index)) {
            let value = field.parse::<T>().map_err(|_| Error::MalformedData {
                path: path.to_path_buf(),
                line,
                reason: f!("{field:?} is not a number"),
            })?;
            column.push(value);
        }
    }

    let found = columns.first().map(Vec::len).unwrap_or_default();
    debug!("Read {found} rows of {width} columns");

    if found != header.n_bins() {
        return Err(Error::ShapeMismatch {
            path: path.to_path_buf(),
            context: "rows",
            expected: header.n_bins(),
            found,
        });
    }

    Ok(columns)
}
