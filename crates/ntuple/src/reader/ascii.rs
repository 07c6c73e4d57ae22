//! ASCII `.phsp` files
//!
//! One particle per line, values separated by whitespace in header column
//! order. Blank lines and `#` comments are skipped.

// standard library
use std::path::Path;

// crate modules
use crate::column::ColumnData;
use crate::error::{Error, Result};
use crate::header::NtupleHeader;

// topas modules
use topas_utils::parsers::vector_of_f64;
use topas_utils::{f, read_text, StringExt};

// external crates
use log::trace;
use ndarray::Array1;

/// Read every row into double precision columns
pub(super) fn read(path: &Path, header: &NtupleHeader) -> Result<(Vec<ColumnData>, usize)> {
    let text = read_text(path)?;
    let n_columns = header.n_columns();
    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); n_columns];

    for (index, line) in text.lines().enumerate() {
        let line_number = index as u64 + 1;
        let line = line.trim();
        if line.is_empty() || line.is_comment() {
            continue;
        }

        let values = parse_row(line).map_err(|reason| Error::MalformedData {
            path: path.to_path_buf(),
            line: line_number,
            reason,
        })?;

        if values.len() != n_columns {
            return Err(Error::ShapeMismatch {
                path: path.to_path_buf(),
                context: "fields",
                expected: n_columns,
                found: values.len(),
            });
        }

        trace!("Row {line_number}: {values:?}");
        for (column, value) in columns.iter_mut().zip(values) {
            column.push(value);
        }
    }

    let n_rows = columns.first().map(Vec::len).unwrap_or_default();
    let data = columns
        .into_iter()
        .map(|values| ColumnData::Float64(Array1::from_vec(values)))
        .collect();

    Ok((data, n_rows))
}

/// Parse a full line of values, rejecting anything left over
fn parse_row(line: &str) -> std::result::Result<Vec<f64>, String> {
    match vector_of_f64(line) {
        Ok(("", values)) => Ok(values),
        Ok((remainder, _)) => Err(f!("{remainder:?} is not a number")),
        Err(_) => Err(f!("{line:?} is not a row of numbers")),
    }
}
