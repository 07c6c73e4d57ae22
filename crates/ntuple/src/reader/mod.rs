//! Readers for the ASCII and binary phase space formats
//!
//! The header always sits next to the data with a `.header` extension, and
//! its first line announces the [Dialect]. Binary and limited phase spaces
//! share one record decoder, only the column layout differs.

mod ascii;
mod binary;

// standard library
use std::path::{Path, PathBuf};

// crate modules
use crate::error::{Error, Result};
use crate::header::{sniff_dialect, Dialect, NtupleHeader};
use crate::table::NtupleTable;

// topas modules
use topas_utils::{f, read_first_line, read_lines};

// external crates
use log::debug;

/// Read a phase space into a table of typed columns
///
/// Any extension on `path` is replaced, so `phasespace`, `phasespace.phsp`,
/// and `phasespace.header` all read the same pair of files.
///
/// - `path` - Path to the phase space, can be [&str], [String], [Path], etc...
///
/// Example
/// ```rust, no_run
/// # use topas_ntuple::read_ntuple;
/// let table = read_ntuple("path/to/phasespace.phsp").unwrap();
/// println!("{table}");
/// ```
pub fn read_ntuple<P: AsRef<Path>>(path: P) -> Result<NtupleTable> {
    let (data_path, header_path) = companion_paths(path.as_ref());
    let header = read_header_file(&header_path)?;
    debug!("Reading {} phase space {data_path:?}", header.dialect);

    let (data, n_rows) = match header.dialect {
        Dialect::Ascii => ascii::read(&data_path, &header)?,
        Dialect::Binary | Dialect::Limited => binary::read(&data_path, &header)?,
    };

    debug!("Read {n_rows} rows");
    Ok(NtupleTable::new(data_path, header, data, n_rows))
}

/// Read only the dialect and column layout of a phase space
///
/// The `.phsp` data file is never opened.
pub fn read_ntuple_header<P: AsRef<Path>>(path: P) -> Result<NtupleHeader> {
    let (_, header_path) = companion_paths(path.as_ref());
    read_header_file(&header_path)
}

/// Data and header paths for a phase space
fn companion_paths(path: &Path) -> (PathBuf, PathBuf) {
    (path.with_extension("phsp"), path.with_extension("header"))
}

fn read_header_file(path: &Path) -> Result<NtupleHeader> {
    let first_line = read_first_line(path)?;
    let dialect = sniff_dialect(&first_line).ok_or_else(|| Error::UnrecognisedFormat {
        path: path.to_path_buf(),
        reason: f!("{first_line:?} does not name a known phase space dialect"),
    })?;

    // the limited layout is fixed, nothing else in the header matters
    let lines = match dialect {
        Dialect::Limited => Vec::new(),
        Dialect::Ascii | Dialect::Binary => read_lines(path)?,
    };

    NtupleHeader::parse(dialect, &lines).map_err(|reason| Error::MalformedHeader {
        path: path.to_path_buf(),
        reason,
    })
}
