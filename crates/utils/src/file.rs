//! Scoped file access that keeps track of the offending path
//!
//! Every function opens the file, reads everything it needs, and drops the
//! handle before returning.

// standard library
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

// crate modules
use crate::error::{Error, Result};

// external crates
use log::trace;

/// Read the full text content of a file
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    trace!("Reading text from {path:?}");
    std::fs::read_to_string(path).map_err(|e| io_error(path, e))
}

/// Read every line of a text file into a vector
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    trace!("Reading lines from {path:?}");
    let reader = init_reader(path)?;
    reader
        .lines()
        .collect::<std::io::Result<Vec<String>>>()
        .map_err(|e| io_error(path, e))
}

/// Read only the first line of a text file
///
/// An empty file gives an empty string. Line endings are removed.
pub fn read_first_line<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let mut reader = init_reader(path)?;
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .map_err(|e| io_error(path, e))?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Read the raw bytes of a file into one contiguous buffer
pub fn read_bytes<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    trace!("Reading bytes from {path:?}");
    let mut reader = init_reader(path)?;
    let mut buffer = Vec::new();
    reader
        .read_to_end(&mut buffer)
        .map_err(|e| io_error(path, e))?;
    Ok(buffer)
}

/// Initialise a reader from anything that can be turned into a path
fn init_reader(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| io_error(path, e))?;
    Ok(BufReader::new(file))
}

fn io_error(path: &Path, source: std::io::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        source,
    }
}
