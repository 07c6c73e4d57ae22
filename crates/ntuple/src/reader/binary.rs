//! Binary and limited `.phsp` files
//!
//! Records are stored back to back with no padding. Every field is written in
//! the native byte order of the machine that ran the simulation, in the order
//! the header lists the columns.

// standard library
use std::path::Path;

// crate modules
use crate::column::{ColumnBuffer, ColumnData};
use crate::error::{Error, Result};
use crate::header::NtupleHeader;

// topas modules
use topas_utils::read_bytes;

// external crates
use log::debug;

/// Split every fixed width record into its typed fields
pub(super) fn read(path: &Path, header: &NtupleHeader) -> Result<(Vec<ColumnData>, usize)> {
    let bytes = read_bytes(path)?;
    let record_size = header.record_size();
    let n_rows = bytes.len() / record_size;

    debug!("Record size = {record_size} bytes");

    if bytes.len() % record_size != 0 {
        return Err(Error::ShapeMismatch {
            path: path.to_path_buf(),
            context: "bytes",
            expected: n_rows * record_size,
            found: bytes.len(),
        });
    }

    let sizes = header
        .columns
        .iter()
        .map(|c| c.element_type.size())
        .collect::<Vec<usize>>();

    let mut buffers = header
        .columns
        .iter()
        .map(|c| ColumnBuffer::with_capacity(c.element_type, n_rows))
        .collect::<Vec<ColumnBuffer>>();

    for record in bytes.chunks_exact(record_size) {
        let mut offset = 0;
        for (buffer, size) in buffers.iter_mut().zip(&sizes) {
            buffer.push_bytes(&record[offset..offset + size]);
            offset += size;
        }
    }

    let data = buffers.into_iter().map(ColumnData::from).collect();
    Ok((data, n_rows))
}
