// standard library
use std::path::PathBuf;

// crate modules
use crate::column::{ColumnData, ColumnSpec};
use crate::header::{Dialect, NtupleHeader};

// topas modules
use topas_utils::f;

// external crates
use ndarray::Array1;
use serde::Serialize;

/// A single named column and its values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    /// Name and element type from the header
    pub spec: ColumnSpec,
    /// One value per row
    pub data: ColumnData,
}

/// Decoded phase space, one typed array per column
///
/// Columns keep the names and order of the header exactly, and every column
/// holds [n_rows](NtupleTable::n_rows) values in file order.
///
/// ```rust, no_run
/// # use topas_ntuple::read_ntuple;
/// let table = read_ntuple("path/to/phasespace.phsp").unwrap();
/// let x = table.column_as_f64("Position X (cm)").unwrap();
/// println!("mean x = {}", x.mean().unwrap_or_default());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NtupleTable {
    /// Path of the `.phsp` data file
    pub path: PathBuf,
    /// Dialect the data was decoded with
    pub dialect: Dialect,
    /// Columns in stored order
    pub columns: Vec<Column>,
    /// Number of particle records
    pub n_rows: usize,
}

impl NtupleTable {
    pub(crate) fn new(path: PathBuf, header: NtupleHeader, data: Vec<ColumnData>, n_rows: usize) -> Self {
        let columns = header
            .columns
            .into_iter()
            .zip(data)
            .map(|(spec, data)| Column { spec, data })
            .collect();

        Self {
            path,
            dialect: header.dialect,
            columns,
            n_rows,
        }
    }

    /// Values of the first column called `name`
    pub fn column(&self, name: &str) -> Option<&ColumnData> {
        self.columns
            .iter()
            .find(|c| c.spec.name == name)
            .map(|c| &c.data)
    }

    /// Values of a column widened to `f64`, booleans become 0 or 1
    pub fn column_as_f64(&self, name: &str) -> Option<Array1<f64>> {
        self.column(name).map(ColumnData::to_f64)
    }

    /// Column names in stored order
    pub fn names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.spec.name.as_str()).collect()
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.n_rows
    }

    /// Check if there are no rows
    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }

    /// Layout of the table without any of the data
    pub fn header(&self) -> NtupleHeader {
        NtupleHeader {
            dialect: self.dialect,
            columns: self.columns.iter().map(|c| c.spec.clone()).collect(),
        }
    }
}

impl std::fmt::Display for NtupleTable {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut s = "NtupleTable {\n".to_string();
        s += &f!("    path: {}\n", self.path.display());
        s += &f!("    dialect: {}\n", self.dialect);
        s += &f!("    rows: {}\n", self.n_rows);
        for column in &self.columns {
            s += &f!("    {}: {}\n", column.spec.element_type, column.spec.name);
        }
        s += "}";

        write!(f, "{}", s)
    }
}
