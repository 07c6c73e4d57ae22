//! Module for reading TOPAS phase space ntuples
//!
//! Phase space scorers record one row per particle crossing a surface. The
//! data are written to a `.phsp` file next to a `.header` text file that
//! describes the columns.
//!
//! - [NtupleTable] - Primary data structure containing the decoded columns
//! - [NtupleHeader] - The dialect and column layout of a phase space
//! - [ColumnData] - Typed values of a single column
//!
//! The first line of the header decides the [Dialect], which in turn decides
//! the grammar of the column descriptions and how rows are stored.
//!
//! # Quickstart example
//!
//! ```rust, no_run
//! # use topas_ntuple::{read_ntuple, ColumnData};
//! // Read all file data into the core data structure
//! let table = read_ntuple("/path/to/phasespace.phsp").unwrap();
//!
//! // Columns keep the exact names of the header
//! if let Some(ColumnData::Float32(energy)) = table.column("Energy (MeV)") {
//!     println!("{} particles, first at {} MeV", table.len(), energy[0]);
//! }
//! ```
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod column;
mod error;
mod header;
mod parsers;
mod reader;
mod table;

// Inline anything important for a nice public API
#[doc(inline)]
pub use column::{ColumnData, ColumnSpec, ElementType};

#[doc(inline)]
pub use header::{sniff_dialect, Dialect, NtupleHeader};

#[doc(inline)]
pub use reader::{read_ntuple, read_ntuple_header};

#[doc(inline)]
pub use table::{Column, NtupleTable};

#[doc(inline)]
pub use error::{Error, Result};
