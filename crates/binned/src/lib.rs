//! Module for reading TOPAS binned scorer results
//!
//! TOPAS scorers accumulate statistics over a 1-3 dimensional binning of a
//! component and write them out as either ASCII (`.csv`) or binary (`.bin`)
//! files.
//!
//! - [BinnedResult] - Primary data structure containing the decoded file
//! - [BinnedHeader] - The quantity, unit, statistics, and binning of a scorer
//! - [BinnedDimension] - A single binned axis
//!
//! The header text is the same for both storage styles:
//!
//! ```text
//! # Results for scorer Dose
//! # Scored in component: Phantom
//! # X in 1 bin  of 40 cm
//! # Y in 1 bin  of 40 cm
//! # Z in 300 bins of 0.1 cm
//! # DoseToWaterBinned ( Gy ) : Sum   Mean
//! ```
//!
//! Dimensions are always ordered `X, Y, Z, R, Phi, Theta` regardless of the
//! order they appear in the header, and every statistic array is shaped by
//! the bin counts in that order.
//!
//! # Quickstart example
//!
//! ```rust, no_run
//! # use topas_binned::read_binned;
//! // Read all file data into the core data structure
//! let result = read_binned("/path/to/Dose.csv").unwrap();
//!
//! // Find the summed dose in the 3rd Z bin
//! let sum = result.get("Sum").expect("Sum was not scored");
//! println!("{}", sum[[0, 0, 2]]);
//! ```
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod dimension;
mod element;
mod error;
mod header;
mod parsers;
mod reader;
mod result;

// Inline anything important for a nice public API
#[doc(inline)]
pub use dimension::{Axis, BinnedDimension};

#[doc(inline)]
pub use element::BinnedElement;

#[doc(inline)]
pub use header::BinnedHeader;

#[doc(inline)]
pub use reader::{read_binned, read_binned_as, read_binned_header, Storage};

#[doc(inline)]
pub use result::BinnedResult;

#[doc(inline)]
pub use error::{Error, Result};
