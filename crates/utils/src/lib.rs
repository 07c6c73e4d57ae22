//! Common utilities shared by the topas result readers
//!
//! These are left public for convenience.
//!
//! Both the binned scorer and phase space readers work on the same style of
//! loosely structured header text, so the low level pattern primitives and the
//! path-aware file access live here.

// Alias for the format! macro
pub use std::format as f;

// Modules
mod error;
mod file;
mod path_ext;
mod string_ext;

pub mod parsers;

// Flatten
pub use error::{Error, Result};
pub use file::{read_bytes, read_first_line, read_lines, read_text};
pub use path_ext::PathExt;
pub use string_ext::StringExt;
