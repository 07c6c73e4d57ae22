// crate modules
use crate::column::{ColumnSpec, ElementType};
use crate::parsers::{
    ascii_column, binary_column, is_ascii_column, is_binary_column, BinaryColumn,
};

// topas modules
use topas_utils::f;

// external crates
use log::{debug, trace, warn};
use serde::Serialize;

/// Line that opens the column block of an ASCII header
const ASCII_MARKER: &str = "Columns of data are as follows:";

/// Line that opens the column block of a binary header
const BINARY_MARKER: &str = "Byte order of each record is as follows:";

/// Old style binary columns that hold integers rather than floats
const INTEGER_COLUMNS: [&str; 9] = [
    "Particle Type (in PDG Format)",
    "Run ID",
    "Event ID",
    "Track ID",
    "Parent ID",
    "Seed Part 1",
    "Seed Part 2",
    "Seed Part 3",
    "Seed Part 4",
];

/// Fixed record layout of limited phase spaces
const LIMITED_COLUMNS: [(&str, ElementType); 8] = [
    ("Particle Type (sign from z direction)", ElementType::Int8),
    ("Energy (MeV) (-ve if new history)", ElementType::Float32),
    ("Position X (cm)", ElementType::Float32),
    ("Position Y (cm)", ElementType::Float32),
    ("Position Z (cm)", ElementType::Float32),
    ("Direction Cosine X", ElementType::Float32),
    ("Direction Cosine Y", ElementType::Float32),
    ("Weight", ElementType::Float32),
];

/// Phase space file dialects
///
/// Each dialect has its own header grammar and data layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Dialect {
    /// Whitespace separated text rows
    Ascii,
    /// Fixed width binary records described by the header
    Binary,
    /// Fixed width binary records with a fixed 8 column layout
    Limited,
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            Self::Ascii => "ASCII",
            Self::Binary => "Binary",
            Self::Limited => "Limited",
        };
        write!(f, "{s}")
    }
}

/// Decide the dialect from the first line of a header
///
/// ```rust
/// # use topas_ntuple::{sniff_dialect, Dialect};
/// assert_eq!(sniff_dialect("TOPAS ASCII Phase Space"), Some(Dialect::Ascii));
/// assert_eq!(sniff_dialect("TOPAS Binary Phase Space"), Some(Dialect::Binary));
/// assert_eq!(sniff_dialect("$TITLE:"), Some(Dialect::Limited));
/// assert_eq!(sniff_dialect("IAEA Phase Space"), None);
/// ```
pub fn sniff_dialect(first_line: &str) -> Option<Dialect> {
    if first_line.contains("TOPAS ASCII Phase Space") {
        Some(Dialect::Ascii)
    } else if first_line.contains("TOPAS Binary Phase Space") {
        Some(Dialect::Binary)
    } else if first_line.contains("$TITLE:") {
        Some(Dialect::Limited)
    } else {
        None
    }
}

/// Dialect and column layout of a phase space
///
/// For example, the column block of a binary header
///
/// ```text
/// Byte order of each record is as follows:
/// f4: Position X (cm)
/// f4: Energy (MeV)
/// i4: Particle Type (in PDG Format)
/// b1: Flag to tell if Third Direction Cosine is Negative (1 means true)
/// ```
///
/// describes 13 byte records of four columns, in that order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NtupleHeader {
    /// Dialect announced by the first header line
    pub dialect: Dialect,
    /// Columns in the order they are stored
    pub columns: Vec<ColumnSpec>,
}

impl NtupleHeader {
    /// Parse the column layout for an already sniffed dialect
    ///
    /// On failure the reason is returned for the caller to attach to the
    /// offending file.
    pub(crate) fn parse<S: AsRef<str>>(dialect: Dialect, lines: &[S]) -> Result<Self, String> {
        let columns = match dialect {
            Dialect::Ascii => read_block(lines, ASCII_MARKER, is_ascii_column, ascii_spec)?,
            Dialect::Binary => read_block(lines, BINARY_MARKER, is_binary_column, binary_spec)?,
            Dialect::Limited => LIMITED_COLUMNS
                .iter()
                .map(|(name, element_type)| ColumnSpec::new(name, *element_type))
                .collect(),
        };

        debug!("Dialect     = {dialect}");
        debug!("Columns     = {}", columns.len());

        if columns.is_empty() {
            return Err("no column descriptions found".to_string());
        }

        Ok(Self { dialect, columns })
    }

    /// Bytes per record, meaningful for the binary dialects
    pub fn record_size(&self) -> usize {
        self.columns.iter().map(|c| c.element_type.size()).sum()
    }

    /// Column names in stored order
    pub fn names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Number of columns in each record
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }
}

/// Progress through the column block of a header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockState {
    Idle,
    ReadingBlock,
    Done,
}

/// Collect the column block following `marker`
///
/// The first line that does not describe a column ends the block, anything
/// after that is ignored.
fn read_block<S, F>(
    lines: &[S],
    marker: &str,
    is_column: fn(&str) -> bool,
    spec: F,
) -> Result<Vec<ColumnSpec>, String>
where
    S: AsRef<str>,
    F: Fn(&str) -> Option<Result<ColumnSpec, String>>,
{
    let mut state = BlockState::Idle;
    let mut columns = Vec::new();

    for line in lines.iter().map(AsRef::as_ref) {
        state = match state {
            BlockState::Idle if line.contains(marker) => {
                trace!("Column block starts after {line:?}");
                BlockState::ReadingBlock
            }
            BlockState::Idle => BlockState::Idle,
            BlockState::ReadingBlock => match spec(line) {
                Some(column) => {
                    let column = column?;
                    trace!("Column {} = {column:?}", columns.len());
                    columns.push(column);
                    BlockState::ReadingBlock
                }
                None => {
                    trace!("Column block ends at {line:?}");
                    BlockState::Done
                }
            },
            BlockState::Done => {
                if is_column(line) {
                    warn!("Ignoring column-like line after the column block: {line:?}");
                }
                BlockState::Done
            }
        };
    }

    if state == BlockState::Idle {
        return Err(f!("missing {marker:?} line"));
    }

    Ok(columns)
}

/// ASCII values are always read as double precision
fn ascii_spec(line: &str) -> Option<Result<ColumnSpec, String>> {
    let (_, (_, name)) = ascii_column(line).ok()?;
    Some(Ok(ColumnSpec::new(name, ElementType::Float64)))
}

fn binary_spec(line: &str) -> Option<Result<ColumnSpec, String>> {
    let (_, column) = binary_column(line).ok()?;
    Some(binary_element(column))
}

/// Work out the element type of a binary column
///
/// Old style lines only give a byte range, so the type is inferred: single
/// bytes are flags, a few well known names are integers, the rest are floats.
fn binary_element(column: BinaryColumn) -> Result<ColumnSpec, String> {
    let (kind, width, name) = match column {
        BinaryColumn::New { kind, width, name } => (kind, width, name),
        BinaryColumn::Old { start, end, name } => {
            if end < start {
                return Err(f!("byte range {start}-{end} of {name:?} is reversed"));
            }
            let width = end - start + 1;
            let kind = if width == 1 {
                'b'
            } else if INTEGER_COLUMNS.contains(&name) {
                'i'
            } else {
                'f'
            };
            (kind, width, name)
        }
    };

    ElementType::from_code(kind, width)
        .map(|element_type| ColumnSpec::new(name, element_type))
        .ok_or_else(|| f!("unsupported type {kind}{width} for column {name:?}"))
}
