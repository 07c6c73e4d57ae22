// external crates
use ndarray::Array1;
use serde::Serialize;

/// Element type of a phase space column
///
/// Binary headers describe these with a kind letter and a byte width, e.g.
/// `f4` or `i4`. Single byte flags (`b1`) are stored as booleans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ElementType {
    /// One byte flag, non-zero is true
    Bool,
    /// Signed 1 byte integer
    Int8,
    /// Signed 2 byte integer
    Int16,
    /// Signed 4 byte integer
    Int32,
    /// Signed 8 byte integer
    Int64,
    /// 4 byte float
    Float32,
    /// 8 byte float
    Float64,
}

impl ElementType {
    /// Element type for a header type code, `None` if unsupported
    ///
    /// ```rust
    /// # use topas_ntuple::ElementType;
    /// assert_eq!(ElementType::from_code('f', 4), Some(ElementType::Float32));
    /// assert_eq!(ElementType::from_code('b', 1), Some(ElementType::Bool));
    /// assert_eq!(ElementType::from_code('f', 3), None);
    /// ```
    pub fn from_code(kind: char, width: usize) -> Option<Self> {
        match (kind, width) {
            ('b', 1) => Some(Self::Bool),
            ('i', 1) => Some(Self::Int8),
            ('i', 2) => Some(Self::Int16),
            ('i', 4) => Some(Self::Int32),
            ('i', 8) => Some(Self::Int64),
            ('f', 4) => Some(Self::Float32),
            ('f', 8) => Some(Self::Float64),
            _ => None,
        }
    }

    /// Number of bytes used by one value
    pub fn size(&self) -> usize {
        match self {
            Self::Bool | Self::Int8 => 1,
            Self::Int16 => 2,
            Self::Int32 | Self::Float32 => 4,
            Self::Int64 | Self::Float64 => 8,
        }
    }

    /// Header type code, e.g. `f4`
    pub fn code(&self) -> String {
        let kind = match self {
            Self::Bool => 'b',
            Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64 => 'i',
            Self::Float32 | Self::Float64 => 'f',
        };
        format!("{kind}{}", self.size())
    }
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Name and element type of one column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSpec {
    /// Column label exactly as written, e.g. `Position X (cm)`
    pub name: String,
    /// Type of every value in the column
    pub element_type: ElementType,
}

impl ColumnSpec {
    /// Create a new column description
    pub fn new(name: &str, element_type: ElementType) -> Self {
        Self {
            name: name.to_string(),
            element_type,
        }
    }
}

/// Typed values of one column, one per row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ColumnData {
    Bool(Array1<bool>),
    Int8(Array1<i8>),
    Int16(Array1<i16>),
    Int32(Array1<i32>),
    Int64(Array1<i64>),
    Float32(Array1<f32>),
    Float64(Array1<f64>),
}

impl ColumnData {
    /// Number of values in the column
    pub fn len(&self) -> usize {
        match self {
            Self::Bool(a) => a.len(),
            Self::Int8(a) => a.len(),
            Self::Int16(a) => a.len(),
            Self::Int32(a) => a.len(),
            Self::Int64(a) => a.len(),
            Self::Float32(a) => a.len(),
            Self::Float64(a) => a.len(),
        }
    }

    /// Check if the column has no values
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element type of the values
    pub fn element_type(&self) -> ElementType {
        match self {
            Self::Bool(_) => ElementType::Bool,
            Self::Int8(_) => ElementType::Int8,
            Self::Int16(_) => ElementType::Int16,
            Self::Int32(_) => ElementType::Int32,
            Self::Int64(_) => ElementType::Int64,
            Self::Float32(_) => ElementType::Float32,
            Self::Float64(_) => ElementType::Float64,
        }
    }

    /// Copy of the values widened to `f64`, booleans become 0 or 1
    ///
    /// 8 byte integers beyond 2^53 lose precision.
    pub fn to_f64(&self) -> Array1<f64> {
        match self {
            Self::Bool(a) => a.mapv(|v| if v { 1.0 } else { 0.0 }),
            Self::Int8(a) => a.mapv(f64::from),
            Self::Int16(a) => a.mapv(f64::from),
            Self::Int32(a) => a.mapv(f64::from),
            Self::Int64(a) => a.mapv(|v| v as f64),
            Self::Float32(a) => a.mapv(f64::from),
            Self::Float64(a) => a.clone(),
        }
    }
}

/// Growable storage for a column while records are decoded
#[derive(Debug)]
pub(crate) enum ColumnBuffer {
    Bool(Vec<bool>),
    Int8(Vec<i8>),
    Int16(Vec<i16>),
    Int32(Vec<i32>),
    Int64(Vec<i64>),
    Float32(Vec<f32>),
    Float64(Vec<f64>),
}

impl ColumnBuffer {
    pub(crate) fn with_capacity(element_type: ElementType, capacity: usize) -> Self {
        match element_type {
            ElementType::Bool => Self::Bool(Vec::with_capacity(capacity)),
            ElementType::Int8 => Self::Int8(Vec::with_capacity(capacity)),
            ElementType::Int16 => Self::Int16(Vec::with_capacity(capacity)),
            ElementType::Int32 => Self::Int32(Vec::with_capacity(capacity)),
            ElementType::Int64 => Self::Int64(Vec::with_capacity(capacity)),
            ElementType::Float32 => Self::Float32(Vec::with_capacity(capacity)),
            ElementType::Float64 => Self::Float64(Vec::with_capacity(capacity)),
        }
    }

    /// Decode one native-endian field, `bytes` is exactly the element size
    pub(crate) fn push_bytes(&mut self, bytes: &[u8]) {
        match self {
            Self::Bool(v) => v.push(bytes[0] != 0),
            Self::Int8(v) => v.push(i8::from_ne_bytes(take(bytes))),
            Self::Int16(v) => v.push(i16::from_ne_bytes(take(bytes))),
            Self::Int32(v) => v.push(i32::from_ne_bytes(take(bytes))),
            Self::Int64(v) => v.push(i64::from_ne_bytes(take(bytes))),
            Self::Float32(v) => v.push(f32::from_ne_bytes(take(bytes))),
            Self::Float64(v) => v.push(f64::from_ne_bytes(take(bytes))),
        }
    }
}

impl From<ColumnBuffer> for ColumnData {
    fn from(buffer: ColumnBuffer) -> Self {
        match buffer {
            ColumnBuffer::Bool(v) => Self::Bool(Array1::from_vec(v)),
            ColumnBuffer::Int8(v) => Self::Int8(Array1::from_vec(v)),
            ColumnBuffer::Int16(v) => Self::Int16(Array1::from_vec(v)),
            ColumnBuffer::Int32(v) => Self::Int32(Array1::from_vec(v)),
            ColumnBuffer::Int64(v) => Self::Int64(Array1::from_vec(v)),
            ColumnBuffer::Float32(v) => Self::Float32(Array1::from_vec(v)),
            ColumnBuffer::Float64(v) => Self::Float64(Array1::from_vec(v)),
        }
    }
}

/// Copy the leading `N` bytes into a fixed size array
fn take<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut buffer = [0u8; N];
    buffer.copy_from_slice(&bytes[..N]);
    buffer
}
