use std::fmt::Debug;
use std::str::FromStr;

/// Element types a [BinnedResult](crate::BinnedResult) can be decoded into
///
/// ASCII values are parsed straight into the chosen type. Binary files always
/// store `f64`, which is converted on load.
pub trait BinnedElement: Copy + Debug + FromStr + 'static {
    /// Convert a stored double precision value
    fn from_f64(value: f64) -> Self;
}

impl BinnedElement for f64 {
    fn from_f64(value: f64) -> Self {
        value
    }
}

impl BinnedElement for f32 {
    fn from_f64(value: f64) -> Self {
        value as f32
    }
}
