// standard library
use std::collections::HashMap;
use std::path::PathBuf;

// crate modules
use crate::dimension::BinnedDimension;
use crate::header::BinnedHeader;

// topas modules
use topas_utils::f;

// external crates
use ndarray::{Array1, ArrayD};
use serde::Serialize;

/// Decoded result file of a TOPAS binned scorer
///
/// Every statistic is stored as an n-dimensional array shaped by the bin
/// counts of the [dimensions](BinnedResult::dimensions), so
/// `result.get("Sum").unwrap()[[i, j, k]]` is the sum in bin `(i, j, k)`.
///
/// Results are constructed once by [read_binned()](crate::read_binned) or
/// [read_binned_as()](crate::read_binned_as) and never modified.
#[derive(Debug, Clone, Serialize)]
pub struct BinnedResult<T = f64> {
    /// Path of the file the result was read from
    pub path: PathBuf,
    /// Name of the scored quantity
    pub quantity: String,
    /// Unit of the scored quantity, `None` if unitless
    pub unit: Option<String>,
    /// Statistics in the order they were stored
    pub statistics: Vec<String>,
    /// Binned axes in canonical order
    pub dimensions: Vec<BinnedDimension>,
    /// Array of values for every statistic
    pub data: HashMap<String, ArrayD<T>>,
}

impl<T> BinnedResult<T> {
    pub(crate) fn new(path: PathBuf, header: BinnedHeader, data: HashMap<String, ArrayD<T>>) -> Self {
        Self {
            path,
            quantity: header.quantity,
            unit: header.unit,
            statistics: header.statistics,
            dimensions: header.dimensions,
            data,
        }
    }

    /// Array for a named statistic
    pub fn get(&self, statistic: &str) -> Option<&ArrayD<T>> {
        self.data.get(statistic)
    }

    /// Iterate over `(statistic, array)` pairs in stored order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArrayD<T>)> {
        self.statistics
            .iter()
            .filter_map(|s| self.data.get(s).map(|array| (s.as_str(), array)))
    }

    /// Shape of every statistic array
    pub fn shape(&self) -> Vec<usize> {
        self.dimensions.iter().map(|d| d.n_bins).collect()
    }

    /// Bin centres along every dimension, in axis order
    pub fn bin_centers(&self) -> Vec<Array1<f64>> {
        self.dimensions.iter().map(|d| d.bin_centers()).collect()
    }

    /// Metadata of the result without any of the data
    pub fn header(&self) -> BinnedHeader {
        BinnedHeader {
            quantity: self.quantity.clone(),
            unit: self.unit.clone(),
            statistics: self.statistics.clone(),
            dimensions: self.dimensions.clone(),
        }
    }
}

impl<T> std::fmt::Display for BinnedResult<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut s = "BinnedResult {\n".to_string();
        s += &f!("    path: {}\n", self.path.display());
        s += &f!(
            "    quantity: {} ({})\n",
            self.quantity,
            self.unit.as_deref().unwrap_or("unitless")
        );
        s += &f!("    statistics: {}\n", self.statistics.join(", "));
        for dimension in &self.dimensions {
            s += &f!("    {dimension}\n");
        }
        s += "}";

        write!(f, "{}", s)
    }
}
