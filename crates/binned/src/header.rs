// crate modules
use crate::dimension::{Axis, BinnedDimension};
use crate::parsers::{binning, scored};

// topas modules
use topas_utils::{f, StringExt};

// external crates
use log::{debug, trace, warn};
use serde::Serialize;

/// Scorer metadata from the header
///
/// For example, the header of a 1D dose scorer
///
/// ```text
/// # TOPAS Version: 3.9
/// # Parameter File: dose.txt
/// # Results for scorer Dose
/// # Scored in component: Phantom
/// # X in 1 bin  of 40 cm
/// # Y in 1 bin  of 40 cm
/// # Z in 300 bins of 0.1 cm
/// # DoseToWaterBinned ( Gy ) : Sum
/// ```
///
/// would parse to:
///
/// ```text
/// BinnedHeader {
///     quantity: "DoseToWaterBinned",
///     unit: Some("Gy"),
///     statistics: ["Sum"],
///     dimensions: [X (1 x 40 cm), Y (1 x 40 cm), Z (300 x 0.1 cm)],
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinnedHeader {
    /// Name of the scored quantity
    pub quantity: String,
    /// Unit of the scored quantity, `None` if unitless
    pub unit: Option<String>,
    /// Statistics in the order they are stored
    pub statistics: Vec<String>,
    /// Binned axes in canonical order
    pub dimensions: Vec<BinnedDimension>,
}

impl BinnedHeader {
    /// Parse the header from its lines of text
    ///
    /// Lines may or may not carry a `#` comment marker. On failure the reason
    /// is returned for the caller to attach to the offending file.
    pub(crate) fn parse<S: AsRef<str>>(lines: &[S]) -> Result<Self, String> {
        let lines = lines
            .iter()
            .map(|line| line.uncomment())
            .collect::<Vec<&str>>();

        let dimensions = find_dimensions(&lines)?;

        let scored = lines
            .iter()
            .find_map(|line| scored(line).ok().map(|(_, s)| s))
            .ok_or_else(|| "no \"<quantity> : <statistics>\" line found".to_string())?;

        debug!("Quantity    = {:?}", scored.quantity);
        debug!("Unit        = {:?}", scored.unit);
        debug!("Statistics  = {:?}", scored.statistics);

        if has_duplicates(&scored.statistics) {
            warn!("Duplicate statistics in {:?}", scored.statistics);
        }

        Ok(Self {
            quantity: scored.quantity,
            unit: scored.unit,
            statistics: scored.statistics,
            dimensions,
        })
    }

    /// Shape of every statistic array, one entry per dimension
    pub fn shape(&self) -> Vec<usize> {
        self.dimensions.iter().map(|d| d.n_bins).collect()
    }

    /// Total number of bins over all dimensions
    pub fn n_bins(&self) -> usize {
        self.dimensions.iter().map(|d| d.n_bins).product()
    }

    /// Number of statistics stored for every bin
    pub fn n_statistics(&self) -> usize {
        self.statistics.len()
    }

    /// Number of binned axes
    pub fn n_dimensions(&self) -> usize {
        self.dimensions.len()
    }
}

/// Collect the binning of every axis, in canonical axis order
///
/// Scanning axis by axis rather than line by line keeps the array axis order
/// stable no matter how the header was written.
fn find_dimensions(lines: &[&str]) -> Result<Vec<BinnedDimension>, String> {
    let mut dimensions = Vec::new();

    for axis in Axis::CANONICAL {
        for line in lines {
            if let Ok((_, dimension)) = binning(line, axis) {
                trace!("Found {axis} binning in {line:?}");
                validate(&dimension)?;
                debug!("Dimension   = {dimension}");
                dimensions.push(dimension);
            }
        }
    }

    if dimensions.is_empty() {
        return Err("no \"<axis> in <N> bins of <width> <unit>\" lines found".to_string());
    }

    Ok(dimensions)
}

fn validate(dimension: &BinnedDimension) -> Result<(), String> {
    if dimension.n_bins == 0 {
        return Err(f!("{} has no bins", dimension.name));
    }

    if !(dimension.bin_width.is_finite() && dimension.bin_width > 0.0) {
        return Err(f!(
            "{} has invalid bin width {}",
            dimension.name,
            dimension.bin_width
        ));
    }

    Ok(())
}

fn has_duplicates(statistics: &[String]) -> bool {
    statistics
        .iter()
        .enumerate()
        .any(|(i, s)| statistics[..i].contains(s))
}
