// external crates
use ndarray::Array1;
use serde::Serialize;

/// Axis labels recognised in a scorer binning
///
/// The variant order is the canonical order used for the array axes of every
/// [BinnedResult](crate::BinnedResult), whatever order the header lines were
/// written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Axis {
    /// Cartesian x
    X,
    /// Cartesian y
    Y,
    /// Cartesian z, also the cylinder axis
    Z,
    /// Radial
    R,
    /// Azimuthal angle
    Phi,
    /// Polar angle
    Theta,
}

impl Axis {
    /// Every axis in canonical order
    pub const CANONICAL: [Axis; 6] = [Axis::X, Axis::Y, Axis::Z, Axis::R, Axis::Phi, Axis::Theta];

    /// Label used for the axis in header text
    pub fn label(&self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
            Axis::R => "R",
            Axis::Phi => "Phi",
            Axis::Theta => "Theta",
        }
    }

    /// Unit that bin widths along this axis are written in
    ///
    /// ```rust
    /// # use topas_binned::Axis;
    /// assert_eq!(Axis::R.unit(), "cm");
    /// assert_eq!(Axis::Phi.unit(), "deg");
    /// ```
    pub fn unit(&self) -> &'static str {
        match self {
            Axis::X | Axis::Y | Axis::Z | Axis::R => "cm",
            Axis::Phi | Axis::Theta => "deg",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single binned axis of a scorer
///
/// Parsed from header lines such as `Z in 300 bins of 0.1 cm`. Bins always
/// start at zero, so everything else is derivable from the count and width.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinnedDimension {
    /// Axis label
    pub name: Axis,
    /// Unit of the bin width
    pub unit: String,
    /// Number of bins, at least 1
    pub n_bins: usize,
    /// Width of every bin in `unit`
    pub bin_width: f64,
}

impl BinnedDimension {
    /// Create a new dimension, with the unit taken from the axis
    pub fn new(name: Axis, n_bins: usize, bin_width: f64) -> Self {
        Self {
            name,
            unit: name.unit().to_string(),
            n_bins,
            bin_width,
        }
    }

    /// Centre of every bin
    ///
    /// ```rust
    /// # use topas_binned::{Axis, BinnedDimension};
    /// let z = BinnedDimension::new(Axis::Z, 4, 0.5);
    /// assert_eq!(z.bin_centers().to_vec(), vec![0.25, 0.75, 1.25, 1.75]);
    /// ```
    pub fn bin_centers(&self) -> Array1<f64> {
        let n = self.n_bins as f64;
        let w = self.bin_width;
        Array1::linspace(0.5 * w, (n - 0.5) * w, self.n_bins)
    }

    /// Edges of every bin, starting from zero
    ///
    /// ```rust
    /// # use topas_binned::{Axis, BinnedDimension};
    /// let phi = BinnedDimension::new(Axis::Phi, 4, 90.0);
    /// assert_eq!(phi.bin_edges().to_vec(), vec![0.0, 90.0, 180.0, 270.0, 360.0]);
    /// ```
    pub fn bin_edges(&self) -> Array1<f64> {
        (0..=self.n_bins)
            .map(|i| i as f64 * self.bin_width)
            .collect()
    }
}

impl std::fmt::Display for BinnedDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} in {} bins of {} {}",
            self.name, self.n_bins, self.bin_width, self.unit
        )
    }
}
