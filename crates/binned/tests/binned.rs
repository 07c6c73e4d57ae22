//! Integration tests for reading binned scorer results

use topas_binned::{
    read_binned, read_binned_as, read_binned_header, Axis, BinnedDimension, BinnedResult, Error,
};

use rstest::{fixture, rstest};

#[fixture]
fn dose() -> BinnedResult {
    read_binned("./data/Dose.csv").unwrap()
}

#[fixture]
fn grid_ascii() -> BinnedResult {
    read_binned("./data/Grid.csv").unwrap()
}

#[fixture]
fn grid_binary() -> BinnedResult {
    read_binned("./data/Grid.bin").unwrap()
}

#[rstest]
fn dose_metadata(dose: BinnedResult) {
    assert_eq!(dose.quantity, "DoseToWaterBinned");
    assert_eq!(dose.unit.as_deref(), Some("Gy"));
    assert_eq!(dose.statistics, vec!["Sum".to_string()]);
    assert_eq!(
        dose.dimensions,
        vec![
            BinnedDimension::new(Axis::X, 1, 40.0),
            BinnedDimension::new(Axis::Y, 1, 40.0),
            BinnedDimension::new(Axis::Z, 300, 0.1),
        ]
    );
}

#[rstest]
fn dose_values(dose: BinnedResult) {
    let sum = dose.get("Sum").unwrap();
    assert_eq!(sum.shape(), &[1, 1, 300]);
    assert_eq!(sum[[0, 0, 0]], 0.25);
    assert_eq!(sum[[0, 0, 1]], 0.5);
    assert_eq!(sum[[0, 0, 299]], 75.0);
}

#[rstest]
fn dose_bin_centers(dose: BinnedResult) {
    let centers = dose.dimensions[2].bin_centers();
    assert_eq!(centers.len(), 300);
    assert!((centers[0] - 0.05).abs() < 1e-9);
    assert!((centers[1] - 0.15).abs() < 1e-9);
    assert!((centers[299] - 29.95).abs() < 1e-9);
}

#[test]
fn unitless_quantity() {
    let tracks = read_binned("./data/SurfaceTracks.csv").unwrap();
    assert_eq!(tracks.quantity, "SurfaceTrackCount");
    assert_eq!(tracks.unit, None);
    assert_eq!(tracks.get("Sum").unwrap()[[0, 0, 0]], 104.0);
}

#[rstest]
#[case("./data/Grid.csv")]
#[case("./data/Grid.bin")]
fn element_count(#[case] path: &str) {
    let result = read_binned(path).unwrap();
    let total: usize = result.iter().map(|(_, array)| array.len()).sum();
    let bins: usize = result.dimensions.iter().map(|d| d.n_bins).product();
    assert_eq!(total, result.statistics.len() * bins);
    assert_eq!(total, 3 * 2 * 3 * 4);
}

#[rstest]
#[case("./data/Grid.csv")]
#[case("./data/Grid.bin")]
fn grid_layout(#[case] path: &str) {
    let result = read_binned(path).unwrap();
    assert_eq!(result.shape(), vec![2, 3, 4]);

    let sum = result.get("Sum").unwrap();
    let mean = result.get("Mean").unwrap();
    let std = result.get("Standard_Deviation").unwrap();
    for i in 0..2 {
        for j in 0..3 {
            for k in 0..4 {
                let expected = 100.0 * i as f64 + 10.0 * j as f64 + k as f64;
                assert_eq!(sum[[i, j, k]], expected);
                assert_eq!(mean[[i, j, k]], expected / 4.0);
                assert_eq!(std[[i, j, k]], 0.5 * (k + 1) as f64);
            }
        }
    }
}

#[rstest]
fn ascii_matches_binary(grid_ascii: BinnedResult, grid_binary: BinnedResult) {
    assert_eq!(grid_ascii.quantity, grid_binary.quantity);
    assert_eq!(grid_ascii.unit, grid_binary.unit);
    assert_eq!(grid_ascii.statistics, grid_binary.statistics);
    assert_eq!(grid_ascii.dimensions, grid_binary.dimensions);
    for (statistic, array) in grid_ascii.iter() {
        assert_eq!(array, grid_binary.get(statistic).unwrap());
    }
}

#[test]
fn statistics_iterate_in_stored_order() {
    let result = read_binned("./data/Grid.bin").unwrap();
    let names = result.iter().map(|(s, _)| s).collect::<Vec<&str>>();
    assert_eq!(names, vec!["Sum", "Mean", "Standard_Deviation"]);
}

#[test]
fn canonical_dimension_order() {
    let result = read_binned("./data/ZFirst.csv").unwrap();
    let axes = result
        .dimensions
        .iter()
        .map(|d| d.name)
        .collect::<Vec<Axis>>();
    assert_eq!(axes, vec![Axis::X, Axis::Y, Axis::Z]);

    let sum = result.get("Sum").unwrap();
    assert_eq!(sum.shape(), &[2, 1, 3]);
    assert_eq!(sum[[1, 0, 2]], 12.0);
}

#[test]
fn single_precision() {
    let ascii: BinnedResult<f32> = read_binned_as("./data/Grid.csv").unwrap();
    let binary: BinnedResult<f32> = read_binned_as("./data/Grid.bin").unwrap();
    assert_eq!(ascii.get("Mean").unwrap()[[1, 2, 3]], 30.75_f32);
    assert_eq!(ascii.get("Sum"), binary.get("Sum"));
}

#[rstest]
#[case("./data/Grid.csv")]
#[case("./data/Grid.bin")]
fn header_only(grid_ascii: BinnedResult, #[case] path: &str) {
    let header = read_binned_header(path).unwrap();
    assert_eq!(header, grid_ascii.header());
    assert_eq!(header.n_bins(), 24);
}

#[rstest]
#[case("./data/Dose.root")]
#[case("./data/Dose.CSV")]
#[case("./data/Grid.BIN")]
fn unknown_extension(#[case] path: &str) {
    let err = read_binned(path).unwrap_err();
    assert!(matches!(err, Error::UnrecognisedFormat { .. }));
}

#[rstest]
#[case("./data/Truncated.bin")]
#[case("./data/Misaligned.bin")]
#[case("./data/MissingRows.csv")]
fn shape_mismatch(#[case] path: &str) {
    match read_binned(path).unwrap_err() {
        Error::ShapeMismatch { path: p, .. } => assert!(p.ends_with(path.trim_start_matches("./"))),
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn missing_quantity() {
    let err = read_binned("./data/NoQuantity.csv").unwrap_err();
    assert!(matches!(err, Error::MalformedHeader { .. }));
}

#[test]
fn bad_value() {
    let err = read_binned("./data/BadValue.csv").unwrap_err();
    assert!(matches!(err, Error::MalformedData { .. }));
}

#[test]
fn missing_header_file() {
    match read_binned("./data/Orphan.bin").unwrap_err() {
        Error::IOFailure { path, .. } => assert!(path.ends_with("Orphan.binheader")),
        other => panic!("unexpected error {other:?}"),
    }
}
