//! Integration tests for reading phase space ntuples

use topas_ntuple::{
    read_ntuple, read_ntuple_header, ColumnData, Dialect, ElementType, Error, NtupleTable,
};

use rstest::{fixture, rstest};

const COLUMN_NAMES: [&str; 10] = [
    "Position X (cm)",
    "Position Y (cm)",
    "Position Z (cm)",
    "Direction Cosine X",
    "Direction Cosine Y",
    "Energy (MeV)",
    "Weight",
    "Particle Type (in PDG Format)",
    "Flag to tell if Third Direction Cosine is Negative (1 means true)",
    "Flag to tell if this is the First Scored Particle from this History (1 means true)",
];

const LIMITED_COLUMN_NAMES: [&str; 8] = [
    "Particle Type (sign from z direction)",
    "Energy (MeV) (-ve if new history)",
    "Position X (cm)",
    "Position Y (cm)",
    "Position Z (cm)",
    "Direction Cosine X",
    "Direction Cosine Y",
    "Weight",
];

const FIRST_IN_HISTORY: &str =
    "Flag to tell if this is the First Scored Particle from this History (1 means true)";

#[fixture]
fn ascii() -> NtupleTable {
    read_ntuple("./data/ascii-phasespace.phsp").unwrap()
}

#[fixture]
fn binary() -> NtupleTable {
    read_ntuple("./data/binary-phasespace.phsp").unwrap()
}

#[fixture]
fn limited() -> NtupleTable {
    read_ntuple("./data/limited-phasespace.phsp").unwrap()
}

fn assert_close(a: &[f64], b: &[f64]) {
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(b) {
        assert!((x - y).abs() < 1.5e-3, "{x} != {y}");
    }
}

#[rstest]
#[case("./data/ascii-phasespace.phsp", Dialect::Ascii)]
#[case("./data/binary-phasespace.phsp", Dialect::Binary)]
#[case("./data/binary-oldstyle.phsp", Dialect::Binary)]
fn column_names(#[case] path: &str, #[case] dialect: Dialect) {
    let table = read_ntuple(path).unwrap();
    assert_eq!(table.dialect, dialect);
    assert_eq!(table.names(), COLUMN_NAMES.to_vec());
}

#[rstest]
fn limited_column_names(limited: NtupleTable) {
    assert_eq!(limited.dialect, Dialect::Limited);
    assert_eq!(limited.names(), LIMITED_COLUMN_NAMES.to_vec());
}

#[rstest]
#[case("./data/ascii-phasespace.phsp")]
#[case("./data/binary-phasespace.phsp")]
#[case("./data/binary-oldstyle.phsp")]
#[case("./data/limited-phasespace.phsp")]
fn row_count(#[case] path: &str) {
    let table = read_ntuple(path).unwrap();
    assert_eq!(table.len(), 104);
    assert!(table.columns.iter().all(|c| c.data.len() == 104));
}

#[rstest]
#[case("./data/ascii-phasespace")]
#[case("./data/ascii-phasespace.header")]
#[case("./data/ascii-phasespace.anything")]
fn extension_is_replaced(ascii: NtupleTable, #[case] path: &str) {
    assert_eq!(read_ntuple(path).unwrap().columns, ascii.columns);
}

#[rstest]
fn binary_element_types(binary: NtupleTable) {
    let types = binary
        .columns
        .iter()
        .map(|c| c.data.element_type())
        .collect::<Vec<ElementType>>();
    let mut expected = vec![ElementType::Float32; 7];
    expected.extend([ElementType::Int32, ElementType::Bool, ElementType::Bool]);
    assert_eq!(types, expected);
    assert_eq!(binary.header().record_size(), 34);
}

#[rstest]
fn binary_values(binary: NtupleTable) {
    match binary.column("Energy (MeV)").unwrap() {
        ColumnData::Float32(energy) => {
            assert_eq!(energy[0], 6.0);
            assert_eq!(energy[1], 1.25);
        }
        other => panic!("unexpected column type {:?}", other.element_type()),
    }
    match binary.column("Particle Type (in PDG Format)").unwrap() {
        ColumnData::Int32(pdg) => assert_eq!(&pdg.to_vec()[..2], &[22, 11]),
        other => panic!("unexpected column type {:?}", other.element_type()),
    }
    match binary.column(FIRST_IN_HISTORY).unwrap() {
        ColumnData::Bool(first) => assert_eq!(first.iter().filter(|f| **f).count(), 26),
        other => panic!("unexpected column type {:?}", other.element_type()),
    }
}

#[rstest]
fn old_style_matches_new_style(binary: NtupleTable) {
    let old = read_ntuple("./data/binary-oldstyle.phsp").unwrap();
    assert_eq!(old.columns, binary.columns);
}

#[rstest]
fn ascii_is_double_precision(ascii: NtupleTable) {
    assert!(ascii
        .columns
        .iter()
        .all(|c| c.spec.element_type == ElementType::Float64));
    assert_eq!(
        ascii.column_as_f64("Position Y (cm)").unwrap()[0],
        -2.25
    );
}

#[rstest]
fn ascii_matches_binary(ascii: NtupleTable, binary: NtupleTable) {
    for name in ascii.names() {
        let a = ascii.column_as_f64(name).unwrap();
        let b = binary.column_as_f64(name).unwrap();
        assert_close(a.as_slice().unwrap(), b.as_slice().unwrap());
    }
}

#[rstest]
fn ascii_matches_limited(ascii: NtupleTable, limited: NtupleTable) {
    // limited phase spaces flag new histories with a negative energy
    let energy = ascii.column_as_f64("Energy (MeV)").unwrap();
    let first = ascii.column_as_f64(FIRST_IN_HISTORY).unwrap();
    let signed = energy
        .iter()
        .zip(first.iter())
        .map(|(e, f)| if *f == 1.0 { -e } else { *e })
        .collect::<Vec<f64>>();
    let limited_energy = limited
        .column_as_f64("Energy (MeV) (-ve if new history)")
        .unwrap();
    assert_close(&signed, limited_energy.as_slice().unwrap());

    // particle types are not comparable
    for name in &LIMITED_COLUMN_NAMES[2..] {
        let a = ascii.column_as_f64(name).unwrap();
        let b = limited.column_as_f64(name).unwrap();
        assert_close(a.as_slice().unwrap(), b.as_slice().unwrap());
    }
}

#[rstest]
#[case("./data/ascii-phasespace.phsp", Dialect::Ascii, 10)]
#[case("./data/binary-oldstyle.phsp", Dialect::Binary, 10)]
#[case("./data/limited-phasespace.phsp", Dialect::Limited, 8)]
fn header_only(#[case] path: &str, #[case] dialect: Dialect, #[case] n_columns: usize) {
    let header = read_ntuple_header(path).unwrap();
    assert_eq!(header.dialect, dialect);
    assert_eq!(header.n_columns(), n_columns);
    assert_eq!(read_ntuple(path).unwrap().header(), header);
}

#[test]
fn unrecognised_header() {
    let err = read_ntuple("./data/unknown-phasespace.phsp").unwrap_err();
    assert!(matches!(err, Error::UnrecognisedFormat { .. }));
}

#[rstest]
#[case("./data/truncated-phasespace.phsp")]
#[case("./data/shortrow-phasespace.phsp")]
fn shape_mismatch(#[case] path: &str) {
    match read_ntuple(path).unwrap_err() {
        Error::ShapeMismatch { path: p, .. } => assert!(p.ends_with(path.trim_start_matches("./"))),
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn bad_value() {
    match read_ntuple("./data/badvalue-phasespace.phsp").unwrap_err() {
        Error::MalformedData { line, .. } => assert_eq!(line, 3),
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn missing_header() {
    match read_ntuple("./data/missing-phasespace.phsp").unwrap_err() {
        Error::IOFailure { path, .. } => assert!(path.ends_with("missing-phasespace.header")),
        other => panic!("unexpected error {other:?}"),
    }
}
