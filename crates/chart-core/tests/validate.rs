// File: crates/chart-core/tests/validate.rs
// Purpose: Boundary validation is advisory and never alters rendering.

use inkchart_core::{histogram, line, ChartKind, DataError, Dataset, RenderOptions};

#[test]
fn check_accepts_well_formed_input() {
    let data = Dataset::from_values(vec![vec![0.0, 1.0], vec![1.0, 2.0]]);
    assert!(data.check(ChartKind::Line).is_ok());
    assert!(data.check(ChartKind::Histogram).is_ok());
}

#[test]
fn check_flags_shape_problems() {
    let data = Dataset::from_values(vec![vec![0.0, 1.0]]);
    assert!(matches!(data.check(ChartKind::Line), Err(DataError::TooFewSeries { .. })));

    let mismatched = Dataset::from_values(vec![vec![0.0, 1.0], vec![1.0]]);
    assert!(matches!(
        mismatched.check(ChartKind::Radar),
        Err(DataError::LengthMismatch { index: 1, .. })
    ));
}

#[test]
fn validation_does_not_change_rendering() {
    let data = Dataset::from_values(vec![vec![0.0, 1.0, 2.0], vec![3.0, 1.0, 2.0]]);
    let opts = RenderOptions::default();
    let before = line(120.0, 80.0, &data, &opts);
    data.check(ChartKind::Line).unwrap();
    let after = line(120.0, 80.0, &data, &opts);
    assert_eq!(before, after);
}

#[test]
fn renderers_tolerate_what_check_rejects() {
    // mismatched lengths degrade instead of failing
    let mismatched = Dataset::from_values(vec![vec![0.0, 1.0], vec![1.0]]);
    assert!(mismatched.check(ChartKind::Histogram).is_err());
    let root = histogram(100.0, 100.0, &mismatched, &RenderOptions::default());
    assert_eq!(root.class.as_deref(), Some("histogram"));
}
