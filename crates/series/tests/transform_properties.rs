//! Integration tests for the transform row-count and invariance properties.

use approx::assert_relative_eq;
use minerva_series::{Month, MonthlySeries, Panel, Transform, consolidate};

fn monthly(name: &str, values: &[f64]) -> MonthlySeries {
    let mut m = Month::new(2010, 1).unwrap();
    let mut months = Vec::new();
    for _ in values {
        months.push(m);
        m = m.next();
    }
    MonthlySeries::new(name, months, values.to_vec()).unwrap()
}

fn four_column_panel(n: usize) -> Panel {
    // Positive, loosely trending levels so logs are defined everywhere.
    let inflation: Vec<f64> = (0..n).map(|t| 0.3 + 0.05 * (t as f64 * 0.7).sin()).collect();
    let activity: Vec<f64> = (0..n).map(|t| 140.0 + 0.2 * t as f64).collect();
    let unemployment: Vec<f64> = (0..n).map(|t| 8.0 + (t as f64 * 0.3).cos()).collect();
    let rate: Vec<f64> = (0..n).map(|t| 10.0 - 0.01 * t as f64).collect();
    consolidate(&[
        monthly("inflation", &inflation),
        monthly("activity", &activity),
        monthly("unemployment", &unemployment),
        monthly("policy_rate", &rate),
    ])
    .unwrap()
}

#[test]
fn stationary_panel_has_n_minus_d_rows() {
    let n = 120;
    let panel = four_column_panel(n);
    let stationary = panel
        .to_stationary(&[
            Transform::Level,
            Transform::LogDifference,
            Transform::Difference,
            Transform::Difference,
        ])
        .unwrap();
    // Max differencing order across columns is 1.
    assert_eq!(stationary.n_rows(), n - 1);
}

#[test]
fn stationary_panel_all_level_keeps_all_rows() {
    let n = 48;
    let panel = four_column_panel(n);
    let stationary = panel
        .to_stationary(&[
            Transform::Level,
            Transform::Level,
            Transform::Level,
            Transform::Level,
        ])
        .unwrap();
    assert_eq!(stationary.n_rows(), n);
}

#[test]
fn stationary_panel_contains_no_non_finite_values() {
    let panel = four_column_panel(60);
    let stationary = panel
        .to_stationary(&[
            Transform::Level,
            Transform::LogDifference,
            Transform::Difference,
            Transform::Difference,
        ])
        .unwrap();
    for c in 0..stationary.n_cols() {
        assert!(stationary.column_at(c).iter().all(|v| v.is_finite()));
    }
}

#[test]
fn log_difference_is_scale_invariant() {
    let levels: Vec<f64> = (0..80).map(|t| 95.0 + 1.3 * t as f64).collect();
    let scaled: Vec<f64> = levels.iter().map(|v| v * 37.5).collect();

    let base = consolidate(&[monthly("x", &levels)])
        .unwrap()
        .to_stationary(&[Transform::LogDifference])
        .unwrap();
    let rescaled = consolidate(&[monthly("x", &scaled)])
        .unwrap()
        .to_stationary(&[Transform::LogDifference])
        .unwrap();

    assert_eq!(base.n_rows(), rescaled.n_rows());
    for (a, b) in base
        .column("x")
        .unwrap()
        .iter()
        .zip(rescaled.column("x").unwrap())
    {
        assert_relative_eq!(a, b, epsilon = 1e-9);
    }
}

#[test]
fn difference_is_translation_invariant() {
    let levels: Vec<f64> = (0..40).map(|t| 5.0 + (t as f64 * 0.5).sin()).collect();
    let shifted: Vec<f64> = levels.iter().map(|v| v + 1000.0).collect();

    let base = consolidate(&[monthly("x", &levels)])
        .unwrap()
        .to_stationary(&[Transform::Difference])
        .unwrap();
    let moved = consolidate(&[monthly("x", &shifted)])
        .unwrap()
        .to_stationary(&[Transform::Difference])
        .unwrap();

    for (a, b) in base
        .column("x")
        .unwrap()
        .iter()
        .zip(moved.column("x").unwrap())
    {
        assert_relative_eq!(a, b, epsilon = 1e-9);
    }
}
