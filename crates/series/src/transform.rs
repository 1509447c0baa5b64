//! Stationarity transforms applied per panel column.

use tracing::{debug, warn};

use crate::error::SeriesError;
use crate::panel::Panel;

/// Per-series stationarity transform.
///
/// The assignment is fixed by configuration for a whole run: rate-type
/// series take a first difference, price/activity levels take a log
/// difference scaled to percent, and series that are already stationary
/// (e.g. a monthly variation published as such) stay at level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Keep the series as-is.
    Level,
    /// First difference: `x[t] - x[t-1]`.
    Difference,
    /// Log first difference scaled by 100: `(ln x[t] - ln x[t-1]) * 100`.
    LogDifference,
}

impl Transform {
    /// Differencing order: the number of leading observations the transform
    /// consumes.
    pub fn order(self) -> usize {
        match self {
            Transform::Level => 0,
            Transform::Difference | Transform::LogDifference => 1,
        }
    }

    /// Human-readable label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Transform::Level => "level",
            Transform::Difference => "first difference",
            Transform::LogDifference => "log difference x100",
        }
    }

    /// Applies the transform to a value slice.
    ///
    /// The output has the same length as the input; positions where the
    /// transform is undefined (leading differences, logs of non-positive
    /// values) hold non-finite values and are dropped by
    /// [`Panel::to_stationary`].
    pub fn apply(self, values: &[f64]) -> Vec<f64> {
        match self {
            Transform::Level => values.to_vec(),
            Transform::Difference => {
                let mut out = Vec::with_capacity(values.len());
                out.push(f64::NAN);
                for t in 1..values.len() {
                    out.push(values[t] - values[t - 1]);
                }
                out
            }
            Transform::LogDifference => {
                let mut out = Vec::with_capacity(values.len());
                out.push(f64::NAN);
                for t in 1..values.len() {
                    out.push((values[t].ln() - values[t - 1].ln()) * 100.0);
                }
                out
            }
        }
    }
}

impl Panel {
    /// Derives the stationary panel by applying one transform per column and
    /// dropping every row that contains a non-finite value.
    ///
    /// For finite positive inputs exactly `max(order)` leading rows are
    /// dropped; any further drop (a log of a non-positive level mid-sample)
    /// is logged as a warning because it shortens the estimation sample in a
    /// way the caller did not ask for.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::TransformCountMismatch`] if the number of
    /// transforms differs from the number of columns.
    pub fn to_stationary(&self, transforms: &[Transform]) -> Result<Panel, SeriesError> {
        if transforms.len() != self.n_cols() {
            return Err(SeriesError::TransformCountMismatch {
                transforms: transforms.len(),
                columns: self.n_cols(),
            });
        }

        let transformed: Vec<Vec<f64>> = transforms
            .iter()
            .enumerate()
            .map(|(c, t)| t.apply(self.column_at(c)))
            .collect();

        let keep: Vec<usize> = (0..self.n_rows())
            .filter(|&t| transformed.iter().all(|col| col[t].is_finite()))
            .collect();

        let expected_drop = transforms.iter().map(|t| t.order()).max().unwrap_or(0);
        let n_dropped = self.n_rows() - keep.len();
        if n_dropped > expected_drop {
            warn!(
                n_dropped,
                expected_drop, "transform dropped rows beyond the leading differences"
            );
        } else if n_dropped > 0 {
            debug!(n_dropped, "dropped leading rows consumed by differencing");
        }

        let months = keep.iter().map(|&t| self.months()[t]).collect();
        let values = transformed
            .iter()
            .map(|col| keep.iter().map(|&t| col[t]).collect())
            .collect();

        Ok(Panel::from_parts(months, self.columns().to_vec(), values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::month::Month;
    use crate::panel::consolidate;
    use crate::series::MonthlySeries;

    fn monthly(name: &str, start_year: i32, values: &[f64]) -> MonthlySeries {
        let mut m = Month::new(start_year, 1).unwrap();
        let mut months = Vec::new();
        for _ in values {
            months.push(m);
            m = m.next();
        }
        MonthlySeries::new(name, months, values.to_vec()).unwrap()
    }

    #[test]
    fn level_is_identity() {
        let out = Transform::Level.apply(&[1.0, 2.0, 3.0]);
        assert_eq!(out, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn difference_values() {
        let out = Transform::Difference.apply(&[10.0, 10.5, 10.25]);
        assert!(out[0].is_nan());
        assert_eq!(out[1], 0.5);
        assert_eq!(out[2], -0.25);
    }

    #[test]
    fn log_difference_values() {
        let out = Transform::LogDifference.apply(&[100.0, 110.0]);
        assert!(out[0].is_nan());
        let expected = (110.0f64.ln() - 100.0f64.ln()) * 100.0;
        assert!((out[1] - expected).abs() < 1e-12);
    }

    #[test]
    fn log_difference_of_non_positive_is_non_finite() {
        let out = Transform::LogDifference.apply(&[100.0, 0.0, 100.0]);
        assert!(!out[1].is_finite());
        assert!(!out[2].is_finite());
    }

    #[test]
    fn orders() {
        assert_eq!(Transform::Level.order(), 0);
        assert_eq!(Transform::Difference.order(), 1);
        assert_eq!(Transform::LogDifference.order(), 1);
    }

    #[test]
    fn to_stationary_drops_one_leading_row() {
        let a = monthly("a", 2012, &[1.0, 2.0, 3.0, 4.0]);
        let b = monthly("b", 2012, &[100.0, 110.0, 121.0, 133.1]);
        let panel = consolidate(&[a, b]).unwrap();
        let stationary = panel
            .to_stationary(&[Transform::Difference, Transform::LogDifference])
            .unwrap();
        assert_eq!(stationary.n_rows(), 3);
        assert_eq!(stationary.months()[0], Month::new(2012, 2).unwrap());
    }

    #[test]
    fn to_stationary_all_level_keeps_rows() {
        let a = monthly("a", 2012, &[1.0, 2.0, 3.0]);
        let panel = consolidate(&[a]).unwrap();
        let out = panel.to_stationary(&[Transform::Level]).unwrap();
        assert_eq!(out.n_rows(), 3);
    }

    #[test]
    fn to_stationary_count_mismatch() {
        let a = monthly("a", 2012, &[1.0, 2.0]);
        let panel = consolidate(&[a]).unwrap();
        let err = panel
            .to_stationary(&[Transform::Level, Transform::Level])
            .unwrap_err();
        assert!(matches!(err, SeriesError::TransformCountMismatch { .. }));
    }

    #[test]
    fn to_stationary_drops_mid_sample_non_finite() {
        let a = monthly("a", 2012, &[100.0, -1.0, 100.0, 110.0]);
        let panel = consolidate(&[a]).unwrap();
        let out = panel.to_stationary(&[Transform::LogDifference]).unwrap();
        // ln(-1) poisons rows 1 and 2; only the 110/100 step survives.
        assert_eq!(out.n_rows(), 1);
        assert_eq!(out.months()[0], Month::new(2012, 4).unwrap());
    }
}
