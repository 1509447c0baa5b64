//! Multi-series panel aligned on a shared month index.

use std::collections::BTreeSet;

use tracing::debug;

use crate::error::SeriesError;
use crate::month::Month;
use crate::series::MonthlySeries;

/// Several series inner-joined on month, with no missing values.
///
/// Invariants: all columns have one value per index month, column names are
/// unique, and the index is strictly increasing. A `Panel` is produced either
/// by [`consolidate`] (the raw join) or by
/// [`Panel::to_stationary`](crate::transform) (the transformed join).
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    months: Vec<Month>,
    columns: Vec<String>,
    /// Column-major storage: `values[c][t]` is column `c` at index row `t`.
    values: Vec<Vec<f64>>,
}

/// Inner-joins the given series on their month indices.
///
/// Months missing from any input series are dropped; the per-series drop
/// counts are logged at debug level. Column order follows input order and
/// fixes the orthogonalization ordering downstream.
///
/// # Errors
///
/// Returns [`SeriesError::EmptyPanel`] for an empty input slice,
/// [`SeriesError::DuplicateColumn`] if two series share a name, and
/// [`SeriesError::DisjointSeries`] if the join is empty.
pub fn consolidate(series: &[MonthlySeries]) -> Result<Panel, SeriesError> {
    if series.is_empty() {
        return Err(SeriesError::EmptyPanel);
    }

    let mut seen = BTreeSet::new();
    for s in series {
        if !seen.insert(s.name()) {
            return Err(SeriesError::DuplicateColumn {
                name: s.name().to_string(),
            });
        }
    }

    // Intersect indices, starting from the first series.
    let months: Vec<Month> = series[0]
        .months()
        .iter()
        .copied()
        .filter(|m| series[1..].iter().all(|s| s.get(*m).is_some()))
        .collect();

    if months.is_empty() {
        return Err(SeriesError::DisjointSeries);
    }

    let mut columns = Vec::with_capacity(series.len());
    let mut values = Vec::with_capacity(series.len());
    for s in series {
        let n_dropped = s.len() - months.len();
        if n_dropped > 0 {
            debug!(
                column = %s.name(),
                n_obs = s.len(),
                n_joined = months.len(),
                "dropped observations outside the common index"
            );
        }
        let col: Vec<f64> = months
            .iter()
            .map(|m| {
                // The join above guarantees every index month exists in every series.
                s.get(*m).expect("joined month present in every series")
            })
            .collect();
        columns.push(s.name().to_string());
        values.push(col);
    }

    Ok(Panel {
        months,
        columns,
        values,
    })
}

impl Panel {
    /// Assembles a panel from parts already known to satisfy the invariants.
    pub(crate) fn from_parts(
        months: Vec<Month>,
        columns: Vec<String>,
        values: Vec<Vec<f64>>,
    ) -> Self {
        Self {
            months,
            columns,
            values,
        }
    }

    /// Returns the number of index rows.
    pub fn n_rows(&self) -> usize {
        self.months.len()
    }

    /// Returns the number of columns.
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Returns the shared month index.
    pub fn months(&self) -> &[Month] {
        &self.months
    }

    /// Returns the column names in declared order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns a column by name, if present.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .position(|c| c == name)
            .map(|i| self.values[i].as_slice())
    }

    /// Returns the column at the given position.
    ///
    /// # Panics
    ///
    /// Panics if `index >= n_cols()`.
    pub fn column_at(&self, index: usize) -> &[f64] {
        &self.values[index]
    }

    /// Returns the value at `(row, column)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn value(&self, row: usize, column: usize) -> f64 {
        self.values[column][row]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, 1).unwrap()
    }

    fn series(name: &str, obs: &[(i32, u32, f64)]) -> MonthlySeries {
        MonthlySeries::from_observations(
            name,
            obs.iter().map(|&(y, m, v)| (date(y, m), v)),
        )
    }

    #[test]
    fn consolidate_inner_joins_on_month() {
        let a = series("a", &[(2012, 1, 1.0), (2012, 2, 2.0), (2012, 3, 3.0)]);
        let b = series("b", &[(2012, 2, 20.0), (2012, 3, 30.0), (2012, 4, 40.0)]);
        let panel = consolidate(&[a, b]).unwrap();

        assert_eq!(panel.n_rows(), 2);
        assert_eq!(panel.n_cols(), 2);
        assert_eq!(panel.months()[0], Month::new(2012, 2).unwrap());
        assert_eq!(panel.column("a").unwrap(), &[2.0, 3.0]);
        assert_eq!(panel.column("b").unwrap(), &[20.0, 30.0]);
    }

    #[test]
    fn consolidate_preserves_column_order() {
        let a = series("policy_rate", &[(2012, 1, 1.0)]);
        let b = series("unemployment", &[(2012, 1, 2.0)]);
        let panel = consolidate(&[a, b]).unwrap();
        assert_eq!(panel.columns(), &["policy_rate", "unemployment"]);
    }

    #[test]
    fn consolidate_empty_input() {
        let err = consolidate(&[]).unwrap_err();
        assert!(matches!(err, SeriesError::EmptyPanel));
    }

    #[test]
    fn consolidate_duplicate_column() {
        let a = series("a", &[(2012, 1, 1.0)]);
        let b = series("a", &[(2012, 1, 2.0)]);
        let err = consolidate(&[a, b]).unwrap_err();
        assert!(matches!(err, SeriesError::DuplicateColumn { .. }));
    }

    #[test]
    fn consolidate_disjoint_series() {
        let a = series("a", &[(2012, 1, 1.0)]);
        let b = series("b", &[(2013, 1, 2.0)]);
        let err = consolidate(&[a, b]).unwrap_err();
        assert!(matches!(err, SeriesError::DisjointSeries));
    }

    #[test]
    fn consolidate_single_series() {
        let a = series("a", &[(2012, 1, 1.0), (2012, 2, 2.0)]);
        let panel = consolidate(&[a]).unwrap();
        assert_eq!(panel.n_rows(), 2);
        assert_eq!(panel.n_cols(), 1);
    }

    #[test]
    fn value_accessor() {
        let a = series("a", &[(2012, 1, 1.0), (2012, 2, 2.0)]);
        let b = series("b", &[(2012, 1, 3.0), (2012, 2, 4.0)]);
        let panel = consolidate(&[a, b]).unwrap();
        assert_eq!(panel.value(1, 0), 2.0);
        assert_eq!(panel.value(0, 1), 3.0);
    }

    #[test]
    fn column_missing_name() {
        let a = series("a", &[(2012, 1, 1.0)]);
        let panel = consolidate(&[a]).unwrap();
        assert!(panel.column("b").is_none());
    }
}
