//! Named monthly series with a sorted, deduplicated index.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::SeriesError;
use crate::month::Month;

/// A named sequence of monthly observations.
///
/// Invariant: months are strictly increasing with no duplicates, and there is
/// exactly one value per month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySeries {
    name: String,
    months: Vec<Month>,
    values: Vec<f64>,
}

impl MonthlySeries {
    /// Builds a series from raw dated observations as returned by a provider.
    ///
    /// Each observation date is normalized to its containing month. When the
    /// same month appears more than once, the last observation wins; the
    /// number of resolved duplicates is logged at debug level. Providers
    /// stamp monthly data on day 1, so duplicates indicate revisions or
    /// sub-monthly stamps in the response.
    pub fn from_observations(
        name: impl Into<String>,
        observations: impl IntoIterator<Item = (NaiveDate, f64)>,
    ) -> Self {
        let name = name.into();
        let mut by_month: BTreeMap<Month, f64> = BTreeMap::new();
        let mut n_duplicates = 0usize;

        for (date, value) in observations {
            let month = Month::from_date(date);
            if by_month.insert(month, value).is_some() {
                n_duplicates += 1;
            }
        }

        if n_duplicates > 0 {
            debug!(
                series = %name,
                n_duplicates,
                "duplicate months in provider response, kept last observation"
            );
        }

        let mut months = Vec::with_capacity(by_month.len());
        let mut values = Vec::with_capacity(by_month.len());
        for (month, value) in by_month {
            months.push(month);
            values.push(value);
        }

        Self {
            name,
            months,
            values,
        }
    }

    /// Creates a series from an already-aligned index and values.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::LengthMismatch`] if the vectors differ in
    /// length, [`SeriesError::DuplicateMonth`] on a repeated month, or
    /// [`SeriesError::UnsortedMonths`] if the index is not increasing.
    pub fn new(
        name: impl Into<String>,
        months: Vec<Month>,
        values: Vec<f64>,
    ) -> Result<Self, SeriesError> {
        let name = name.into();
        if months.len() != values.len() {
            return Err(SeriesError::LengthMismatch {
                series: name,
                months: months.len(),
                values: values.len(),
            });
        }
        for pair in months.windows(2) {
            if pair[0] == pair[1] {
                return Err(SeriesError::DuplicateMonth {
                    series: name,
                    month: pair[0],
                });
            }
            if pair[0] > pair[1] {
                return Err(SeriesError::UnsortedMonths { series: name });
            }
        }
        Ok(Self {
            name,
            months,
            values,
        })
    }

    /// Returns the series name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of observations.
    pub fn len(&self) -> usize {
        self.months.len()
    }

    /// Returns `true` if the series holds no observations.
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Returns the sorted month index.
    pub fn months(&self) -> &[Month] {
        &self.months
    }

    /// Returns the observations in index order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Looks up the observation for a month, if present.
    pub fn get(&self, month: Month) -> Option<f64> {
        self.months
            .binary_search(&month)
            .ok()
            .map(|i| self.values[i])
    }

    /// Iterates over `(month, value)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (Month, f64)> + '_ {
        self.months.iter().copied().zip(self.values.iter().copied())
    }
}
