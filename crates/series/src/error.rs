//! Error types for the minerva-series crate.

use crate::month::Month;

/// Error type for all fallible operations in the minerva-series crate.
///
/// Covers index validation, series construction, panel consolidation, and
/// stationarity transforms.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeriesError {
    /// Returned when a month number is outside 1..=12.
    #[error("invalid month {month} in year {year}: must be 1..=12")]
    InvalidMonth {
        /// Year the month was given for.
        year: i32,
        /// Offending month number.
        month: u32,
    },

    /// Returned when a series has a different number of months and values.
    #[error("series {series}: {months} months but {values} values")]
    LengthMismatch {
        /// Series name.
        series: String,
        /// Number of index entries.
        months: usize,
        /// Number of observations.
        values: usize,
    },

    /// Returned when a series index is not strictly increasing.
    #[error("series {series}: months are not sorted")]
    UnsortedMonths {
        /// Series name.
        series: String,
    },

    /// Returned when a series index contains the same month twice.
    #[error("series {series}: duplicate month {month}")]
    DuplicateMonth {
        /// Series name.
        series: String,
        /// The repeated month.
        month: Month,
    },

    /// Returned when consolidation is attempted with no input series.
    #[error("cannot consolidate an empty set of series")]
    EmptyPanel,

    /// Returned when two input series share a column name.
    #[error("duplicate column name {name}")]
    DuplicateColumn {
        /// The repeated name.
        name: String,
    },

    /// Returned when the input series have no months in common.
    #[error("series share no common months")]
    DisjointSeries,

    /// Returned when the transform list does not match the panel width.
    #[error("got {transforms} transforms for {columns} columns")]
    TransformCountMismatch {
        /// Number of transforms supplied.
        transforms: usize,
        /// Number of panel columns.
        columns: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_month() {
        let err = SeriesError::InvalidMonth {
            year: 2012,
            month: 13,
        };
        assert_eq!(err.to_string(), "invalid month 13 in year 2012: must be 1..=12");
    }

    #[test]
    fn error_length_mismatch() {
        let err = SeriesError::LengthMismatch {
            series: "inflation".to_string(),
            months: 4,
            values: 3,
        };
        assert_eq!(err.to_string(), "series inflation: 4 months but 3 values");
    }

    #[test]
    fn error_unsorted_months() {
        let err = SeriesError::UnsortedMonths {
            series: "activity".to_string(),
        };
        assert_eq!(err.to_string(), "series activity: months are not sorted");
    }

    #[test]
    fn error_duplicate_month() {
        let err = SeriesError::DuplicateMonth {
            series: "activity".to_string(),
            month: Month::new(2015, 7).unwrap(),
        };
        assert_eq!(err.to_string(), "series activity: duplicate month 2015-07");
    }

    #[test]
    fn error_empty_panel() {
        let err = SeriesError::EmptyPanel;
        assert_eq!(err.to_string(), "cannot consolidate an empty set of series");
    }

    #[test]
    fn error_duplicate_column() {
        let err = SeriesError::DuplicateColumn {
            name: "policy_rate".to_string(),
        };
        assert_eq!(err.to_string(), "duplicate column name policy_rate");
    }

    #[test]
    fn error_disjoint_series() {
        let err = SeriesError::DisjointSeries;
        assert_eq!(err.to_string(), "series share no common months");
    }

    #[test]
    fn error_transform_count_mismatch() {
        let err = SeriesError::TransformCountMismatch {
            transforms: 3,
            columns: 4,
        };
        assert_eq!(err.to_string(), "got 3 transforms for 4 columns");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<SeriesError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<SeriesError>();
    }
}
