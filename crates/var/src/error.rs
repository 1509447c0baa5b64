//! Error types for the minerva-var crate.

/// Error type for all fallible operations in the minerva-var crate.
///
/// Covers input validation, numerically singular estimation problems, and
/// lookups against the fitted system.
#[derive(Debug, Clone, thiserror::Error)]
pub enum VarError {
    /// Returned when the input has no rows or no columns.
    #[error("input panel is empty")]
    EmptyData,

    /// Returned when the number of names differs from the number of columns.
    #[error("got {names} variable names for {columns} columns")]
    NameCountMismatch {
        /// Number of names supplied.
        names: usize,
        /// Number of data columns supplied.
        columns: usize,
    },

    /// Returned when a column has a different length than the first column.
    #[error("column {column}: {len} rows, expected {expected}")]
    ColumnLengthMismatch {
        /// Column name.
        column: String,
        /// Rows in this column.
        len: usize,
        /// Rows in the first column.
        expected: usize,
    },

    /// Returned when a column contains NaN or infinite values.
    #[error("column {column} contains non-finite values")]
    NonFiniteData {
        /// Column name.
        column: String,
    },

    /// Returned when two columns share a variable name.
    #[error("duplicate variable name {name}")]
    DuplicateVariable {
        /// The repeated name.
        name: String,
    },

    /// Returned when a lag order of zero is requested.
    #[error("lag order must be at least 1, got {order}")]
    InvalidLagOrder {
        /// The rejected order.
        order: usize,
    },

    /// Returned when the sample is too short for the requested lag structure.
    #[error("insufficient observations: got {rows} rows, need at least {min}")]
    InsufficientObservations {
        /// Usable rows in the estimation sample.
        rows: usize,
        /// Minimum rows required.
        min: usize,
    },

    /// Returned when the regressor moment matrix cannot be factorized,
    /// e.g. perfectly collinear columns or too few observations.
    #[error("singular regressor matrix at lag order {order}")]
    SingularRegressors {
        /// Lag order of the failing regression.
        order: usize,
    },

    /// Returned when a residual covariance matrix is not positive definite.
    #[error("residual covariance at lag order {order} is not positive definite")]
    NonPositiveDefiniteCovariance {
        /// Lag order of the fitted model.
        order: usize,
    },

    /// Returned when the orthogonalization factor used by the error bands
    /// cannot be inverted.
    #[error("impulse-response band factor is not invertible")]
    SingularBandFactor,

    /// Returned when a significance level is outside the open interval (0, 1).
    #[error("significance level {significance} is outside (0, 1)")]
    InvalidSignificance {
        /// The rejected level.
        significance: f64,
    },

    /// Returned when a variable name is not part of the fitted system.
    #[error("unknown variable {name}")]
    UnknownVariable {
        /// The unmatched name.
        name: String,
    },
}
