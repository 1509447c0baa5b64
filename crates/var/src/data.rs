//! Validated multivariate input for VAR estimation.

use nalgebra::DMatrix;

use crate::error::VarError;

/// A named T x K observation matrix, validated on construction.
///
/// Rows are time-ordered observations, columns are variables. Column order is
/// significant: it fixes both the equation order and the orthogonalization
/// ordering of the fitted system.
#[derive(Debug, Clone, PartialEq)]
pub struct VarData {
    names: Vec<String>,
    values: DMatrix<f64>,
}

impl VarData {
    /// Builds the observation matrix from per-variable columns.
    ///
    /// # Errors
    ///
    /// Returns [`VarError::EmptyData`] for zero columns or zero rows,
    /// [`VarError::NameCountMismatch`] if names and columns differ in count,
    /// [`VarError::ColumnLengthMismatch`] on ragged columns,
    /// [`VarError::NonFiniteData`] if a column holds NaN or infinities, and
    /// [`VarError::DuplicateVariable`] on repeated names.
    pub fn new(names: Vec<String>, columns: &[Vec<f64>]) -> Result<Self, VarError> {
        if names.len() != columns.len() {
            return Err(VarError::NameCountMismatch {
                names: names.len(),
                columns: columns.len(),
            });
        }
        if columns.is_empty() || columns[0].is_empty() {
            return Err(VarError::EmptyData);
        }

        let n_rows = columns[0].len();
        for (name, col) in names.iter().zip(columns) {
            if col.len() != n_rows {
                return Err(VarError::ColumnLengthMismatch {
                    column: name.clone(),
                    len: col.len(),
                    expected: n_rows,
                });
            }
            if col.iter().any(|v| !v.is_finite()) {
                return Err(VarError::NonFiniteData {
                    column: name.clone(),
                });
            }
        }
        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(VarError::DuplicateVariable { name: name.clone() });
            }
        }

        let values = DMatrix::from_fn(n_rows, columns.len(), |t, c| columns[c][t]);
        Ok(Self { names, values })
    }

    /// Returns the variable names in column order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the number of observations (rows).
    pub fn n_obs(&self) -> usize {
        self.values.nrows()
    }

    /// Returns the number of variables (columns).
    pub fn n_vars(&self) -> usize {
        self.values.ncols()
    }

    /// Returns the column position of a variable name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Returns the observation matrix.
    pub(crate) fn values(&self) -> &DMatrix<f64> {
        &self.values
    }
}
