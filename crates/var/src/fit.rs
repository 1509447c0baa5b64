//! VAR(p) estimation by per-equation least squares.

use nalgebra::{Cholesky, DMatrix, DVector};
use tracing::debug;

use crate::data::VarData;
use crate::error::VarError;

/// A fitted VAR(p) model.
///
/// Estimated by single-equation OLS on the stacked regression
/// `y_t = c + A_1 y_{t-1} + ... + A_p y_{t-p} + u_t`, which coincides with
/// the multivariate maximum-likelihood estimate for a Gaussian VAR. Holds
/// everything downstream inference needs: coefficient matrices, both
/// residual covariance estimates, and the inverse regressor moment matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct VarFit {
    names: Vec<String>,
    order: usize,
    nobs: usize,
    intercept: DVector<f64>,
    coefs: Vec<DMatrix<f64>>,
    sigma_u: DMatrix<f64>,
    sigma_u_mle: DMatrix<f64>,
    zz_inv: DMatrix<f64>,
    aic: f64,
}

/// Fits a VAR with the given lag order on the full sample.
///
/// # Errors
///
/// Returns [`VarError::InvalidLagOrder`] for order zero,
/// [`VarError::InsufficientObservations`] when the usable sample cannot
/// identify the coefficients, [`VarError::SingularRegressors`] when the
/// regressor moment matrix is not positive definite, and
/// [`VarError::NonPositiveDefiniteCovariance`] when the residual covariance
/// degenerates (e.g. an exact linear dependence between variables).
pub fn fit(data: &VarData, order: usize) -> Result<VarFit, VarError> {
    fit_with_offset(data, order, 0)
}

/// Fits a VAR discarding `offset` additional leading rows.
///
/// Lag selection uses this to estimate every candidate order on the common
/// sample implied by the largest candidate, so their information criteria
/// are comparable.
pub(crate) fn fit_with_offset(
    data: &VarData,
    order: usize,
    offset: usize,
) -> Result<VarFit, VarError> {
    if order == 0 {
        return Err(VarError::InvalidLagOrder { order });
    }

    let k = data.n_vars();
    let t_total = data.n_obs();
    let first = order + offset;
    let n_regressors = 1 + k * order;
    let nobs = t_total.saturating_sub(first);
    if nobs < n_regressors + 1 {
        return Err(VarError::InsufficientObservations {
            rows: nobs,
            min: n_regressors + 1,
        });
    }

    let values = data.values();
    let mut z = DMatrix::zeros(nobs, n_regressors);
    let mut y = DMatrix::zeros(nobs, k);
    for (row, t) in (first..t_total).enumerate() {
        z[(row, 0)] = 1.0;
        for lag in 1..=order {
            for c in 0..k {
                z[(row, 1 + (lag - 1) * k + c)] = values[(t - lag, c)];
            }
        }
        for c in 0..k {
            y[(row, c)] = values[(t, c)];
        }
    }

    let zz = z.transpose() * &z;
    let chol = Cholesky::new(zz).ok_or(VarError::SingularRegressors { order })?;
    let zy = z.transpose() * &y;
    let beta = chol.solve(&zy);
    let zz_inv = chol.inverse();

    let resid = &y - &z * &beta;
    let rss = resid.transpose() * &resid;
    let df_resid = nobs - n_regressors;
    let sigma_u = &rss / (df_resid as f64);
    let sigma_u_mle = rss / (nobs as f64);

    // AIC on the ML covariance, penalising p*K^2 lag coefficients plus the
    // K intercept terms.
    let ln_det = ln_determinant(&sigma_u_mle)
        .ok_or(VarError::NonPositiveDefiniteCovariance { order })?;
    let n_free = order * k * k + k;
    let aic = ln_det + 2.0 / (nobs as f64) * (n_free as f64);

    let intercept = beta.row(0).transpose();
    let coefs: Vec<DMatrix<f64>> = (0..order)
        .map(|j| DMatrix::from_fn(k, k, |i, c| beta[(1 + j * k + c, i)]))
        .collect();

    debug!(order, nobs, aic, "fitted VAR candidate");

    Ok(VarFit {
        names: data.names().to_vec(),
        order,
        nobs,
        intercept,
        coefs,
        sigma_u,
        sigma_u_mle,
        zz_inv,
        aic,
    })
}

/// Log-determinant of a symmetric positive-definite matrix, or `None` if the
/// Cholesky factorization fails.
fn ln_determinant(m: &DMatrix<f64>) -> Option<f64> {
    let chol = Cholesky::new(m.clone())?;
    let l = chol.l();
    Some(2.0 * (0..m.nrows()).map(|i| l[(i, i)].ln()).sum::<f64>())
}

impl VarFit {
    /// Returns the variable names in equation order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the fitted lag order p.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Returns the number of variables K.
    pub fn n_vars(&self) -> usize {
        self.names.len()
    }

    /// Returns the number of observations in the regression sample.
    pub fn nobs(&self) -> usize {
        self.nobs
    }

    /// Returns the residual degrees of freedom `T - (K p + 1)`.
    pub fn df_resid(&self) -> usize {
        self.nobs - (1 + self.n_vars() * self.order)
    }

    /// Returns the per-equation intercept vector.
    pub fn intercept(&self) -> &DVector<f64> {
        &self.intercept
    }

    /// Returns the lag coefficient matrices `A_1..A_p`.
    ///
    /// `coefs()[j][(i, c)]` is the effect of variable `c` at lag `j + 1` on
    /// the equation for variable `i`.
    pub fn coefs(&self) -> &[DMatrix<f64>] {
        &self.coefs
    }

    /// Returns the degrees-of-freedom-adjusted residual covariance.
    pub fn sigma_u(&self) -> &DMatrix<f64> {
        &self.sigma_u
    }

    /// Returns the maximum-likelihood residual covariance (divides by T).
    pub fn sigma_u_mle(&self) -> &DMatrix<f64> {
        &self.sigma_u_mle
    }

    /// Returns the Akaike information criterion of this fit.
    pub fn aic(&self) -> f64 {
        self.aic
    }

    /// Returns the inverse regressor moment matrix `(Z'Z)^-1`.
    pub(crate) fn zz_inv(&self) -> &DMatrix<f64> {
        &self.zz_inv
    }

    /// Returns the column position of a variable name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Builds the (K p) x (K p) companion matrix of the lag polynomial.
    pub fn companion(&self) -> DMatrix<f64> {
        let k = self.n_vars();
        let p = self.order;
        let mut comp = DMatrix::zeros(k * p, k * p);
        for j in 0..p {
            for r in 0..k {
                for c in 0..k {
                    comp[(r, j * k + c)] = self.coefs[j][(r, c)];
                }
            }
        }
        for i in 0..k * (p - 1) {
            comp[(k + i, i)] = 1.0;
        }
        comp
    }

    /// Computes the MA representation `Phi_0..Phi_horizon`.
    ///
    /// `Phi_0 = I` and `Phi_i = sum_{j=1..min(i,p)} Phi_{i-j} A_j`.
    pub fn ma_coefficients(&self, horizon: usize) -> Vec<DMatrix<f64>> {
        let k = self.n_vars();
        let mut phi: Vec<DMatrix<f64>> = Vec::with_capacity(horizon + 1);
        phi.push(DMatrix::identity(k, k));
        for i in 1..=horizon {
            let mut next = DMatrix::zeros(k, k);
            for j in 1..=i.min(self.order) {
                next += &phi[i - j] * &self.coefs[j - 1];
            }
            phi.push(next);
        }
        phi
    }

    /// Returns the lower Cholesky factor of the residual covariance, the
    /// orthogonalization matrix implied by the declared variable order.
    ///
    /// # Errors
    ///
    /// Returns [`VarError::NonPositiveDefiniteCovariance`] if the covariance
    /// cannot be factorized.
    pub fn residual_cholesky(&self) -> Result<DMatrix<f64>, VarError> {
        Cholesky::new(self.sigma_u.clone())
            .map(|c| c.l())
            .ok_or(VarError::NonPositiveDefiniteCovariance { order: self.order })
    }
}
