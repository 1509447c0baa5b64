//! Orthogonalized impulse responses with asymptotic confidence bands.
//!
//! Shocks are orthogonalized with the lower Cholesky factor of the residual
//! covariance, so the variable ordering of the fitted model decides which
//! contemporaneous correlations are attributed to which shock. Confidence
//! bands come from the delta method applied to the estimated coefficients
//! and the residual covariance (Lutkepohl 3.7).

use nalgebra::DMatrix;
use statrs::distribution::{ContinuousCDF, Normal};
use tracing::debug;

use crate::error::VarError;
use crate::fit::VarFit;
use crate::linalg::{commutation, duplication_pinv, elimination};

/// Orthogonalized impulse responses over `horizon + 1` steps, with pointwise
/// confidence bands.
///
/// Step `h` holds a `K x K` matrix whose `(i, j)` entry is the response of
/// variable `i`, `h` months after a one standard deviation shock to the
/// orthogonalized innovation of variable `j`.
#[derive(Debug, Clone)]
pub struct ImpulseResponse {
    names: Vec<String>,
    horizon: usize,
    significance: f64,
    responses: Vec<DMatrix<f64>>,
    lower: Vec<DMatrix<f64>>,
    upper: Vec<DMatrix<f64>>,
}

impl ImpulseResponse {
    /// Returns the variable names, in model order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the number of steps past impact.
    pub fn horizon(&self) -> usize {
        self.horizon
    }

    /// Returns the significance level of the bands.
    pub fn significance(&self) -> f64 {
        self.significance
    }

    /// Returns the response path of `response` to a shock in `impulse`,
    /// one value per step from impact to the horizon.
    ///
    /// # Errors
    ///
    /// Returns [`VarError::UnknownVariable`] if either name is not in the
    /// model.
    pub fn point(&self, response: &str, impulse: &str) -> Result<Vec<f64>, VarError> {
        let (i, j) = self.pair(response, impulse)?;
        Ok(self.responses.iter().map(|m| m[(i, j)]).collect())
    }

    /// Returns the `(lower, upper)` confidence band for the path of
    /// `response` to a shock in `impulse`.
    ///
    /// # Errors
    ///
    /// Returns [`VarError::UnknownVariable`] if either name is not in the
    /// model.
    pub fn band(&self, response: &str, impulse: &str) -> Result<(Vec<f64>, Vec<f64>), VarError> {
        let (i, j) = self.pair(response, impulse)?;
        let lower = self.lower.iter().map(|m| m[(i, j)]).collect();
        let upper = self.upper.iter().map(|m| m[(i, j)]).collect();
        Ok((lower, upper))
    }

    fn pair(&self, response: &str, impulse: &str) -> Result<(usize, usize), VarError> {
        let i = self.index_of(response)?;
        let j = self.index_of(impulse)?;
        Ok((i, j))
    }

    fn index_of(&self, name: &str) -> Result<usize, VarError> {
        self.names
            .iter()
            .position(|n| n == name)
            .ok_or_else(|| VarError::UnknownVariable {
                name: name.to_string(),
            })
    }
}

/// Computes orthogonalized impulse responses for `horizon` steps past
/// impact, with pointwise asymptotic bands at the given significance level.
///
/// # Errors
///
/// Returns [`VarError::InvalidSignificance`] unless `significance` lies
/// strictly between zero and one, [`VarError::NonPositiveDefiniteCovariance`]
/// if the residual covariance has no Cholesky factor, and
/// [`VarError::SingularBandFactor`] if the band covariance cannot be formed.
pub fn orthogonalized(
    fit: &VarFit,
    horizon: usize,
    significance: f64,
) -> Result<ImpulseResponse, VarError> {
    if !(significance > 0.0 && significance < 1.0) {
        return Err(VarError::InvalidSignificance { significance });
    }

    let phi = fit.ma_coefficients(horizon);
    let p_chol = fit.residual_cholesky()?;
    let responses: Vec<DMatrix<f64>> = phi.iter().map(|m| m * &p_chol).collect();

    let se = band_standard_errors(fit, &phi, &p_chol, horizon)?;
    // Parameters are constants, so construction cannot fail.
    let normal = Normal::new(0.0, 1.0).expect("standard normal parameters are valid");
    let z = normal.inverse_cdf(1.0 - significance / 2.0);

    let lower: Vec<DMatrix<f64>> = responses
        .iter()
        .zip(&se)
        .map(|(theta, s)| theta - s * z)
        .collect();
    let upper: Vec<DMatrix<f64>> = responses
        .iter()
        .zip(&se)
        .map(|(theta, s)| theta + s * z)
        .collect();

    debug!(
        horizon,
        order = fit.order(),
        significance,
        "orthogonalized impulse responses computed"
    );

    Ok(ImpulseResponse {
        names: fit.names().to_vec(),
        horizon,
        significance,
        responses,
        lower,
        upper,
    })
}

/// Delta-method standard errors of the orthogonalized responses, one
/// `K x K` matrix per step.
///
/// The covariance at step `i` stacks two pieces: uncertainty in the lag
/// coefficients, pushed through `C_i = (P' (x) I) G_i`, and uncertainty in
/// the residual covariance, pushed through `Cbar_i = (I (x) Phi_i) H`.
fn band_standard_errors(
    fit: &VarFit,
    phi: &[DMatrix<f64>],
    p_chol: &DMatrix<f64>,
    horizon: usize,
) -> Result<Vec<DMatrix<f64>>, VarError> {
    let k = fit.n_vars();
    let p = fit.order();
    let kp = k * p;
    let t = fit.nobs() as f64;

    // Asymptotic covariance of the stacked lag coefficients: the intercept
    // row and column drop out of (Z'Z)^-1 before the Kronecker product.
    let zz_inv = fit.zz_inv();
    let zz_lag = DMatrix::from_fn(kp, kp, |a, b| zz_inv[(1 + a, 1 + b)]);
    let cov_coef = zz_lag.kronecker(fit.sigma_u());

    // Asymptotic covariance of vech(Sigma_u), scaled to the sample.
    let dup_pinv = duplication_pinv(k);
    let cov_sigma = (&dup_pinv * fit.sigma_u().kronecker(fit.sigma_u()) * dup_pinv.transpose())
        * (2.0 / t);

    // H maps vech(Sigma_u) perturbations into vec(P) perturbations.
    let elim = elimination(k);
    let ik = DMatrix::identity(k, k);
    let ik2 = DMatrix::identity(k * k, k * k);
    let inner = &elim * (ik2 + commutation(k, k)) * p_chol.kronecker(&ik) * elim.transpose();
    let inner_inv = inner.try_inverse().ok_or(VarError::SingularBandFactor)?;
    let h_factor = elim.transpose() * inner_inv;

    // Powers of the transposed companion matrix, restricted afterwards to
    // their first K rows.
    let companion_t = fit.companion().transpose();
    let mut powers = Vec::with_capacity(horizon.max(1));
    powers.push(DMatrix::identity(kp, kp));
    for i in 1..horizon {
        let next = &powers[i - 1] * &companion_t;
        powers.push(next);
    }

    let p_t_kron_i = p_chol.transpose().kronecker(&ik);

    let mut se = Vec::with_capacity(horizon + 1);
    for i in 0..=horizon {
        let cbar = ik.kronecker(&phi[i]) * &h_factor;
        let mut cov = &cbar * &cov_sigma * cbar.transpose();
        if i > 0 {
            let mut g = DMatrix::zeros(k * k, k * kp);
            for m in 0..i {
                let lead = powers[i - 1 - m].rows(0, k).into_owned();
                g += lead.kronecker(&phi[m]);
            }
            let c = &p_t_kron_i * g;
            cov += &c * &cov_coef * c.transpose();
        }
        // Diagonal entries of a covariance can dip below zero by rounding.
        let se_i = DMatrix::from_fn(k, k, |r, c| cov[(c * k + r, c * k + r)].max(0.0).sqrt());
        se.push(se_i);
    }
    Ok(se)
}
