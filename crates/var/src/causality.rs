//! Granger causality testing.
//!
//! The test restricts every lag coefficient of the candidate cause in the
//! effect's equation to zero and measures the restriction with a Wald
//! statistic, reported in F form against an F(p, K * df_resid) reference
//! distribution.

use nalgebra::{Cholesky, DMatrix, DVector};
use statrs::distribution::{ContinuousCDF, FisherSnedecor};
use tracing::debug;

use crate::error::VarError;
use crate::fit::VarFit;

/// Result of a Granger causality test of `cause` on `effect`.
#[derive(Debug, Clone)]
pub struct CausalityTest {
    cause: String,
    effect: String,
    statistic: f64,
    p_value: f64,
    critical_value: f64,
    df_num: usize,
    df_den: usize,
    significance: f64,
    rejects: bool,
}

impl CausalityTest {
    /// Returns the name of the candidate causal variable.
    pub fn cause(&self) -> &str {
        &self.cause
    }

    /// Returns the name of the affected variable.
    pub fn effect(&self) -> &str {
        &self.effect
    }

    /// Returns the F statistic of the restriction.
    pub fn statistic(&self) -> f64 {
        self.statistic
    }

    /// Returns the p-value of the test.
    pub fn p_value(&self) -> f64 {
        self.p_value
    }

    /// Returns the critical value at the configured significance level.
    pub fn critical_value(&self) -> f64 {
        self.critical_value
    }

    /// Returns the `(numerator, denominator)` degrees of freedom.
    pub fn df(&self) -> (usize, usize) {
        (self.df_num, self.df_den)
    }

    /// Returns the significance level the decision was taken at.
    pub fn significance(&self) -> f64 {
        self.significance
    }

    /// Returns whether the no-causality hypothesis is rejected, which is the
    /// case exactly when the p-value falls below the significance level.
    pub fn rejects(&self) -> bool {
        self.rejects
    }
}

/// Tests whether lags of `cause` help predict `effect` in the fitted model.
///
/// The degrees of freedom are recomputed from the fitted model, so a lag
/// order chosen by information criterion carries through to the reference
/// distribution.
///
/// # Errors
///
/// Returns [`VarError::InvalidSignificance`] unless `significance` lies
/// strictly between zero and one, [`VarError::UnknownVariable`] if either
/// name is not in the model, and [`VarError::SingularRegressors`] if the
/// restriction covariance cannot be factored.
pub fn granger_causality(
    fit: &VarFit,
    cause: &str,
    effect: &str,
    significance: f64,
) -> Result<CausalityTest, VarError> {
    if !(significance > 0.0 && significance < 1.0) {
        return Err(VarError::InvalidSignificance { significance });
    }
    let c = lookup(fit, cause)?;
    let e = lookup(fit, effect)?;

    let k = fit.n_vars();
    let p = fit.order();

    // Tested restriction: the coefficient on every lag of the cause in the
    // effect's equation is zero.
    let restrictions = DVector::from_fn(p, |j, _| fit.coefs()[j][(e, c)]);

    // Covariance of those p estimates, read off the per-equation OLS
    // covariance sigma_ee * (Z'Z)^-1 at the restricted positions.
    let zz_inv = fit.zz_inv();
    let sigma_ee = fit.sigma_u()[(e, e)];
    let sigma_sub = DMatrix::from_fn(p, p, |a, b| {
        sigma_ee * zz_inv[(1 + a * k + c, 1 + b * k + c)]
    });

    let chol = Cholesky::new(sigma_sub).ok_or(VarError::SingularRegressors { order: p })?;
    let wald = restrictions.dot(&chol.solve(&restrictions));
    let statistic = wald / p as f64;

    let df_num = p;
    let df_den = k * fit.df_resid();
    // Both degrees of freedom are at least one for any successful fit.
    let reference = FisherSnedecor::new(df_num as f64, df_den as f64)
        .expect("degrees of freedom are positive");
    let p_value = 1.0 - reference.cdf(statistic);
    let critical_value = reference.inverse_cdf(1.0 - significance);
    let rejects = p_value < significance;

    debug!(
        cause,
        effect, statistic, p_value, rejects, "Granger causality test evaluated"
    );

    Ok(CausalityTest {
        cause: cause.to_string(),
        effect: effect.to_string(),
        statistic,
        p_value,
        critical_value,
        df_num,
        df_den,
        significance,
        rejects,
    })
}

fn lookup(fit: &VarFit, name: &str) -> Result<usize, VarError> {
    fit.index_of(name).ok_or_else(|| VarError::UnknownVariable {
        name: name.to_string(),
    })
}
