//! AIC-based lag-order selection.

use tracing::debug;

use crate::data::VarData;
use crate::error::VarError;
use crate::fit::{VarFit, fit, fit_with_offset};

/// Outcome of the lag-order search: the winning order and the criterion
/// value of every candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct LagSelection {
    selected: usize,
    aic_by_order: Vec<(usize, f64)>,
}

impl LagSelection {
    /// Returns the selected lag order.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Returns `(order, AIC)` for every candidate, in candidate order.
    pub fn aic_by_order(&self) -> &[(usize, f64)] {
        &self.aic_by_order
    }
}

/// Searches lag orders `1..=max_lags` for the AIC minimum.
///
/// Every candidate is estimated on the common sample implied by `max_lags`
/// (dropping `max_lags - p` extra leading rows) so the criteria compare the
/// same observations. Ties resolve to the smaller order. The search is fully
/// deterministic.
///
/// # Errors
///
/// Returns [`VarError::InvalidLagOrder`] if `max_lags` is zero,
/// [`VarError::InsufficientObservations`] when the sample is shorter than
/// `max_lags + 2` rows, and any estimation error from a candidate fit.
pub fn select_order(data: &VarData, max_lags: usize) -> Result<LagSelection, VarError> {
    if max_lags == 0 {
        return Err(VarError::InvalidLagOrder { order: 0 });
    }
    if data.n_obs() < max_lags + 2 {
        return Err(VarError::InsufficientObservations {
            rows: data.n_obs(),
            min: max_lags + 2,
        });
    }

    let mut aic_by_order = Vec::with_capacity(max_lags);
    let mut best: Option<(usize, f64)> = None;
    for order in 1..=max_lags {
        let candidate = fit_with_offset(data, order, max_lags - order)?;
        let aic = candidate.aic();
        aic_by_order.push((order, aic));
        match best {
            Some((_, best_aic)) if aic >= best_aic => {}
            _ => best = Some((order, aic)),
        }
    }

    // max_lags >= 1, so at least one candidate was evaluated.
    let (selected, aic) = best.expect("at least one candidate order was fitted");
    debug!(selected, aic, max_lags, "lag order selected by AIC");

    Ok(LagSelection {
        selected,
        aic_by_order,
    })
}

/// Selects the lag order by AIC, then refits the winner on the full sample.
///
/// # Errors
///
/// Propagates every error of [`select_order`] and the final [`fit`].
pub fn fit_with_aic(data: &VarData, max_lags: usize) -> Result<(VarFit, LagSelection), VarError> {
    let selection = select_order(data, max_lags)?;
    let fitted = fit(data, selection.selected())?;
    Ok((fitted, selection))
}
