//! # minerva-var
//!
//! Vector autoregression estimation, impulse-response analysis and Granger
//! causality testing on stationary monthly panels.
//!
//! ## Workflow
//!
//! ```mermaid
//! graph LR
//!     A["VarData::new(names, columns)?"] -->|"fit_with_aic(&data, max_lags)?"| B["VarFit"]
//!     B --> C[".coefs() — lag coefficient matrices"]
//!     B --> D[".sigma_u() — residual covariance"]
//!     B --> E["orthogonalized(&fit, horizon, signif)?"]
//!     B --> F["granger_causality(&fit, cause, effect, signif)?"]
//!     E --> G["ImpulseResponse::point / band"]
//!     F --> H["CausalityTest::rejects"]
//! ```
//!
//! ## Two Usage Paths
//!
//! **Direct fit** (known lag order):
//! ```ignore
//! let fitted = fit(&data, 2)?;
//! ```
//!
//! **AIC search** (unknown lag order):
//! ```ignore
//! let (fitted, selection) = fit_with_aic(&data, 12)?;
//! ```
//!
//! ## Mathematical Glossary
//!
//! | Symbol | Accessor | Meaning |
//! |--------|----------|---------|
//! | A_j | [`VarFit::coefs()`] | Lag-j coefficient matrix: weights on values j months back |
//! | Sigma_u | [`VarFit::sigma_u()`] | Residual covariance across equations |
//! | AIC | [`VarFit::aic()`] | Akaike Information Criterion (lower = better) |
//! | Theta_h | [`ImpulseResponse::point()`] | Response h months after an orthogonalized shock |
//! | F | [`CausalityTest::statistic()`] | Wald restriction statistic in F form |

mod causality;
mod data;
mod error;
mod fit;
mod irf;
mod selection;

pub(crate) mod linalg;

pub use causality::{CausalityTest, granger_causality};
pub use data::VarData;
pub use error::VarError;
pub use fit::{VarFit, fit};
pub use irf::{ImpulseResponse, orthogonalized};
pub use selection::{LagSelection, fit_with_aic, select_order};
