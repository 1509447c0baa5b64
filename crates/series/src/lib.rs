//! # minerva-series
//!
//! Monthly time-series containers and stationarity transforms.
//!
//! ## Pipeline Position
//!
//! ```mermaid
//! graph LR
//!     A["MonthlySeries::from_observations(dates, values)"] --> B["consolidate(&series)?"]
//!     B --> C["Panel (inner join, no gaps)"]
//!     C -->|".to_stationary(&transforms)?"| D["Panel (stationary)"]
//! ```
//!
//! Observation dates are normalized to their containing [`Month`]; duplicate
//! months keep the last observation. [`consolidate`] inner-joins series on
//! month, and [`Panel::to_stationary`] applies one [`Transform`] per column,
//! dropping rows with non-finite results.

mod error;
mod month;
mod panel;
mod series;
mod transform;

pub use error::SeriesError;
pub use month::Month;
pub use panel::{Panel, consolidate};
pub use series::MonthlySeries;
pub use transform::Transform;
