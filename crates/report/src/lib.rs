//! # minerva-report
//!
//! Presentation layer for the analysis pipeline: SVG impulse-response
//! charts and plain-text report blocks.
//!
//! ## Workflow
//!
//! ```mermaid
//! graph LR
//!     A["PlotStyle::default().with_width(..)"] --> B["render_irf_chart(&irf, ..)?"]
//!     B --> C["one SVG per country"]
//!     D["panel_preview / causality_table / verdict"] --> E["stdout report"]
//! ```
//!
//! Chart styling always travels through [`PlotStyle`]; nothing is read from
//! process-global state, so two charts with different styles can be rendered
//! from the same process.

mod chart;
mod config;
mod error;
mod summary;

pub use chart::render_irf_chart;
pub use config::PlotStyle;
pub use error::ReportError;
pub use summary::{causality_table, cholesky_ordering, panel_preview, verdict};
