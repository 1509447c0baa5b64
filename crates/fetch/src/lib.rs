//! # minerva-fetch
//!
//! Blocking download of monthly macroeconomic series from the public
//! Banco Central do Brasil SGS and FRED endpoints.
//!
//! ## Workflow
//!
//! ```mermaid
//! graph LR
//!     A["SeriesRequest::new(name, source, start)"] -->|"fetch(&request)?"| B["MonthlySeries"]
//!     C["ClientConfig::default()"] --> D["HttpProvider::new(&config)"]
//!     D --> A
//! ```
//!
//! Each request downloads exactly one series. Any failure carries the
//! logical series name and aborts the batch; there is no partial-result
//! path. The analysis pipeline depends only on the [`SeriesProvider`]
//! trait, which keeps the HTTP layer out of its tests.

mod bcb;
mod client;
mod error;
mod fred;
mod provider;

pub use client::ClientConfig;
pub use error::FetchError;
pub use provider::{HttpProvider, SeriesProvider, SeriesRequest, SourceKind};
