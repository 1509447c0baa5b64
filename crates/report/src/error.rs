//! Error types for minerva-report.

use std::path::PathBuf;

/// Error type for all fallible operations in the minerva-report crate.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Returned when the configured chart dimensions cannot back a drawing
    /// surface.
    #[error("invalid chart dimensions {width}x{height}")]
    InvalidDimensions {
        /// Configured width in pixels.
        width: u32,
        /// Configured height in pixels.
        height: u32,
    },

    /// Returned when the requested impulse/response pair is not part of the
    /// analysis results.
    #[error("unknown impulse/response pair '{impulse}' -> '{response}'")]
    UnknownPair {
        /// Requested shock variable.
        impulse: String,
        /// Requested responding variable.
        response: String,
    },

    /// Wraps a failure from the drawing backend while writing a chart.
    #[error("failed to render {}: {reason}", path.display())]
    Render {
        /// Path of the chart being written.
        path: PathBuf,
        /// Description of the underlying drawing failure.
        reason: String,
    },
}
