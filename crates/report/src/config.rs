//! Chart styling configuration.

use crate::error::ReportError;

// ---------------------------------------------------------------------------
// PlotStyle
// ---------------------------------------------------------------------------

/// Styling for rendered charts.
///
/// Use the builder methods (`with_*`) to customise dimensions and colors.
/// The [`Default`] implementation matches a 960x576 canvas with a blue
/// response line and a lighter band of the same hue. Styling always travels
/// through this object; nothing is read from process-global state.
#[derive(Debug, Clone)]
pub struct PlotStyle {
    /// Canvas width in pixels.
    width: u32,
    /// Canvas height in pixels.
    height: u32,
    /// RGB color of the response line.
    line_rgb: (u8, u8, u8),
    /// RGB color of the confidence band fill.
    band_rgb: (u8, u8, u8),
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width: 960,
            height: 576,
            line_rgb: (31, 119, 180),
            band_rgb: (114, 158, 206),
        }
    }
}

impl PlotStyle {
    /// Set the canvas width in pixels.
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Set the canvas height in pixels.
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    /// Set the RGB color of the response line.
    pub fn with_line_rgb(mut self, rgb: (u8, u8, u8)) -> Self {
        self.line_rgb = rgb;
        self
    }

    /// Set the RGB color of the confidence band fill.
    pub fn with_band_rgb(mut self, rgb: (u8, u8, u8)) -> Self {
        self.band_rgb = rgb;
        self
    }

    /// Returns the canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the RGB color of the response line.
    pub fn line_rgb(&self) -> (u8, u8, u8) {
        self.line_rgb
    }

    /// Returns the RGB color of the confidence band fill.
    pub fn band_rgb(&self) -> (u8, u8, u8) {
        self.band_rgb
    }

    /// Validate that the configuration can back a drawing surface.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidDimensions`] if either dimension is
    /// zero.
    pub fn validate(&self) -> Result<(), ReportError> {
        if self.width == 0 || self.height == 0 {
            return Err(ReportError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}
