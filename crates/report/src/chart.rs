//! SVG rendering of impulse-response charts.

use std::path::Path;

use minerva_var::ImpulseResponse;
use plotters::prelude::*;
use tracing::info;

use crate::config::PlotStyle;
use crate::error::ReportError;

/// Renders the response of `response` to an orthogonalized shock in
/// `impulse`: the point path, the shaded confidence band and a zero
/// reference line, written as one SVG file at `path`.
///
/// # Errors
///
/// Returns [`ReportError::InvalidDimensions`] for a zero-sized style,
/// [`ReportError::UnknownPair`] if the pair is not part of the results, and
/// [`ReportError::Render`] if the backend fails while drawing or writing.
pub fn render_irf_chart(
    irf: &ImpulseResponse,
    impulse: &str,
    response: &str,
    title: &str,
    path: &Path,
    style: &PlotStyle,
) -> Result<(), ReportError> {
    style.validate()?;

    let point = irf
        .point(response, impulse)
        .map_err(|_| unknown_pair(impulse, response))?;
    let (lower, upper) = irf
        .band(response, impulse)
        .map_err(|_| unknown_pair(impulse, response))?;
    let band_label = format!("{:.0}% confidence band", (1.0 - irf.significance()) * 100.0);

    draw(path, title, &band_label, &point, &lower, &upper, style).map_err(|e| {
        ReportError::Render {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
    })?;

    info!(
        path = %path.display(),
        impulse,
        response,
        "wrote impulse-response chart"
    );
    Ok(())
}

fn unknown_pair(impulse: &str, response: &str) -> ReportError {
    ReportError::UnknownPair {
        impulse: impulse.to_string(),
        response: response.to_string(),
    }
}

fn draw(
    path: &Path,
    title: &str,
    band_label: &str,
    point: &[f64],
    lower: &[f64],
    upper: &[f64],
    style: &PlotStyle,
) -> Result<(), Box<dyn std::error::Error>> {
    let (lr, lg, lb) = style.line_rgb();
    let line_color = RGBColor(lr, lg, lb);
    let (br, bg, bb) = style.band_rgb();
    let band_color = RGBColor(br, bg, bb);

    let x_max = point.len().saturating_sub(1).max(1) as f64;
    // The band brackets the point path, so its extremes bound the chart;
    // zero stays in range for the reference line.
    let mut y_min = 0.0f64;
    let mut y_max = 0.0f64;
    for value in lower.iter().chain(upper.iter()) {
        y_min = y_min.min(*value);
        y_max = y_max.max(*value);
    }
    if y_min == y_max {
        y_min -= 1.0;
        y_max += 1.0;
    }
    let pad = 0.05 * (y_max - y_min);

    let root = SVGBackend::new(path, (style.width(), style.height())).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 20))
        .margin(12)
        .x_label_area_size(36)
        .y_label_area_size(48)
        .build_cartesian_2d(0.0..x_max, (y_min - pad)..(y_max + pad))?;

    chart
        .configure_mesh()
        .x_desc("months after shock")
        .y_desc("response")
        .draw()?;

    let band: Vec<(f64, f64)> = lower
        .iter()
        .enumerate()
        .map(|(h, v)| (h as f64, *v))
        .chain(
            upper
                .iter()
                .enumerate()
                .rev()
                .map(|(h, v)| (h as f64, *v)),
        )
        .collect();
    chart
        .draw_series(std::iter::once(Polygon::new(band, band_color.mix(0.3))))?
        .label(band_label)
        .legend(move |(x, y)| {
            Rectangle::new([(x, y - 5), (x + 14, y + 5)], band_color.mix(0.3).filled())
        });

    chart
        .draw_series(LineSeries::new(
            point.iter().enumerate().map(|(h, v)| (h as f64, *v)),
            line_color.stroke_width(2),
        ))?
        .label("orthogonalized response")
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 14, y)], line_color.stroke_width(2))
        });

    chart.draw_series(LineSeries::new([(0.0, 0.0), (x_max, 0.0)], BLACK.mix(0.4)))?;

    chart
        .configure_series_labels()
        .border_style(BLACK.mix(0.4))
        .background_style(WHITE.mix(0.85))
        .draw()?;

    root.present()?;
    Ok(())
}
