//! Line chart rendering for derived career series.
//!
//! Charts are drawn into an in-memory RGB buffer with the plotters bitmap
//! backend and encoded as PNG. Each call owns its buffer; nothing is kept
//! between renders.
//!
//! Seasons with a non-finite value (zero games played) are skipped: no marker
//! is drawn, the line breaks around them, and they do not affect the axis
//! range.

use std::fmt;
use std::ops::Range;
use std::path::Path;
use std::sync::OnceLock;

use base64::Engine;
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle};
use tracing::{debug, info};

use crate::config;
use crate::error::{Result, StatsError};
use crate::models::DerivedPoint;

const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

static SANS_SERIF_TTF: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");
static FONT_REGISTERED: OnceLock<std::result::Result<(), String>> = OnceLock::new();

/// Register the embedded font as plotters' `sans-serif` family, once per process.
fn ensure_font() -> Result<()> {
    FONT_REGISTERED
        .get_or_init(|| {
            plotters::style::register_font("sans-serif", FontStyle::Normal, SANS_SERIF_TTF)
                .map_err(|_| "embedded font is not a valid TrueType file".to_string())
        })
        .clone()
        .map_err(StatsError::Render)
}

// ---------------------------------------------------------------------------
// ChartLabels
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartLabels {
    pub x_label: String,
    pub y_label: String,
    pub title: String,
}

impl ChartLabels {
    pub fn new(x_label: &str, y_label: &str, title: &str) -> Self {
        Self {
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            title: title.to_string(),
        }
    }

    /// Labels for the points + rebounds + assists per game chart.
    pub fn pra() -> Self {
        Self::new("Year", "PRA/G", "Points + Rebounds + Assists Per Game")
    }
}

impl Default for ChartLabels {
    fn default() -> Self {
        Self::pra()
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Render `series` as a line chart with point markers and return PNG bytes.
///
/// Points are plotted in the order given. The canvas is
/// [`config::CHART_SIZE`] with grid lines on.
pub fn render_line_chart(series: &[DerivedPoint], labels: &ChartLabels) -> Result<Vec<u8>> {
    ensure_font()?;
    let (width, height) = config::CHART_SIZE;
    let mut pixels = vec![0u8; width as usize * height as usize * 3];
    draw_chart(&mut pixels, (width, height), series, labels)?;

    let skipped = series.iter().filter(|p| !p.is_finite()).count();
    if skipped > 0 {
        debug!(skipped, "left non-finite seasons out of the chart");
    }
    encode_png(&pixels, width, height)
}

/// Render `series` and write the PNG to `path`.
pub fn save_line_chart<P: AsRef<Path>>(
    series: &[DerivedPoint],
    labels: &ChartLabels,
    path: P,
) -> Result<()> {
    let png = render_line_chart(series, labels)?;
    std::fs::write(path.as_ref(), &png)?;
    info!("Wrote chart: {}", path.as_ref().display());
    Ok(())
}

/// Encode PNG bytes as a `data:image/png;base64,...` URI for embedding.
pub fn to_data_uri(png: &[u8]) -> String {
    format!(
        "{}{}",
        PNG_DATA_URI_PREFIX,
        base64::engine::general_purpose::STANDARD.encode(png)
    )
}

fn draw_chart(
    buffer: &mut [u8],
    size: (u32, u32),
    series: &[DerivedPoint],
    labels: &ChartLabels,
) -> Result<()> {
    let root = BitMapBackend::with_buffer(buffer, size).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;

    let (x_range, y_range) = axis_ranges(series);
    let mut chart = ChartBuilder::on(&root)
        .caption(
            labels.title.as_str(),
            FontDesc::new(
                FontFamily::SansSerif,
                f64::from(config::CHART_CAPTION_SIZE),
                FontStyle::Normal,
            ),
        )
        .margin(config::CHART_MARGIN)
        .x_label_area_size(config::CHART_X_LABEL_AREA)
        .y_label_area_size(config::CHART_Y_LABEL_AREA)
        .build_cartesian_2d(x_range, y_range)
        .map_err(render_error)?;

    chart
        .configure_mesh()
        .x_desc(labels.x_label.as_str())
        .y_desc(labels.y_label.as_str())
        .x_label_formatter(&|v| format!("{:.0}", v))
        .y_label_formatter(&|v| format!("{:.1}", v))
        .draw()
        .map_err(render_error)?;

    let (r, g, b) = config::CHART_LINE_RGB;
    let color = RGBColor(r, g, b);

    for segment in finite_segments(series) {
        chart
            .draw_series(LineSeries::new(segment, color.stroke_width(2)))
            .map_err(render_error)?;
    }
    chart
        .draw_series(series.iter().filter(|p| p.is_finite()).map(|p| {
            Circle::new(
                (f64::from(p.season), p.value),
                config::CHART_MARKER_RADIUS,
                color.filled(),
            )
        }))
        .map_err(render_error)?;

    root.present().map_err(render_error)?;
    Ok(())
}

/// Split the series into runs of consecutive finite points.
fn finite_segments(series: &[DerivedPoint]) -> Vec<Vec<(f64, f64)>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();
    for point in series {
        if point.is_finite() {
            current.push((f64::from(point.season), point.value));
        } else if !current.is_empty() {
            segments.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

/// Axis ranges covering the finite points with a small margin.
fn axis_ranges(series: &[DerivedPoint]) -> (Range<f64>, Range<f64>) {
    let finite: Vec<(f64, f64)> = series
        .iter()
        .filter(|p| p.is_finite())
        .map(|p| (f64::from(p.season), p.value))
        .collect();

    if finite.is_empty() {
        let last = series.len().max(1) as f64;
        return (0.0..last + 1.0, 0.0..1.0);
    }

    let (x_min, x_max) = bounds(finite.iter().map(|p| p.0));
    let (y_min, y_max) = bounds(finite.iter().map(|p| p.1));
    (padded(x_min, x_max, 0.5), padded(y_min, y_max, 1.0))
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

/// Pad `[lo, hi]` by 5% of its span, or by `flat_pad` when the span is zero.
fn padded(lo: f64, hi: f64, flat_pad: f64) -> Range<f64> {
    let span = hi - lo;
    let pad = if span > 0.0 { span * 0.05 } else { flat_pad };
    (lo - pad)..(hi + pad)
}

fn render_error<E: fmt::Display>(err: E) -> StatsError {
    StatsError::Render(err.to_string())
}

fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(pixels)?;
        writer.finish()?;
    }
    Ok(out)
}
