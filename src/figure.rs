use std::ops::Range;
use std::path::{Path, PathBuf};

use anyhow::Result;
use plotters::prelude::*;
use thiserror::Error;

use crate::color::{ColorMap, Rgb};
use crate::config;
use crate::data::model::{Dataset, ParamValue};

// ---------------------------------------------------------------------------
// Series assembly
// ---------------------------------------------------------------------------

/// One plotted series: all measurements sharing a probability value.
/// Built once and shared by the PNG renderer and the interactive viewer so
/// both surfaces show identical grouping, colours and legend labels.
#[derive(Debug, Clone)]
pub struct SeriesData {
    pub probability: ParamValue,
    pub label: String,
    pub color: Rgb,
    pub points: Vec<(f64, f64)>,
}

/// Assemble the per-probability series in ascending probability order.
pub fn build_series(dataset: &Dataset, colors: &ColorMap) -> Vec<SeriesData> {
    dataset
        .probabilities
        .iter()
        .map(|p| SeriesData {
            probability: p.clone(),
            label: format!("Probability p={p}"),
            color: colors.color_for(p),
            points: dataset.partition(p),
        })
        .collect()
}

/// Axis range covering `values` with a 5% margin on both sides.
/// Non-finite values are skipped; degenerate and empty inputs fall back to
/// a unit span so the chart can always be built.
fn padded_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        if v.is_finite() {
            min = min.min(v);
            max = max.max(v);
        }
    }
    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }
    if min == max {
        return (min - 0.5)..(max + 0.5);
    }
    let pad = (max - min) * 0.05;
    (min - pad)..(max + pad)
}

// ---------------------------------------------------------------------------
// PNG rendering
// ---------------------------------------------------------------------------

/// Rendering failure, with the offending output path attached.
#[derive(Debug, Error)]
#[error("failed to render {}: {message}", path.display())]
pub struct RenderError {
    pub path: PathBuf,
    pub message: String,
}

/// Marker half-extent in pixels; with the stroke below this matches the
/// weight of the markers in the interactive view.
const MARKER_SIZE: i32 = 12;
const MARKER_STROKE: u32 = 3;

/// Render the fundamental diagram to a PNG file at `path`.
///
/// One cross-marker scatter series per distinct probability, ascending
/// legend order, axis labels and title from [`config`]. The output is
/// deterministic for a given dataset.
pub fn render_png(dataset: &Dataset, colors: &ColorMap, path: &Path) -> Result<(), RenderError> {
    draw_chart(dataset, colors, path).map_err(|e| RenderError {
        path: path.to_path_buf(),
        message: format!("{e:#}"),
    })
}

fn draw_chart(dataset: &Dataset, colors: &ColorMap, path: &Path) -> Result<()> {
    let series = build_series(dataset, colors);
    let x_range = padded_range(dataset.records.iter().map(|r| r.density));
    let y_range = padded_range(dataset.records.iter().map(|r| r.flow));

    let root =
        BitMapBackend::new(path, (config::FIG_WIDTH, config::FIG_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(config::TITLE, ("sans-serif", 75).into_font())
        .margin(20)
        .x_label_area_size(110)
        .y_label_area_size(140)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc(config::X_LABEL)
        .y_desc(config::Y_LABEL)
        .axis_desc_style(("sans-serif", 58))
        .label_style(("sans-serif", 40))
        .draw()?;

    for s in &series {
        let (r, g, b) = s.color;
        let style = RGBColor(r, g, b).stroke_width(MARKER_STROKE);
        chart
            .draw_series(
                s.points
                    .iter()
                    .map(|(x, y)| Cross::new((*x, *y), MARKER_SIZE, style)),
            )?
            .label(&s.label)
            .legend(move |(x, y)| Cross::new((x + 10, y), MARKER_SIZE, style));
    }

    if !series.is_empty() {
        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .position(SeriesLabelPosition::UpperRight)
            .label_font(("sans-serif", 42))
            .draw()?;
    }

    root.present()?;
    Ok(())
}
