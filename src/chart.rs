//! Chart of the feasible region, with the optimal production mix marked.
//!
//! [ChartSpec] is a plain description of what to draw, computed from an [Analysis].
//! [render_svg] and [to_svg_string] draw it with [plotters].
use std::ops::Range;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use thiserror::Error;
use tracing::debug;

use crate::analysis::Analysis;
use crate::problem::ProductionRequest;

/// Size of the rendered chart, in pixels
pub const CHART_SIZE: (u32, u32) = (800, 500);

const LINE_COLORS: [RGBColor; 2] = [RGBColor(31, 119, 180), RGBColor(255, 127, 14)];

/// An error that occurred while drawing a chart
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("unable to draw the chart: {0}")]
    Draw(String),
}

fn draw_error<E: std::fmt::Display>(error: E) -> ChartError {
    ChartError::Draw(error.to_string())
}

/// A labelled polyline
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

/// Everything needed to draw the feasible region of a production problem
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// One line per resource constraint
    pub boundaries: Vec<Series>,
    /// Upper edge of the feasible region: the lowest boundary at each x, never below 0
    pub feasible_region: Vec<(f64, f64)>,
    /// Optimal quantities of the two products
    pub optimum: (f64, f64),
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
}

impl ChartSpec {
    pub fn new(request: &ProductionRequest, analysis: &Analysis) -> Self {
        let units = request.resources().map(|resource| resource.unit.as_str());
        let boundaries: Vec<Series> = analysis
            .boundaries
            .iter()
            .zip(units.into_iter().chain(std::iter::repeat("")))
            .map(|(line, unit)| Series {
                label: series_label(line.name(), unit),
                points: line.points().collect(),
            })
            .collect();
        let feasible_region = analysis
            .x_range
            .values()
            .map(|x| {
                let lowest = analysis
                    .boundaries
                    .iter()
                    .map(|line| line.y_at(x))
                    .fold(f64::INFINITY, f64::min);
                (x, lowest.max(0.))
            })
            .collect();
        let y_max = boundaries
            .iter()
            .flat_map(|series| series.points.iter().map(|&(_, y)| y))
            .fold(f64::NEG_INFINITY, f64::max);
        let spec = ChartSpec {
            title: "Feasible region".to_string(),
            x_label: request.first.name.clone(),
            y_label: request.second.name.clone(),
            boundaries,
            feasible_region,
            optimum: (analysis.plan.x, analysis.plan.y),
            x_range: axis_range(analysis.x_range.max()),
            y_range: axis_range(y_max),
        };
        debug!(x_range = ?spec.x_range, y_range = ?spec.y_range, "chart extents");
        spec
    }
}

/// "Time constraint (hours)", or "Time constraint" when the unit is unknown
fn series_label(name: &str, unit: &str) -> String {
    if unit.trim().is_empty() {
        format!("{} constraint", name)
    } else {
        format!("{} constraint ({})", name, unit)
    }
}

/// `[0, max]`, widened to `[0, 1]` when it would be empty
fn axis_range(max: f64) -> Range<f64> {
    if max.is_finite() && max > 0. {
        0.0..max
    } else {
        0.0..1.0
    }
}

/// Draws the chart to an SVG file
pub fn render_svg<P: AsRef<Path>>(spec: &ChartSpec, path: P) -> Result<(), ChartError> {
    let root = SVGBackend::new(path.as_ref(), CHART_SIZE).into_drawing_area();
    draw(&root, spec)?;
    root.present().map_err(draw_error)
}

/// Draws the chart to an SVG document held in memory
pub fn to_svg_string(spec: &ChartSpec) -> Result<String, ChartError> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        draw(&root, spec)?;
        root.present().map_err(draw_error)?;
    }
    Ok(svg)
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    spec: &ChartSpec,
) -> Result<(), ChartError> {
    root.fill(&WHITE).map_err(draw_error)?;
    let mut chart = ChartBuilder::on(root)
        .caption(&spec.title, ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(spec.x_range.clone(), spec.y_range.clone())
        .map_err(draw_error)?;
    chart
        .configure_mesh()
        .x_desc(spec.x_label.as_str())
        .y_desc(spec.y_label.as_str())
        .draw()
        .map_err(draw_error)?;

    chart
        .draw_series(AreaSeries::new(
            spec.feasible_region.iter().copied(),
            0.,
            LINE_COLORS[0].mix(0.3).filled(),
        ))
        .map_err(draw_error)?
        .label("Feasible region")
        .legend(|(x, y)| {
            Rectangle::new([(x, y - 5), (x + 20, y + 5)], LINE_COLORS[0].mix(0.3).filled())
        });

    for (i, series) in spec.boundaries.iter().enumerate() {
        let color = LINE_COLORS[i % LINE_COLORS.len()];
        chart
            .draw_series(LineSeries::new(
                series.points.iter().copied(),
                color.stroke_width(2),
            ))
            .map_err(draw_error)?
            .label(series.label.as_str())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
    }

    let (optimal_x, optimal_y) = spec.optimum;
    chart
        .draw_series(DashedLineSeries::new(
            vec![(optimal_x, spec.y_range.start), (optimal_x, spec.y_range.end)],
            8,
            4,
            RED.stroke_width(1),
        ))
        .map_err(draw_error)?
        .label(format!("Optimal {}", spec.x_label))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(1)));
    chart
        .draw_series(DashedLineSeries::new(
            vec![(spec.x_range.start, optimal_y), (spec.x_range.end, optimal_y)],
            8,
            4,
            GREEN.stroke_width(1),
        ))
        .map_err(draw_error)?
        .label(format!("Optimal {}", spec.y_label))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN.stroke_width(1)));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8).filled())
        .border_style(BLACK.stroke_width(1))
        .draw()
        .map_err(draw_error)
}
