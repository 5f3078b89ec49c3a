use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use thiserror::Error;

use crate::services::chart_series::{build_growth_chart, build_projection_chart};
use crate::services::chart_types::{AxisId, ChartKind, ChartModel, Rgba, SeriesDescriptor};
use crate::services::currency_format::{format_axis_millions, format_compact};
use crate::services::period_csv::{PeriodCsvError, parse_period_records};
use crate::services::progress::ProgressView;
use crate::services::scenario_projection::{ProjectionError, project_scenarios};

const WIDTH: u32 = 1000;
const HEIGHT: u32 = 600;
const WALKER_HEIGHT: i32 = 8;

#[derive(Error, Debug)]
pub enum ChartPlotError {
    #[error("failed to read period data: {0}")]
    ReadPeriods(#[from] std::io::Error),
    #[error("failed to parse period data: {0}")]
    ParsePeriods(#[from] PeriodCsvError),
    #[error("failed to project scenarios: {0}")]
    Projection(#[from] ProjectionError),
    #[error("chart has no periods to draw")]
    EmptyChart,
    #[error("failed to render chart: {0}")]
    Plot(String),
}

type Point = (f64, f64);

/// Consecutive drawable points sharing one dash state.
#[derive(Debug, PartialEq)]
struct Run {
    dashed: bool,
    points: Vec<Point>,
}

fn plot_err<E: std::fmt::Display>(e: E) -> ChartPlotError {
    ChartPlotError::Plot(e.to_string())
}

fn color(rgba: Rgba) -> RGBAColor {
    RGBAColor(rgba.r, rgba.g, rgba.b, rgba.a)
}

fn caption(kind: ChartKind) -> &'static str {
    match kind {
        ChartKind::Projection => "Savings Projection",
        ChartKind::Growth => "Savings Growth",
    }
}

fn tick_label(value: f64, scale_max: f64) -> String {
    if scale_max.abs() >= 1_000_000.0 {
        format_axis_millions(value)
    } else {
        format_compact(value)
    }
}

/// Splits a series into runs, breaking on gaps and on dash changes.
fn runs(series: &SeriesDescriptor) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut current: Vec<Point> = Vec::new();
    let mut dashed = false;

    for (index, value) in series.data.iter().enumerate() {
        let Some(value) = value.filter(|v| v.is_finite()) else {
            if current.len() > 1 {
                runs.push(Run {
                    dashed,
                    points: std::mem::take(&mut current),
                });
            }
            current.clear();
            continue;
        };
        let point = (index as f64, value);
        let segment_dashed =
            !series.dash.is_empty() && series.points.get(index).is_some_and(|p| p.dashed);

        match current.len() {
            0 => current.push(point),
            1 => {
                dashed = segment_dashed;
                current.push(point);
            }
            _ if segment_dashed != dashed => {
                let last = current[current.len() - 1];
                runs.push(Run {
                    dashed,
                    points: std::mem::replace(&mut current, vec![last, point]),
                });
                dashed = segment_dashed;
            }
            _ => current.push(point),
        }
    }
    if current.len() > 1 {
        runs.push(Run {
            dashed,
            points: current,
        });
    }
    runs
}

/// Plots period data: the growth chart, or the projection chart when a
/// horizon is given.
pub fn plot_from_csv_file(
    input_path: &str,
    output_path: &str,
    horizon: Option<usize>,
    contribution: Option<f64>,
) -> Result<(), ChartPlotError> {
    let text = std::fs::read_to_string(input_path)?;
    let records = parse_period_records(&text)?;
    if records.is_empty() {
        return Err(ChartPlotError::EmptyChart);
    }

    let chart = match horizon {
        Some(horizon) => {
            let contribution = contribution
                .or_else(|| records.last().map(|record| record.contribution))
                .unwrap_or(0.0);
            let projection = project_scenarios(&records, horizon, contribution)?;
            build_projection_chart(&projection, records.len(), false)
        }
        None => build_growth_chart(&records, false),
    };
    write_chart_png(output_path, &chart, None)
}

/// Draws the chart model as a PNG, with the progress walker under the plot.
pub fn write_chart_png(
    output_path: &str,
    chart: &ChartModel,
    progress: Option<&ProgressView>,
) -> Result<(), ChartPlotError> {
    if chart.labels.is_empty() {
        return Err(ChartPlotError::EmptyChart);
    }

    let root = BitMapBackend::new(output_path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;
    let (plot_area, walker_area) = root.split_vertically(HEIGHT as i32 - 40);

    let x_max = (chart.labels.len().saturating_sub(1)).max(1) as f64;
    let primary = chart.primary_axis;
    let secondary = chart.axis_range(AxisId::Secondary);
    let right_labels = if chart.secondary_axis.is_some() { 80 } else { 0 };

    let mut ctx = ChartBuilder::on(&plot_area)
        .margin(20)
        .caption(caption(chart.kind), ("sans-serif", 30))
        .x_label_area_size(45)
        .y_label_area_size(80)
        .right_y_label_area_size(right_labels)
        .build_cartesian_2d(0.0..x_max, primary.min..primary.max)
        .map_err(plot_err)?
        .set_secondary_coord(0.0..x_max, secondary.min..secondary.max);

    let labels = &chart.labels;
    ctx.configure_mesh()
        .disable_x_mesh()
        .x_desc("Period")
        .y_desc("Accumulated total")
        .label_style(("sans-serif", 14))
        .axis_desc_style(("sans-serif", 16))
        .x_labels(8)
        .x_label_formatter(&|x| {
            labels
                .get(x.round().max(0.0) as usize)
                .map(|period| period.to_string())
                .unwrap_or_default()
        })
        .y_label_formatter(&|y| tick_label(*y, primary.max))
        .draw()
        .map_err(plot_err)?;

    if chart.secondary_axis.is_some() {
        ctx.configure_secondary_axes()
            .y_desc("Returns and savings")
            .label_style(("sans-serif", 14))
            .axis_desc_style(("sans-serif", 16))
            .y_label_formatter(&|y| tick_label(*y, secondary.max))
            .draw()
            .map_err(plot_err)?;
    }

    for series in chart.draw_sequence() {
        let stroke = color(series.color);
        let style = ShapeStyle::from(&stroke).stroke_width(series.width);
        let (dash_size, dash_spacing) = match series.dash.as_slice() {
            [size, spacing, ..] => (*size, *spacing),
            [size] => (*size, *size),
            [] => (0, 0),
        };
        let on_secondary = series.axis == AxisId::Secondary;

        for run in runs(series) {
            if let Some(fill) = series.fill {
                let baseline = if on_secondary { secondary.min } else { primary.min };
                let area = AreaSeries::new(run.points.clone(), baseline, color(fill));
                if on_secondary {
                    ctx.draw_secondary_series(area).map_err(plot_err)?;
                } else {
                    ctx.draw_series(area).map_err(plot_err)?;
                }
            }

            if run.dashed {
                let line = DashedLineSeries::new(run.points, dash_size, dash_spacing, style);
                if on_secondary {
                    ctx.draw_secondary_series(line).map_err(plot_err)?;
                } else {
                    ctx.draw_series(line).map_err(plot_err)?;
                }
            } else {
                let line = LineSeries::new(run.points, style);
                if on_secondary {
                    ctx.draw_secondary_series(line).map_err(plot_err)?;
                } else {
                    ctx.draw_series(line).map_err(plot_err)?;
                }
            }
        }

        let markers = series
            .data
            .iter()
            .zip(&series.points)
            .enumerate()
            .filter_map(|(index, (value, point))| {
                let value = value.filter(|v| v.is_finite())?;
                (point.radius > 0.0).then(|| {
                    Circle::new((index as f64, value), point.radius as i32, stroke.filled())
                })
            });
        if on_secondary {
            ctx.draw_secondary_series(markers).map_err(plot_err)?;
        } else {
            ctx.draw_series(markers).map_err(plot_err)?;
        }

        ctx.draw_series(LineSeries::new(Vec::<Point>::new(), style))
            .map_err(plot_err)?
            .label(series.label.clone())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
    }

    ctx.configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK.mix(0.3))
        .label_font(("sans-serif", 14))
        .draw()
        .map_err(plot_err)?;

    if let Some(progress) = progress {
        draw_walker(&walker_area, progress)?;
    }

    root.present().map_err(plot_err)?;
    Ok(())
}

fn draw_walker<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    progress: &ProgressView,
) -> Result<(), ChartPlotError> {
    let (width, _) = area.dim_in_pixel();
    let left = 100;
    let right = width as i32 - 100;
    let filled = left + ((right - left) as f64 * progress.fill_width / 100.0) as i32;
    let track = RGBColor(220, 220, 220);
    let fill = RGBColor(30, 136, 229);

    area.draw(&Rectangle::new(
        [(left, 10), (right, 10 + WALKER_HEIGHT)],
        track.filled(),
    ))
    .map_err(plot_err)?;
    area.draw(&Rectangle::new(
        [(left, 10), (filled, 10 + WALKER_HEIGHT)],
        fill.filled(),
    ))
    .map_err(plot_err)?;
    area.draw(&Text::new(
        progress.label.clone(),
        (right + 10, 6),
        ("sans-serif", 16).into_font(),
    ))
    .map_err(plot_err)?;
    Ok(())
}
