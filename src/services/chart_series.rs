use crate::domain::period_record::PeriodRecord;
use crate::services::chart_types::{
    AxisId, AxisRange, ChartKind, ChartModel, PointStyle, Rgba, SeriesDescriptor,
};
use crate::services::projection_types::Projection;

const BOUNDARY_MARKER_RADIUS: f64 = 6.0;
const UPPER_MARGIN: f64 = 0.10;
const LOWER_MARGIN: f64 = 0.05;
const LOWER_MARGIN_WITH_PROGRESS: f64 = 0.15;
const SECONDARY_HEADROOM: f64 = 1.1;

const GRAY: Rgba = Rgba::opaque(200, 200, 200);
const BLUE: Rgba = Rgba::opaque(30, 136, 229);
const GREEN: Rgba = Rgba::opaque(67, 160, 71);
const ORANGE: Rgba = Rgba::opaque(251, 140, 0);
const SLATE: Rgba = Rgba::opaque(117, 117, 117);

/// Index of the last paid period, if it falls inside the chart.
pub fn boundary_index(periods_paid: usize, len: usize) -> Option<usize> {
    periods_paid.checked_sub(1).filter(|index| *index < len)
}

/// Marker only on the boundary point; dashed segments past it.
pub fn point_styles(len: usize, boundary: Option<usize>) -> Vec<PointStyle> {
    (0..len)
        .map(|index| PointStyle {
            radius: if Some(index) == boundary {
                BOUNDARY_MARKER_RADIUS
            } else {
                0.0
            },
            dashed: boundary.is_some_and(|b| index > b),
        })
        .collect()
}

fn uniform_styles(len: usize, dashed: bool) -> Vec<PointStyle> {
    vec![
        PointStyle {
            radius: 0.0,
            dashed,
        };
        len
    ]
}

fn finite_bounds(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|value| value.is_finite())
        .fold(None, |bounds, value| match bounds {
            None => Some((value, value)),
            Some((min, max)) => Some((min.min(value), max.max(value))),
        })
}

/// Range for cumulative values. The lower margin grows when the progress
/// walker is drawn under the curve.
pub fn primary_axis_range(
    values: impl IntoIterator<Item = f64>,
    with_progress: bool,
) -> Option<AxisRange> {
    let (min, max) = finite_bounds(values)?;
    let mut range = max - min;
    if range == 0.0 {
        range = max.abs().max(1.0);
    }
    let lower = if with_progress {
        LOWER_MARGIN_WITH_PROGRESS
    } else {
        LOWER_MARGIN
    };
    Some(AxisRange {
        min: min - range * lower,
        max: max + range * UPPER_MARGIN,
    })
}

/// Zero-based range for the smaller return and contribution lines.
pub fn secondary_axis_range(values: impl IntoIterator<Item = f64>) -> Option<AxisRange> {
    let (_, max) = finite_bounds(values)?;
    let max = if max > 0.0 { max * SECONDARY_HEADROOM } else { 1.0 };
    Some(AxisRange { min: 0.0, max })
}

fn present(values: &[f64]) -> Vec<Option<f64>> {
    values.iter().copied().map(Some).collect()
}

fn period_labels(len: usize) -> Vec<u32> {
    (1..=len as u32).collect()
}

/// Recorded valuation plus the three scenario trajectories and gross savings,
/// all on the primary axis.
pub fn build_projection_chart(
    projection: &Projection,
    periods_paid: usize,
    with_progress: bool,
) -> ChartModel {
    let series = &projection.series;
    let len = projection.horizon;
    let boundary = boundary_index(periods_paid, len);
    let styles = point_styles(len, boundary);

    let descriptors = vec![
        SeriesDescriptor {
            label: "Recorded valuation".to_string(),
            color: GRAY.with_alpha(0.8),
            fill: Some(GRAY.with_alpha(0.3)),
            width: 1,
            dash: Vec::new(),
            axis: AxisId::Primary,
            order: 4,
            data: series.real.clone(),
            points: styles.clone(),
        },
        SeriesDescriptor {
            label: "Optimistic scenario".to_string(),
            color: GREEN,
            fill: None,
            width: 2,
            dash: vec![6, 4],
            axis: AxisId::Primary,
            order: 1,
            data: present(&series.optimistic),
            points: styles.clone(),
        },
        SeriesDescriptor {
            label: "Mean scenario".to_string(),
            color: BLUE,
            fill: None,
            width: 3,
            dash: vec![6, 4],
            axis: AxisId::Primary,
            order: 2,
            data: present(&series.mean),
            points: styles.clone(),
        },
        SeriesDescriptor {
            label: "Pessimistic scenario".to_string(),
            color: ORANGE,
            fill: None,
            width: 2,
            dash: vec![6, 4],
            axis: AxisId::Primary,
            order: 3,
            data: present(&series.pessimistic),
            points: styles,
        },
        SeriesDescriptor {
            label: "Gross savings".to_string(),
            color: SLATE,
            fill: None,
            width: 1,
            dash: vec![2, 3],
            axis: AxisId::Primary,
            order: 5,
            data: present(&series.gross),
            points: uniform_styles(len, true),
        },
    ];

    let values = series
        .optimistic
        .iter()
        .chain(&series.mean)
        .chain(&series.pessimistic)
        .chain(&series.gross)
        .copied();
    let primary_axis =
        primary_axis_range(values, with_progress).unwrap_or(AxisRange { min: 0.0, max: 1.0 });

    ChartModel {
        kind: ChartKind::Projection,
        labels: period_labels(len),
        series: descriptors,
        primary_axis,
        secondary_axis: None,
        boundary,
    }
}

/// Accumulated valuation as a filled area on the primary axis, with returns
/// generated and gross savings on a secondary axis.
pub fn build_growth_chart(records: &[PeriodRecord], with_progress: bool) -> ChartModel {
    let len = records.len();
    let valuation: Vec<f64> = records.iter().map(|record| record.valuation).collect();

    let mut contributed = 0.0;
    let (gross, returns): (Vec<f64>, Vec<f64>) = records
        .iter()
        .map(|record| {
            contributed += record.contribution;
            let gross = record.gross_savings.unwrap_or(contributed);
            let returns = record
                .returns_generated()
                .unwrap_or(record.valuation - contributed);
            (gross, returns)
        })
        .unzip();

    let boundary = len.checked_sub(1);
    let descriptors = vec![
        SeriesDescriptor {
            label: "My accumulated savings".to_string(),
            color: GRAY.with_alpha(0.8),
            fill: Some(GRAY.with_alpha(0.3)),
            width: 1,
            dash: Vec::new(),
            axis: AxisId::Primary,
            order: 3,
            data: present(&valuation),
            points: point_styles(len, boundary),
        },
        SeriesDescriptor {
            label: "Returns generated".to_string(),
            color: BLUE,
            fill: None,
            width: 4,
            dash: Vec::new(),
            axis: AxisId::Secondary,
            order: 1,
            data: present(&returns),
            points: uniform_styles(len, false),
        },
        SeriesDescriptor {
            label: "Voluntary savings".to_string(),
            color: GREEN,
            fill: None,
            width: 3,
            dash: vec![8, 4],
            axis: AxisId::Secondary,
            order: 2,
            data: present(&gross),
            points: uniform_styles(len, true),
        },
    ];

    ChartModel {
        kind: ChartKind::Growth,
        labels: records.iter().map(|record| record.period).collect(),
        series: descriptors,
        primary_axis: primary_axis_range(valuation.iter().copied(), with_progress)
            .unwrap_or(AxisRange { min: 0.0, max: 1.0 }),
        secondary_axis: secondary_axis_range(returns.iter().chain(&gross).copied()),
        boundary,
    }
}
