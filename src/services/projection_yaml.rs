use std::io::{self, Write};

use serde::Serialize;

use crate::services::projection_types::{Projection, ReturnStats, ScenarioRates};

#[derive(Serialize)]
struct ProjectionRecord {
    historical_periods: usize,
    horizon: usize,
    contribution: f64,
    returns: ReturnStats,
    rates: ScenarioRates,
    periods: Vec<PeriodValues>,
}

#[derive(Serialize)]
struct PeriodValues {
    period: usize,
    real: Option<f64>,
    optimistic: f64,
    mean: f64,
    pessimistic: f64,
    gross: f64,
}

pub fn serialize_projection_to_yaml<W: Write>(
    writer: &mut W,
    projection: &Projection,
) -> io::Result<()> {
    let series = &projection.series;
    let periods = (0..projection.horizon)
        .map(|index| PeriodValues {
            period: index + 1,
            real: series.real[index],
            optimistic: series.optimistic[index],
            mean: series.mean[index],
            pessimistic: series.pessimistic[index],
            gross: series.gross[index],
        })
        .collect();

    let record = ProjectionRecord {
        historical_periods: projection.historical_periods,
        horizon: projection.horizon,
        contribution: projection.contribution,
        returns: projection.stats,
        rates: projection.rates,
        periods,
    };

    let yaml = serde_yaml::to_string(&record).map_err(io::Error::other)?;
    writer.write_all(yaml.as_bytes())
}
