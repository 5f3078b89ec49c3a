use thiserror::Error;
use tracing::debug;

use crate::domain::period_record::PeriodRecord;
use crate::services::period_csv::{PeriodCsvError, parse_period_records};
use crate::services::projection_types::{Projection, ReturnStats, ScenarioRates, ScenarioSeries};

const OPTIMISTIC_FACTOR: f64 = 1.5;
const OPTIMISTIC_CAP_PCT: f64 = 4.0;
const PESSIMISTIC_FACTOR: f64 = 0.5;
const PESSIMISTIC_FLOOR_PCT: f64 = -1.0;

#[derive(Error, Debug)]
pub enum ProjectionError {
    #[error("failed to read period data: {0}")]
    ReadPeriods(#[from] std::io::Error),
    #[error("failed to parse period data: {0}")]
    ParsePeriods(#[from] PeriodCsvError),
    #[error("period data is empty")]
    EmptyHistory,
    #[error("horizon of {horizon} periods is shorter than the {historical} recorded periods")]
    HorizonBeforeHistory { horizon: usize, historical: usize },
    #[error("invalid periodic contribution: {0}")]
    InvalidContribution(f64),
}

/// Reads a period data file and projects it to `horizon` periods.
///
/// Without an explicit contribution the last recorded one is used.
pub(crate) fn project_from_csv_file(
    input_path: &str,
    horizon: usize,
    contribution: Option<f64>,
) -> Result<Projection, ProjectionError> {
    let text = std::fs::read_to_string(input_path)?;
    let records = parse_period_records(&text)?;
    let contribution = match contribution {
        Some(value) => value,
        None => records
            .last()
            .map(|record| record.contribution)
            .ok_or(ProjectionError::EmptyHistory)?,
    };
    project_scenarios(&records, horizon, contribution)
}

/// Min, max and mean of the realised return percentages.
pub fn return_stats(records: &[PeriodRecord]) -> Option<ReturnStats> {
    if records.is_empty() {
        return None;
    }
    let returns = records.iter().map(|record| record.return_pct);
    let min = returns.clone().fold(f64::INFINITY, f64::min);
    let max = returns.clone().fold(f64::NEG_INFINITY, f64::max);
    let mean = returns.sum::<f64>() / records.len() as f64;
    Some(ReturnStats { min, max, mean })
}

pub fn scenario_rates(mean: f64) -> ScenarioRates {
    ScenarioRates {
        optimistic: (mean * OPTIMISTIC_FACTOR).min(OPTIMISTIC_CAP_PCT),
        mean,
        pessimistic: (mean * PESSIMISTIC_FACTOR).max(PESSIMISTIC_FLOOR_PCT),
    }
}

/// Running state of one scenario. The surplus is the part of the value
/// produced by compounding, kept apart from raw contributions.
struct Trajectory {
    rate: f64,
    surplus: f64,
    values: Vec<f64>,
}

impl Trajectory {
    fn new(rate: f64, surplus: f64, history: &[f64], horizon: usize) -> Self {
        let mut values = Vec::with_capacity(horizon);
        values.extend_from_slice(history);
        Self {
            rate,
            surplus,
            values,
        }
    }

    fn step(&mut self, gross: f64) {
        let total_so_far = gross + self.surplus;
        self.surplus += total_so_far * (self.rate / 100.0);
        self.values.push(gross + self.surplus);
    }
}

/// Extends the recorded history to `horizon` periods under the optimistic,
/// mean and pessimistic return assumptions.
///
/// In the recorded range the trajectories copy each record's projected total,
/// or its valuation when the file has none. All three compound from the last
/// recorded valuation and only diverge in the projected range.
pub fn project_scenarios(
    records: &[PeriodRecord],
    horizon: usize,
    contribution: f64,
) -> Result<Projection, ProjectionError> {
    let stats = return_stats(records).ok_or(ProjectionError::EmptyHistory)?;
    let historical = records.len();
    if horizon < historical {
        return Err(ProjectionError::HorizonBeforeHistory {
            horizon,
            historical,
        });
    }
    if !contribution.is_finite() || contribution < 0.0 {
        return Err(ProjectionError::InvalidContribution(contribution));
    }

    let rates = scenario_rates(stats.mean);
    let raw_savings = |index: usize| (index + 1) as f64 * contribution;

    let mut real: Vec<Option<f64>> = records.iter().map(|record| Some(record.valuation)).collect();
    real.resize(horizon, None);
    let seed = records[historical - 1].valuation;
    let history: Vec<f64> = records
        .iter()
        .map(|record| record.projected_total.unwrap_or(record.valuation))
        .collect();

    let mut gross: Vec<f64> = records
        .iter()
        .enumerate()
        .map(|(index, record)| record.gross_savings.unwrap_or_else(|| raw_savings(index)))
        .collect();
    gross.reserve(horizon - historical);

    let mut optimistic = Trajectory::new(rates.optimistic, seed, &history, horizon);
    let mut mean = Trajectory::new(rates.mean, seed, &history, horizon);
    let mut pessimistic = Trajectory::new(rates.pessimistic, seed, &history, horizon);

    for index in historical..horizon {
        let raw = raw_savings(index);
        gross.push(raw);
        optimistic.step(raw);
        mean.step(raw);
        pessimistic.step(raw);
    }

    debug!(
        historical,
        horizon,
        mean_rate = rates.mean,
        optimistic_rate = rates.optimistic,
        pessimistic_rate = rates.pessimistic,
        "projected scenarios"
    );

    Ok(Projection {
        historical_periods: historical,
        horizon,
        contribution,
        stats,
        rates,
        series: ScenarioSeries {
            real,
            optimistic: optimistic.values,
            mean: mean.values,
            pessimistic: pessimistic.values,
            gross,
        },
    })
}
