use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct ReturnStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct ScenarioRates {
    pub optimistic: f64,
    pub mean: f64,
    pub pessimistic: f64,
}

/// Final projected value per scenario.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct ScenarioOutcome {
    pub optimistic: f64,
    pub mean: f64,
    pub pessimistic: f64,
}

/// Parallel value sequences, all `horizon` long.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ScenarioSeries {
    pub real: Vec<Option<f64>>,
    pub optimistic: Vec<f64>,
    pub mean: Vec<f64>,
    pub pessimistic: Vec<f64>,
    pub gross: Vec<f64>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Projection {
    pub historical_periods: usize,
    pub horizon: usize,
    pub contribution: f64,
    pub stats: ReturnStats,
    pub rates: ScenarioRates,
    pub series: ScenarioSeries,
}

impl Projection {
    pub fn last_real_valuation(&self) -> Option<f64> {
        self.series.real.iter().rev().find_map(|value| *value)
    }

    pub fn final_values(&self) -> Option<ScenarioOutcome> {
        Some(ScenarioOutcome {
            optimistic: *self.series.optimistic.last()?,
            mean: *self.series.mean.last()?,
            pessimistic: *self.series.pessimistic.last()?,
        })
    }
}
