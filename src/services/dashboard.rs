use chrono::Local;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::display_fields::DisplayFields;
use crate::services::chart_series::{build_growth_chart, build_projection_chart};
use crate::services::chart_types::{ChartKind, ChartModel};
use crate::services::currency_format::{format_compact, format_currency};
use crate::services::dashboard_config::{DashboardConfig, DashboardConfigError};
use crate::services::data_source::{DataSource, FetchError, LocationSource};
use crate::services::metadata_csv::load_metadata;
use crate::services::period_csv::{PeriodCsvError, parse_period_records};
use crate::services::progress::{ProgressView, progress_view};
use crate::services::projection_types::{Projection, ScenarioOutcome};
use crate::services::scenario_projection::{ProjectionError, project_scenarios};

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("failed to load dashboard config: {0}")]
    Config(#[from] DashboardConfigError),
    #[error("failed to fetch period data: {0}")]
    FetchPeriods(#[from] FetchError),
    #[error("failed to parse period data: {0}")]
    ParsePeriods(#[from] PeriodCsvError),
    #[error("failed to project scenarios: {0}")]
    Projection(#[from] ProjectionError),
}

/// Text for the page elements matched by `selector`, in document order.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TextSubstitution {
    pub selector: String,
    pub values: Vec<String>,
}

impl TextSubstitution {
    fn new(selector: &str, values: Vec<String>) -> Self {
        Self {
            selector: selector.to_string(),
            values,
        }
    }
}

/// Everything the presentation layer needs to draw one dashboard.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub generated_on: String,
    pub periods_paid: usize,
    pub horizon: usize,
    pub outcome: Option<ScenarioOutcome>,
    pub chart: ChartModel,
    pub progress: Option<ProgressView>,
    pub text: Vec<TextSubstitution>,
}

impl DashboardView {
    pub fn text_for(&self, selector: &str) -> Option<&[String]> {
        self.text
            .iter()
            .find(|substitution| substitution.selector == selector)
            .map(|substitution| substitution.values.as_slice())
    }
}

pub fn render_dashboard_from_config_file(
    config_path: &str,
) -> Result<DashboardView, DashboardError> {
    let config = DashboardConfig::from_yaml_file(config_path)?;
    let source = LocationSource::new(config.fetch_timeout())?;
    render_dashboard(&config, &source)
}

/// Loads metadata, then period data, projects the scenarios and assembles the
/// view. Missing metadata degrades to defaults; missing period data fails.
pub fn render_dashboard(
    config: &DashboardConfig,
    source: &dyn DataSource,
) -> Result<DashboardView, DashboardError> {
    let metadata = load_metadata(source, config.metadata.as_deref());
    if metadata.is_empty() {
        debug!("rendering with default display fields");
    }
    let fields = DisplayFields::from_metadata(&metadata, &config.defaults);

    let records = parse_period_records(&source.fetch_text(&config.data)?)?;
    let historical = records.len();
    let periods_paid = match fields.periods_paid.map(|paid| paid as usize) {
        Some(paid) if paid > historical => {
            warn!(
                periods_paid = paid,
                records = historical,
                "metadata reports more paid periods than recorded, using the record count"
            );
            historical
        }
        Some(paid) => paid,
        None => historical,
    };
    let horizon = config
        .total_periods
        .unwrap_or_else(|| match fields.periods_pending {
            Some(pending) => periods_paid + pending as usize,
            None => config.defaults.total_periods as usize,
        })
        .max(historical);
    let contribution = match fields.contribution {
        Some(value) => value,
        None => records
            .last()
            .map(|record| record.contribution)
            .ok_or(ProjectionError::EmptyHistory)?,
    };

    let projection = project_scenarios(&records, horizon, contribution)?;
    let walker_width = config.walker_width();
    let chart = match config.chart {
        ChartKind::Projection => {
            build_projection_chart(&projection, periods_paid, walker_width.is_some())
        }
        ChartKind::Growth => build_growth_chart(&records, walker_width.is_some()),
    };
    let progress = progress_view(periods_paid, horizon, walker_width);
    let outcome = projection.final_values();

    info!(
        records = historical,
        periods_paid,
        horizon,
        metadata_fields = metadata.len(),
        "dashboard rendered"
    );

    Ok(DashboardView {
        generated_on: Local::now().date_naive().format("%Y-%m-%d").to_string(),
        periods_paid,
        horizon,
        outcome,
        chart,
        progress,
        text: text_substitutions(&fields, &projection, periods_paid, horizon),
    })
}

fn text_substitutions(
    fields: &DisplayFields,
    projection: &Projection,
    periods_paid: usize,
    horizon: usize,
) -> Vec<TextSubstitution> {
    let current = projection.last_real_valuation().unwrap_or(0.0);
    let mut text = vec![
        TextSubstitution::new(
            ".detail-value",
            vec![
                fields.policy_number.clone(),
                fields.holder_name.clone(),
                fields.product_name.clone(),
                format_currency(projection.contribution),
                periods_paid.to_string(),
                horizon.saturating_sub(periods_paid).to_string(),
            ],
        ),
        TextSubstitution::new(".value-amount", vec![format_currency(current)]),
    ];

    if let Some(outcome) = projection.final_values() {
        text.push(TextSubstitution::new(
            ".bubble-optimistic",
            vec![format_compact(outcome.optimistic)],
        ));
        text.push(TextSubstitution::new(
            ".bubble-mean",
            vec![format_compact(outcome.mean)],
        ));
        text.push(TextSubstitution::new(
            ".bubble-pessimistic",
            vec![format_compact(outcome.pessimistic)],
        ));
    }

    text.push(TextSubstitution::new(".nota", vec![fields.note.clone()]));
    text.push(TextSubstitution::new(
        ".fidelity-text",
        vec![fields.fidelity_text.clone()],
    ));
    text
}
