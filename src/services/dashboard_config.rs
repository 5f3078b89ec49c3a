use std::io;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::display_fields::DisplayDefaults;
use crate::services::chart_types::ChartKind;
use crate::services::data_source::is_remote;

#[derive(Error, Debug)]
pub enum DashboardConfigError {
    #[error("failed to read dashboard config: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse dashboard config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DashboardConfig {
    /// Period data location, a path or an http(s) URL.
    pub data: String,
    #[serde(default)]
    pub metadata: Option<String>,
    /// Overrides `periods_paid + periods_pending` as the chart horizon.
    #[serde(default)]
    pub total_periods: Option<usize>,
    #[serde(default)]
    pub chart: ChartKind,
    #[serde(default = "default_progress_indicator")]
    pub progress_indicator: bool,
    #[serde(default = "default_container_width")]
    pub container_width: f64,
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
    #[serde(default)]
    pub defaults: DisplayDefaults,
}

fn default_progress_indicator() -> bool {
    true
}

fn default_container_width() -> f64 {
    600.0
}

fn default_fetch_timeout_secs() -> u64 {
    30
}

impl DashboardConfig {
    pub fn from_yaml_str(contents: &str) -> Result<Self, DashboardConfigError> {
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Loads the config; relative local locations resolve against the
    /// config file's directory.
    pub fn from_yaml_file(path: &str) -> Result<Self, DashboardConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::from_yaml_str(&contents)?;
        if let Some(base) = Path::new(path).parent() {
            config.data = resolve_location(base, &config.data);
            config.metadata = config
                .metadata
                .as_deref()
                .map(|location| resolve_location(base, location));
        }
        Ok(config)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Walker container width, or `None` when the page has no walker.
    pub fn walker_width(&self) -> Option<f64> {
        self.progress_indicator.then_some(self.container_width)
    }
}

fn resolve_location(base: &Path, location: &str) -> String {
    if is_remote(location) || Path::new(location).is_absolute() {
        return location.to_string();
    }
    base.join(location).to_string_lossy().into_owned()
}
