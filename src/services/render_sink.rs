use std::io;

use thiserror::Error;

use crate::services::chart_plot::{ChartPlotError, write_chart_png};
use crate::services::dashboard::DashboardView;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to write view: {0}")]
    Write(#[from] io::Error),
    #[error("failed to serialize view: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to plot chart: {0}")]
    Plot(#[from] ChartPlotError),
}

/// Presentation layer consuming a finished dashboard view.
pub trait RenderSink {
    fn render(&self, view: &DashboardView) -> Result<(), RenderError>;
}

/// Writes the view-model as pretty JSON for a page script to apply.
pub struct JsonViewSink {
    pub output_path: String,
}

impl RenderSink for JsonViewSink {
    fn render(&self, view: &DashboardView) -> Result<(), RenderError> {
        let json = serde_json::to_string_pretty(view)?;
        std::fs::write(&self.output_path, json)?;
        Ok(())
    }
}

pub struct PngChartSink {
    pub output_path: String,
}

impl RenderSink for PngChartSink {
    fn render(&self, view: &DashboardView) -> Result<(), RenderError> {
        write_chart_png(&self.output_path, &view.chart, view.progress.as_ref())?;
        Ok(())
    }
}
