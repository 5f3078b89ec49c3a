use std::collections::HashMap;

use crate::domain::period_record::PeriodRecord;
use crate::services::data_source::{DataSource, FetchError};

// In-memory documents keyed by location; anything else is not found.
#[derive(Default)]
pub struct StaticSource {
    documents: HashMap<String, String>,
}

impl StaticSource {
    pub fn with(mut self, location: &str, text: &str) -> Self {
        self.documents.insert(location.to_string(), text.to_string());
        self
    }
}

impl DataSource for StaticSource {
    fn fetch_text(&self, location: &str) -> Result<String, FetchError> {
        self.documents
            .get(location)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(location.to_string()))
    }
}

/// Builds consecutive records from `(valuation, return_pct)` pairs with a
/// contribution of 100 per period.
pub fn build_history(points: &[(f64, f64)]) -> Vec<PeriodRecord> {
    points
        .iter()
        .enumerate()
        .map(|(index, (valuation, return_pct))| {
            PeriodRecord::new(index as u32 + 1, 100.0, *return_pct, *valuation)
        })
        .collect()
}

pub fn period_csv(points: &[(f64, f64)]) -> String {
    let mut text = String::from("period,contribution,return_pct,valuation,gross_savings\n");
    for (index, (valuation, return_pct)) in points.iter().enumerate() {
        let gross = (index + 1) as f64 * 100.0;
        text.push_str(&format!(
            "{},100,{return_pct},{valuation},{gross}\n",
            index + 1
        ));
    }
    text
}

pub fn assert_close(actual: f64, expected: f64) {
    let tolerance = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}
