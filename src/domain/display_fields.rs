use serde::Deserialize;

use crate::domain::metadata::ProjectMetadata;

pub const DEFAULT_POLICY_NUMBER: &str = "N/A";
pub const DEFAULT_HOLDER_NAME: &str = "Policy holder";
pub const DEFAULT_PRODUCT_NAME: &str = "Savings plan";
pub const DEFAULT_NOTE: &str =
    "Projected values are estimates based on past returns and are not guaranteed.";
pub const DEFAULT_FIDELITY_TEXT: &str = "Thank you for saving with us.";
/// Plan length used when neither the config nor the metadata give one.
pub const DEFAULT_TOTAL_PERIODS: u32 = 1150;
/// Larger period counts in metadata are treated as unparsable.
pub const MAX_PERIOD_COUNT: u32 = 100_000;

/// Text defaults applied when a metadata field is absent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DisplayDefaults {
    pub policy_number: String,
    pub holder_name: String,
    pub product_name: String,
    pub note: String,
    pub fidelity_text: String,
    pub periods_pending: Option<u32>,
    pub total_periods: u32,
}

impl Default for DisplayDefaults {
    fn default() -> Self {
        Self {
            policy_number: DEFAULT_POLICY_NUMBER.to_string(),
            holder_name: DEFAULT_HOLDER_NAME.to_string(),
            product_name: DEFAULT_PRODUCT_NAME.to_string(),
            note: DEFAULT_NOTE.to_string(),
            fidelity_text: DEFAULT_FIDELITY_TEXT.to_string(),
            periods_pending: None,
            total_periods: DEFAULT_TOTAL_PERIODS,
        }
    }
}

/// Typed view over [`ProjectMetadata`] used to fill the page.
///
/// `periods_paid` and `contribution` have no fixed default: when absent they
/// are taken from the period data (record count and last contribution).
/// Without `periods_pending` the horizon falls back to the default total.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayFields {
    pub policy_number: String,
    pub holder_name: String,
    pub product_name: String,
    pub periods_paid: Option<u32>,
    pub periods_pending: Option<u32>,
    pub contribution: Option<f64>,
    pub note: String,
    pub fidelity_text: String,
}

impl DisplayFields {
    pub fn from_metadata(metadata: &ProjectMetadata, defaults: &DisplayDefaults) -> Self {
        let pending = period_count(metadata, "periods_pending");
        Self {
            policy_number: metadata
                .get_or("policy_number", &defaults.policy_number)
                .to_string(),
            holder_name: metadata
                .get_or("holder_name", &defaults.holder_name)
                .to_string(),
            product_name: metadata
                .get_or("product_name", &defaults.product_name)
                .to_string(),
            periods_paid: period_count(metadata, "periods_paid"),
            periods_pending: pending.or(defaults.periods_pending),
            contribution: metadata
                .get_number("contribution")
                .filter(|value| *value >= 0.0),
            note: metadata.get_or("note", &defaults.note).to_string(),
            fidelity_text: metadata
                .get_or("fidelity_text", &defaults.fidelity_text)
                .to_string(),
        }
    }
}

fn period_count(metadata: &ProjectMetadata, field: &str) -> Option<u32> {
    metadata
        .get_number(field)
        .filter(|value| *value >= 0.0 && value.fract() == 0.0)
        .filter(|value| *value <= f64::from(MAX_PERIOD_COUNT))
        .map(|value| value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn empty_metadata_uses_every_default() {
        let fields =
            DisplayFields::from_metadata(&ProjectMetadata::new(), &DisplayDefaults::default());

        assert_eq!(fields.policy_number, DEFAULT_POLICY_NUMBER);
        assert_eq!(fields.holder_name, DEFAULT_HOLDER_NAME);
        assert_eq!(fields.product_name, DEFAULT_PRODUCT_NAME);
        assert_eq!(fields.note, DEFAULT_NOTE);
        assert_eq!(fields.fidelity_text, DEFAULT_FIDELITY_TEXT);
        assert_eq!(fields.periods_paid, None);
        assert_eq!(fields.periods_pending, None);
        assert_eq!(fields.contribution, None);
    }

    #[test]
    fn metadata_values_override_defaults() {
        let mut map = HashMap::new();
        map.insert("policy_number".to_string(), "POL-778".to_string());
        map.insert("periods_paid".to_string(), "52".to_string());
        map.insert("periods_pending".to_string(), "1098".to_string());
        map.insert("contribution".to_string(), "25000".to_string());
        let metadata = ProjectMetadata::from_fields(map);
        let fields = DisplayFields::from_metadata(&metadata, &DisplayDefaults::default());

        assert_eq!(fields.policy_number, "POL-778");
        assert_eq!(fields.periods_paid, Some(52));
        assert_eq!(fields.periods_pending, Some(1098));
        assert_eq!(fields.contribution, Some(25000.0));
        assert_eq!(fields.holder_name, DEFAULT_HOLDER_NAME);
    }

    #[test]
    fn negative_counts_fall_back() {
        let mut map = HashMap::new();
        map.insert("periods_pending".to_string(), "-4".to_string());
        let defaults = DisplayDefaults {
            periods_pending: Some(10),
            ..DisplayDefaults::default()
        };
        let fields = DisplayFields::from_metadata(&ProjectMetadata::from_fields(map), &defaults);
        assert_eq!(fields.periods_pending, Some(10));
    }

    #[test]
    fn fractional_and_oversized_counts_fall_back() {
        let mut map = HashMap::new();
        map.insert("periods_paid".to_string(), "2.7".to_string());
        map.insert("periods_pending".to_string(), "1e12".to_string());
        let defaults = DisplayDefaults {
            periods_pending: Some(10),
            ..DisplayDefaults::default()
        };
        let fields = DisplayFields::from_metadata(&ProjectMetadata::from_fields(map), &defaults);

        assert_eq!(fields.periods_paid, None);
        assert_eq!(fields.periods_pending, Some(10));
    }

    #[test]
    fn counts_up_to_the_limit_are_kept() {
        let mut map = HashMap::new();
        map.insert("periods_paid".to_string(), "3.0".to_string());
        map.insert("periods_pending".to_string(), MAX_PERIOD_COUNT.to_string());
        let metadata = ProjectMetadata::from_fields(map);
        let fields = DisplayFields::from_metadata(&metadata, &DisplayDefaults::default());

        assert_eq!(fields.periods_paid, Some(3));
        assert_eq!(fields.periods_pending, Some(MAX_PERIOD_COUNT));
    }
}
