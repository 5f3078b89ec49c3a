use std::collections::HashMap;

/// Open-ended `field -> value` mapping loaded from the metadata file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectMetadata {
    fields: HashMap<String, String>,
}

impl ProjectMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fields(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn get_or<'a>(&'a self, field: &str, default: &'a str) -> &'a str {
        self.get(field).unwrap_or(default)
    }

    /// Parses the field as a number; absent or unparsable values yield `None`.
    pub fn get_number(&self, field: &str) -> Option<f64> {
        self.get(field)
            .and_then(|value| value.trim().replace(['$', ','], "").parse::<f64>().ok())
            .filter(|value| value.is_finite())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
