use std::collections::HashMap;

use csv::{ReaderBuilder, Trim};
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::metadata::ProjectMetadata;
use crate::services::data_source::{DataSource, FetchError};

#[derive(Error, Debug)]
pub enum MetadataCsvError {
    #[error("failed to fetch metadata: {0}")]
    Fetch(#[from] FetchError),
    #[error("failed to read metadata csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {0}: expected a field and a value")]
    MalformedLine(u64),
}

/// Loads the metadata document, degrading to an empty mapping on any failure.
///
/// Callers must treat every field as optional.
pub fn load_metadata(source: &dyn DataSource, location: Option<&str>) -> ProjectMetadata {
    let Some(location) = location else {
        debug!("no metadata location configured");
        return ProjectMetadata::new();
    };

    match fetch_metadata(source, location) {
        Ok(metadata) => {
            debug!(location, fields = metadata.len(), "loaded metadata");
            metadata
        }
        Err(e) => {
            warn!(location, error = %e, "metadata unavailable, using defaults");
            ProjectMetadata::new()
        }
    }
}

fn fetch_metadata(
    source: &dyn DataSource,
    location: &str,
) -> Result<ProjectMetadata, MetadataCsvError> {
    let text = source.fetch_text(location)?;
    parse_metadata_csv(&text)
}

/// Parses `field,value` rows after a header line. Later duplicates win.
pub fn parse_metadata_csv(text: &str) -> Result<ProjectMetadata, MetadataCsvError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.trim().as_bytes());

    let mut fields = HashMap::new();
    for row in reader.records() {
        let row = row?;
        let line = row.position().map(|pos| pos.line()).unwrap_or(0);
        if row.len() < 2 {
            return Err(MetadataCsvError::MalformedLine(line));
        }
        let key = &row[0];
        if key.is_empty() {
            continue;
        }
        let value = row.iter().skip(1).collect::<Vec<_>>().join(",");
        fields.insert(key.to_string(), value);
    }
    Ok(ProjectMetadata::from_fields(fields))
}
