use csv::{ReaderBuilder, StringRecord, Trim};
use thiserror::Error;
use tracing::debug;

use crate::domain::period_record::PeriodRecord;

const REQUIRED_COLUMNS: usize = 4;
const COLUMN_NAMES: [&str; 6] = [
    "period",
    "contribution",
    "return_pct",
    "valuation",
    "gross_savings",
    "projected_total",
];

#[derive(Error, Debug)]
pub enum PeriodCsvError {
    #[error("failed to read period csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: expected at least 4 columns, found {found}")]
    MissingColumns { line: u64, found: usize },
    #[error("line {line}: invalid {column} value '{value}'")]
    InvalidField {
        line: u64,
        column: &'static str,
        value: String,
    },
}

/// Parses period data: a header line followed by one row per elapsed period.
///
/// Columns are positional: period, contribution, return percentage,
/// valuation, and optionally gross savings and projected total.
pub fn parse_period_records(text: &str) -> Result<Vec<PeriodRecord>, PeriodCsvError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.trim().as_bytes());

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        records.push(parse_row(&row)?);
    }
    debug!(records = records.len(), "parsed period data");
    Ok(records)
}

fn parse_row(row: &StringRecord) -> Result<PeriodRecord, PeriodCsvError> {
    let line = row.position().map(|pos| pos.line()).unwrap_or(0);
    if row.len() < REQUIRED_COLUMNS {
        return Err(PeriodCsvError::MissingColumns {
            line,
            found: row.len(),
        });
    }

    let period = row[0]
        .parse::<u32>()
        .map_err(|_| invalid_field(line, 0, &row[0]))?;
    let mut record = PeriodRecord::new(
        period,
        parse_amount(row, line, 1)?,
        parse_amount(row, line, 2)?,
        parse_amount(row, line, 3)?,
    );
    record.gross_savings = parse_optional_amount(row, line, 4)?;
    record.projected_total = parse_optional_amount(row, line, 5)?;
    Ok(record)
}

fn parse_amount(row: &StringRecord, line: u64, column: usize) -> Result<f64, PeriodCsvError> {
    let raw = &row[column];
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| invalid_field(line, column, raw))
}

fn parse_optional_amount(
    row: &StringRecord,
    line: u64,
    column: usize,
) -> Result<Option<f64>, PeriodCsvError> {
    match row.get(column) {
        Some(raw) if !raw.is_empty() => parse_amount(row, line, column).map(Some),
        _ => Ok(None),
    }
}

fn invalid_field(line: u64, column: usize, value: &str) -> PeriodCsvError {
    PeriodCsvError::InvalidField {
        line,
        column: COLUMN_NAMES[column],
        value: value.to_string(),
    }
}
