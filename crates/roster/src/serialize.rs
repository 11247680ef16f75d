//! Structured output for the `list` command.
//!
//! Handles JSON, YAML and CSV serialization of query results.

use std::collections::BTreeSet;

use clap::ValueEnum;
use roster_seeker::PageResult;
use serde::Serialize;
use serde_json::Value as JsonValue;
use thiserror::Error;

/// Output format for the `--output` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON of the whole page result
    #[default]
    Json,
    /// YAML of the whole page result
    Yaml,
    /// One CSV row per candidate on the page
    Csv,
}

/// Errors that can occur during serialization.
#[derive(Debug, Error)]
pub enum SerializeError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV serialization failed: {0}")]
    Csv(String),
}

/// Renders a page of results in the given format.
///
/// JSON and YAML carry the whole page with its totals; CSV carries only the
/// candidate rows.
pub fn serialize<T: Serialize>(
    page: &PageResult<T>,
    format: OutputFormat,
) -> Result<String, SerializeError> {
    match format {
        OutputFormat::Json => to_json(page),
        OutputFormat::Yaml => to_yaml(page),
        OutputFormat::Csv => to_csv(&page.candidates),
    }
}

/// Serializes data to pretty-printed JSON.
pub fn to_json<T: Serialize>(data: &T) -> Result<String, SerializeError> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Serializes data to YAML.
pub fn to_yaml<T: Serialize>(data: &T) -> Result<String, SerializeError> {
    Ok(serde_yaml::to_string(data)?)
}

/// Serializes records to CSV, one row per record.
///
/// Columns are the union of all record keys in alphabetical order, so extra
/// fields present on only some records still get a column. Missing values
/// and nulls are empty cells; nested values are written as JSON.
pub fn to_csv<T: Serialize>(rows: &[T]) -> Result<String, SerializeError> {
    let objects = rows
        .iter()
        .map(|row| match serde_json::to_value(row)? {
            JsonValue::Object(map) => Ok(map),
            _ => Err(SerializeError::Csv("CSV rows must be objects".into())),
        })
        .collect::<Result<Vec<_>, _>>()?;

    if objects.is_empty() {
        return Ok(String::new());
    }

    let columns: BTreeSet<&str> = objects
        .iter()
        .flat_map(|map| map.keys().map(String::as_str))
        .collect();

    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(&columns).map_err(csv_error)?;
    for map in &objects {
        let row = columns
            .iter()
            .map(|column| map.get(*column).map(cell).unwrap_or_default());
        wtr.write_record(row).map_err(csv_error)?;
    }

    let bytes = wtr.into_inner().map_err(csv_error)?;
    String::from_utf8(bytes).map_err(csv_error)
}

fn csv_error(err: impl std::fmt::Display) -> SerializeError {
    SerializeError::Csv(err.to_string())
}

fn cell(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}
