//! File readers for the three input tables.
//!
//! CSV headers are lower-cased on read so the on-disk casing does not
//! matter. The publications JSON feed is tolerated with trailing commas
//! before closing braces/brackets (present in real exports).

use std::path::Path;

use lazy_static::lazy_static;
use medgraph_common::{MedgraphError, Result};
use regex::Regex;
use serde_json::Value;
use tracing::debug;

use crate::models::{RawDrug, RawPublication, RawTrial};

lazy_static! {
    /// Matches a comma followed by a closing brace/bracket: ", }" or ", ]".
    static ref TRAILING_COMMA: Regex = Regex::new(r",\s*([}\]])").unwrap();
}

/// Read the drug reference CSV. Expected columns: `atccode`, `drug`.
pub fn read_drugs_csv(path: &Path) -> Result<Vec<RawDrug>> {
    let (headers, records) = read_csv_lowercase(path)?;
    ensure_column("drugs", &headers, "atccode")?;
    ensure_column("drugs", &headers, "drug")?;

    let rows = records
        .iter()
        .map(|rec| rec.deserialize(Some(&headers)))
        .collect::<std::result::Result<Vec<RawDrug>, _>>()?;
    debug!(rows = rows.len(), path = %path.display(), "read drugs csv");
    Ok(rows)
}

/// Read the publications CSV. Expected columns: `id`, `title`, `journal`,
/// `date`; only `id` is mandatory.
pub fn read_pubmed_csv(path: &Path) -> Result<Vec<RawPublication>> {
    let (headers, records) = read_csv_lowercase(path)?;
    ensure_column("pubmed", &headers, "id")?;

    let rows = records
        .iter()
        .map(|rec| rec.deserialize(Some(&headers)))
        .collect::<std::result::Result<Vec<RawPublication>, _>>()?;
    debug!(rows = rows.len(), path = %path.display(), "read pubmed csv");
    Ok(rows)
}

/// Read the publications JSON feed: an array of objects with the same
/// columns as the CSV. Non-string scalar values are stringified; keys are
/// matched case-insensitively.
pub fn read_pubmed_json(path: &Path) -> Result<Vec<RawPublication>> {
    let text = std::fs::read_to_string(path)?;
    let cleaned = TRAILING_COMMA.replace_all(&text, "$1");
    let rows: Vec<Value> = serde_json::from_str(&cleaned)?;

    let parsed = rows
        .iter()
        .map(|row| {
            let id = field_text(row, "id").ok_or(MedgraphError::MissingColumn {
                table: "pubmed",
                column: "id",
            })?;
            Ok(RawPublication {
                id,
                title: field_text(row, "title"),
                journal: field_text(row, "journal"),
                date: field_text(row, "date"),
            })
        })
        .collect::<Result<Vec<_>>>()?;
    debug!(rows = parsed.len(), path = %path.display(), "read pubmed json");
    Ok(parsed)
}

/// Read the clinical-trials CSV. Expected columns: `id`,
/// `scientific_title`, `journal`, `date`; only `id` is mandatory.
pub fn read_clinical_trials_csv(path: &Path) -> Result<Vec<RawTrial>> {
    let (headers, records) = read_csv_lowercase(path)?;
    ensure_column("clinical_trials", &headers, "id")?;

    let rows = records
        .iter()
        .map(|rec| rec.deserialize(Some(&headers)))
        .collect::<std::result::Result<Vec<RawTrial>, _>>()?;
    debug!(rows = rows.len(), path = %path.display(), "read clinical trials csv");
    Ok(rows)
}

// ── Helpers ──────────────────────────────────────────────────────────────────

/// Read a CSV file, returning its lower-cased header row plus all records.
fn read_csv_lowercase(path: &Path) -> Result<(csv::StringRecord, Vec<csv::StringRecord>)> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();
    let headers = csv::StringRecord::from(headers);

    let mut records = Vec::new();
    for record in reader.records() {
        records.push(record?);
    }
    Ok((headers, records))
}

fn ensure_column(
    table: &'static str,
    headers: &csv::StringRecord,
    column: &'static str,
) -> Result<()> {
    if headers.iter().any(|h| h == column) {
        Ok(())
    } else {
        Err(MedgraphError::MissingColumn { table, column })
    }
}

/// Extract a field as text, matching the key case-insensitively.
/// `null`/absent become `None`; non-string scalars are stringified.
fn field_text(row: &Value, key: &str) -> Option<String> {
    let object = row.as_object()?;
    let value = object
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(key))
        .map(|(_, v)| v)?;
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
