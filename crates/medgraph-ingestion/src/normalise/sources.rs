//! Per-table normalization entry points.
//!
//! Each function consumes a raw table and returns a freshly built
//! normalized one; the input is never mutated. Identifier columns are
//! trimmed only (opaque codes, never case-folded); free-text columns go
//! through the canonical fold; date columns are parsed into calendar
//! dates. Absent optional cells pass through as missing.

use medgraph_common::{DrugRecord, Publication, Result, Trial};
use tracing::debug;

use super::dates::parse_date_series;
use super::text::normalize_text;
use crate::models::{RawDrug, RawPublication, RawTrial};

/// Normalize the drug reference table: trim `atccode`, fold `drug`.
pub fn normalize_drugs(rows: &[RawDrug]) -> Vec<DrugRecord> {
    let out: Vec<DrugRecord> = rows
        .iter()
        .map(|row| DrugRecord {
            atccode: row.atccode.trim().to_string(),
            name: normalize_text(&row.drug),
        })
        .collect();
    debug!(rows = out.len(), "normalized drugs table");
    out
}

/// Normalize the publications table: fold `title` and `journal`, parse
/// `date`. Fails when any present date value is unparseable.
pub fn normalize_publications(rows: &[RawPublication]) -> Result<Vec<Publication>> {
    let raw_dates: Vec<Option<String>> = rows.iter().map(|r| r.date.clone()).collect();
    let dates = parse_date_series(&raw_dates)?;

    let out: Vec<Publication> = rows
        .iter()
        .zip(dates)
        .map(|(row, date)| Publication {
            id: row.id.trim().to_string(),
            title: row.title.as_deref().map(normalize_text),
            journal: row.journal.as_deref().map(normalize_text),
            date,
        })
        .collect();
    debug!(rows = out.len(), "normalized publications table");
    Ok(out)
}

/// Normalize the clinical-trials table: fold `scientific_title` and
/// `journal`, parse `date`. Fails when any present date value is
/// unparseable.
pub fn normalize_trials(rows: &[RawTrial]) -> Result<Vec<Trial>> {
    let raw_dates: Vec<Option<String>> = rows.iter().map(|r| r.date.clone()).collect();
    let dates = parse_date_series(&raw_dates)?;

    let out: Vec<Trial> = rows
        .iter()
        .zip(dates)
        .map(|(row, date)| Trial {
            id: row.id.trim().to_string(),
            scientific_title: row.scientific_title.as_deref().map(normalize_text),
            journal: row.journal.as_deref().map(normalize_text),
            date,
        })
        .collect();
    debug!(rows = out.len(), "normalized trials table");
    Ok(out)
}
