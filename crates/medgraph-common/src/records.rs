/// Core record types shared across the pipeline crates.
/// These are the normalized shapes the matcher and aggregators work on;
/// raw on-disk shapes live in the ingestion crate.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Source tables
// ---------------------------------------------------------------------------

/// One row of the drug reference table. `atccode` is an opaque identifier
/// (trimmed, never case-folded); `name` is the free-text drug name, already
/// folded to its canonical comparable form by the normalization stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrugRecord {
    pub atccode: String,
    pub name: String,
}

/// A literature record with normalized text columns and a parsed date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    pub id: String,
    pub title: Option<String>,
    pub journal: Option<String>,
    pub date: Option<NaiveDate>,
}

/// A clinical-trial record. Structurally identical to [`Publication`]
/// except the text field carries the scientific title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trial {
    pub id: String,
    pub scientific_title: Option<String>,
    pub journal: Option<String>,
    pub date: Option<NaiveDate>,
}

// ---------------------------------------------------------------------------
// Mention edges
// ---------------------------------------------------------------------------

/// Which source table a mention edge came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Pubmed,
    Clinical,
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Pubmed   => "pubmed",
            SourceType::Clinical => "clinical",
        }
    }
}

/// One observed occurrence of a drug name inside a source record's title.
/// A single source record produces one edge per drug it mentions, and a
/// single drug produces one edge per record mentioning it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentionEdge {
    pub drug_atccode: String,
    pub drug_name: String,
    pub source_type: SourceType,
    pub source_id: String,
    pub source_title: String,
    pub journal: Option<String>,
    pub date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&SourceType::Pubmed).unwrap(),
            "\"pubmed\""
        );
        assert_eq!(SourceType::Clinical.as_str(), "clinical");
    }

    #[test]
    fn mention_edge_round_trips_through_json() {
        let edge = MentionEdge {
            drug_atccode: "A01".to_string(),
            drug_name: "epinephrine".to_string(),
            source_type: SourceType::Clinical,
            source_id: "t1".to_string(),
            source_title: "trial of epinephrine".to_string(),
            journal: None,
            date: NaiveDate::from_ymd_opt(2020, 3, 4),
        };
        let json = serde_json::to_string(&edge).unwrap();
        let back: MentionEdge = serde_json::from_str(&json).unwrap();
        assert_eq!(back, edge);
    }
}
