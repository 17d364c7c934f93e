//! Raw table models, as read from disk before normalization.
//!
//! Every cell is kept as text at this stage; dates are parsed and text
//! folded by the `normalise` module.

use serde::{Deserialize, Serialize};

/// One row of the drug reference file. `drug` holds the free-text name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDrug {
    pub atccode: String,
    pub drug: String,
}

/// One row of the publications file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPublication {
    pub id: String,
    pub title: Option<String>,
    pub journal: Option<String>,
    pub date: Option<String>,
}

/// One row of the clinical-trials file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTrial {
    pub id: String,
    pub scientific_title: Option<String>,
    pub journal: Option<String>,
    pub date: Option<String>,
}
