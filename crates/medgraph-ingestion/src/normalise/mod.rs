//! Normalization pipeline for the three input tables.
//!
//! Three layers are provided:
//! - `text`: folds free text to the canonical comparable form
//! - `dates`: parses heterogeneous date strings into calendar dates
//! - `sources`: per-table entry points applying both

pub mod dates;
pub mod sources;
pub mod text;

pub use dates::{parse_date, parse_date_series, DATE_FORMATS};
pub use sources::{normalize_drugs, normalize_publications, normalize_trials};
pub use text::{normalize_text, normalize_text_series};
