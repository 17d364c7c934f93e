//! Canonical text form used for matching.
//!
//! Accents are stripped via NFKD decomposition, the result is lower-cased,
//! and every whitespace run (tabs, newlines, NBSP) collapses to a single
//! ASCII space.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Fold `text` into its canonical comparable form.
///
/// The fold is idempotent: applying it twice yields the same string.
pub fn normalize_text(text: &str) -> String {
    let stripped: String = text
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect();
    let lowered = stripped.to_lowercase();
    lowered.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize a column of optional text cells element-wise.
///
/// Missing cells pass through unchanged, never coerced to a placeholder.
pub fn normalize_text_series(cells: &[Option<String>]) -> Vec<Option<String>> {
    cells
        .iter()
        .map(|cell| cell.as_deref().map(normalize_text))
        .collect()
}
