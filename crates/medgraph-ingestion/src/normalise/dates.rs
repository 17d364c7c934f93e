//! Multi-format date parsing.
//!
//! Six fixed patterns are tried in priority order; a value locks in the
//! first pattern that parses it. Values defeating every pattern go through
//! a lenient fallback with a day-before-month bias. Batch parsing rejects
//! the whole column when any present value remains unparsed, reporting a
//! bounded sample of the offenders.

use chrono::NaiveDate;
use medgraph_common::{MedgraphError, Result};

/// Recognized date patterns, in priority order.
pub const DATE_FORMATS: &[&str] = &[
    "%d %B %Y", // 12 January 2023
    "%d %b %Y", // 12 Jan 2023
    "%d/%m/%Y", // 01/04/2024
    "%d-%m-%Y", // 03-09-1999
    "%Y-%m-%d", // 2023-01-12
    "%Y/%m/%d", // 2023/01/12
];

/// How many offending raw values an [`MedgraphError::UnparseableDates`]
/// error reports before truncating.
const MAX_ERROR_SAMPLES: usize = 5;

/// Parse one date string. Input is trimmed first; the fixed patterns are
/// tried in order, then the lenient fallback. Returns `None` when nothing
/// recognizes the value.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    parse_date_lenient(trimmed)
}

/// Parse a column of optional date cells into calendar dates.
///
/// Missing cells pass through as `None`. If any present value defeats both
/// the fixed patterns and the fallback, the whole column is rejected with
/// an error carrying up to [`MAX_ERROR_SAMPLES`] distinct offending raw
/// values.
pub fn parse_date_series(cells: &[Option<String>]) -> Result<Vec<Option<NaiveDate>>> {
    let mut parsed = Vec::with_capacity(cells.len());
    let mut bad: Vec<String> = Vec::new();

    for cell in cells {
        match cell {
            None => parsed.push(None),
            Some(raw) => match parse_date(raw) {
                Some(date) => parsed.push(Some(date)),
                None => {
                    let sample = raw.trim().to_string();
                    if !bad.contains(&sample) {
                        bad.push(sample);
                    }
                    parsed.push(None);
                }
            },
        }
    }

    if !bad.is_empty() {
        let truncated = bad.len() > MAX_ERROR_SAMPLES;
        bad.truncate(MAX_ERROR_SAMPLES);
        return Err(MedgraphError::UnparseableDates { samples: bad, truncated });
    }
    Ok(parsed)
}

// ── Lenient fallback ─────────────────────────────────────────────────────────

const MONTH_NAMES: [&str; 12] = [
    "january", "february", "march", "april", "may", "june",
    "july", "august", "september", "october", "november", "december",
];

/// Best-effort inference for values the fixed patterns miss, e.g.
/// "January 12, 2023" or "01.02.2023". Ambiguous numeric forms resolve
/// day-first: "01.02.2023" is 1 February 2023.
fn parse_date_lenient(raw: &str) -> Option<NaiveDate> {
    let tokens: Vec<&str> = raw
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect();
    if tokens.is_empty() {
        return None;
    }

    let mut named_month: Option<u32> = None;
    let mut numbers: Vec<i64> = Vec::new();
    for token in &tokens {
        if let Ok(n) = token.parse::<i64>() {
            numbers.push(n);
        } else if let Some(month) = month_from_token(token) {
            if named_month.replace(month).is_some() {
                return None;
            }
        } else {
            return None;
        }
    }

    match (named_month, numbers.as_slice()) {
        // "January 12, 2023", "12 January 2023", "Jan 12 23"
        (Some(month), [a, b]) => {
            let (day, year) = if *a > 31 {
                (*b, *a)
            } else if *b > 31 {
                (*a, *b)
            } else {
                (*a, expand_year(*b))
            };
            build_date(year, month, day)
        }
        // "January 2023"
        (Some(month), [year]) if *year > 31 => build_date(*year, month, 1),
        // Pure numeric triple: year-first when it reads that way, otherwise
        // day-first with an unambiguity swap ("25/12/2023" stays d=25).
        (None, [a, b, c]) => {
            if *a >= 1000 {
                build_date(*a, u32::try_from(*b).ok()?, *c)
            } else {
                let (mut day, mut month) = (*a, *b);
                if month > 12 && day <= 12 {
                    std::mem::swap(&mut day, &mut month);
                }
                build_date(expand_year(*c), u32::try_from(month).ok()?, day)
            }
        }
        // "02/2023" and "2023/02": first of month
        (None, [a, b]) if *b >= 1000 && (1..=12).contains(a) => {
            build_date(*b, u32::try_from(*a).ok()?, 1)
        }
        (None, [a, b]) if *a >= 1000 && (1..=12).contains(b) => {
            build_date(*a, u32::try_from(*b).ok()?, 1)
        }
        _ => None,
    }
}

/// Recognize a month name or any >=3-letter prefix of one ("sept", "jan").
fn month_from_token(token: &str) -> Option<u32> {
    if token.len() < 3 {
        return None;
    }
    let lowered = token.to_lowercase();
    MONTH_NAMES
        .iter()
        .position(|name| name.starts_with(&lowered))
        .map(|idx| idx as u32 + 1)
}

/// Two-digit years pivot at 70: 69 → 2069, 70 → 1970.
fn expand_year(year: i64) -> i64 {
    if (0..100).contains(&year) {
        if year >= 70 { 1900 + year } else { 2000 + year }
    } else {
        year
    }
}

fn build_date(year: i64, month: u32, day: i64) -> Option<NaiveDate> {
    let year = i32::try_from(year).ok()?;
    let day = u32::try_from(day).ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_all_six_canonical_formats() {
        let cases = [
            ("12 January 2023", ymd(2023, 1, 12)),
            ("12 Jan 2023", ymd(2023, 1, 12)),
            ("01/04/2024", ymd(2024, 4, 1)),
            ("03-09-1999", ymd(1999, 9, 3)),
            ("2023-01-12", ymd(2023, 1, 12)),
            ("2023/01/12", ymd(2023, 1, 12)),
        ];
        for (raw, expected) in cases {
            assert_eq!(parse_date(raw), Some(expected), "failed on {raw}");
        }
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(parse_date("  2023-01-12 "), Some(ymd(2023, 1, 12)));
    }

    #[test]
    fn fallback_is_day_first_for_ambiguous_numeric() {
        assert_eq!(parse_date("01.02.2023"), Some(ymd(2023, 2, 1)));
    }

    #[test]
    fn fallback_swaps_unambiguous_month_first() {
        // 25 can only be a day
        assert_eq!(parse_date("12.25.2023"), Some(ymd(2023, 12, 25)));
    }

    #[test]
    fn fallback_handles_month_name_first() {
        assert_eq!(parse_date("January 12, 2023"), Some(ymd(2023, 1, 12)));
        assert_eq!(parse_date("Sept 3, 2021"), Some(ymd(2021, 9, 3)));
    }

    #[test]
    fn unparseable_value_is_none() {
        assert_eq!(parse_date("not-a-date"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn series_passes_missing_cells_through() {
        let cells = vec![Some("2023-01-12".to_string()), None];
        let out = parse_date_series(&cells).unwrap();
        assert_eq!(out, vec![Some(ymd(2023, 1, 12)), None]);
    }

    #[test]
    fn series_rejects_unparseable_values_with_samples() {
        let cells = vec![
            Some("2023-01-12".to_string()),
            Some("not-a-date".to_string()),
            Some("not-a-date".to_string()),
        ];
        let err = parse_date_series(&cells).unwrap_err();
        match err {
            MedgraphError::UnparseableDates { samples, truncated } => {
                // duplicates collapse into one sample
                assert_eq!(samples, vec!["not-a-date".to_string()]);
                assert!(!truncated);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn series_truncates_error_samples_at_five() {
        let cells: Vec<Option<String>> =
            (0..7).map(|i| Some(format!("bad-{i}"))).collect();
        let err = parse_date_series(&cells).unwrap_err();
        match err {
            MedgraphError::UnparseableDates { samples, truncated } => {
                assert_eq!(samples.len(), 5);
                assert!(truncated);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
