use thiserror::Error;

#[derive(Debug, Error)]
pub enum MedgraphError {
    /// One or more date cells matched no known pattern. Carries a bounded
    /// sample of the offending raw values.
    #[error("unrecognized date formats: {}", render_date_samples(.samples, .truncated))]
    UnparseableDates { samples: Vec<String>, truncated: bool },

    #[error("required column `{column}` missing from {table} table")]
    MissingColumn { table: &'static str, column: &'static str },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Pipeline error: {0}")]
    Pipeline(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, MedgraphError>;

fn render_date_samples(samples: &[String], truncated: &bool) -> String {
    let suffix = if *truncated { ", ..." } else { "" };
    format!("[{}]{}", samples.join(", "), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparseable_dates_lists_samples() {
        let err = MedgraphError::UnparseableDates {
            samples: vec!["not-a-date".to_string(), "???".to_string()],
            truncated: false,
        };
        assert_eq!(
            err.to_string(),
            "unrecognized date formats: [not-a-date, ???]"
        );
    }

    #[test]
    fn unparseable_dates_marks_truncation() {
        let err = MedgraphError::UnparseableDates {
            samples: vec!["a".to_string()],
            truncated: true,
        };
        assert!(err.to_string().ends_with(", ..."));
    }
}
