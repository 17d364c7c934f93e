//! Artifact writers and readers.
//!
//! JSON documents are pretty-printed; CSV artifacts go through serde.
//! Parent directories are created on demand so a fresh checkout can run
//! the pipeline without setup.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use medgraph_common::{MentionEdge, Result};
use serde::Serialize;

/// Write `value` as pretty-printed JSON, creating parent directories.
pub fn write_json_pretty<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    ensure_parent(path)?;
    let mut file = File::create(path)?;
    serde_json::to_writer_pretty(&mut file, value)?;
    file.write_all(b"\n")?;
    Ok(())
}

/// Write a table of serializable rows as CSV, creating parent directories.
pub fn save_csv<T: Serialize>(rows: &[T], path: &Path) -> Result<()> {
    ensure_parent(path)?;
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Read a persisted mention-edge table back from CSV.
pub fn read_edges_csv(path: &Path) -> Result<Vec<MentionEdge>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut edges = Vec::new();
    for row in reader.deserialize() {
        edges.push(row?);
    }
    Ok(edges)
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use medgraph_common::SourceType;

    #[test]
    fn edges_round_trip_through_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/mentions_edges.csv");

        let edges = vec![
            MentionEdge {
                drug_atccode: "A01".to_string(),
                drug_name: "epinephrine".to_string(),
                source_type: SourceType::Pubmed,
                source_id: "p1".to_string(),
                source_title: "study on epinephrine".to_string(),
                journal: Some("j1".to_string()),
                date: NaiveDate::from_ymd_opt(2020, 2, 1),
            },
            MentionEdge {
                drug_atccode: "B02".to_string(),
                drug_name: "aspirin".to_string(),
                source_type: SourceType::Clinical,
                source_id: "t1".to_string(),
                source_title: "aspirin trial".to_string(),
                journal: None,
                date: None,
            },
        ];

        save_csv(&edges, &path).unwrap();
        let back = read_edges_csv(&path).unwrap();
        assert_eq!(back, edges);
    }

    #[test]
    fn json_writer_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b/out.json");
        write_json_pretty(&serde_json::json!({"ok": true}), &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"ok\""));
    }
}
