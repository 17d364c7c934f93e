//! Substring mention matching across the two literature sources.

use medgraph_common::{DrugRecord, MentionEdge, Publication, SourceType, Trial};
use tracing::debug;

/// Compute every (drug, source record) mention edge.
///
/// A drug is mentioned by a record when its name occurs as a
/// case-insensitive substring of the record's title. Matching is not
/// tokenized: a short drug name inside an unrelated longer word still
/// counts (known false-positive source, kept on purpose). Records with a
/// missing title never match and never fail.
///
/// Edges come out in source-table-then-drug order: all publication edges
/// first, then all trial edges, each block iterated drug-major. Cost is
/// O(|drugs| × |publications| + |drugs| × |trials|) substring scans.
pub fn compute_mentions(
    drugs: &[DrugRecord],
    publications: &[Publication],
    trials: &[Trial],
) -> Vec<MentionEdge> {
    let mut edges = Vec::new();

    for drug in drugs {
        let needle = drug.name.to_lowercase();
        for publication in publications {
            if title_contains(publication.title.as_deref(), &needle) {
                edges.push(MentionEdge {
                    drug_atccode: drug.atccode.clone(),
                    drug_name: drug.name.clone(),
                    source_type: SourceType::Pubmed,
                    source_id: publication.id.clone(),
                    // the matched title travels on the edge
                    source_title: publication.title.clone().unwrap_or_default(),
                    journal: publication.journal.clone(),
                    date: publication.date,
                });
            }
        }
    }

    for drug in drugs {
        let needle = drug.name.to_lowercase();
        for trial in trials {
            if title_contains(trial.scientific_title.as_deref(), &needle) {
                edges.push(MentionEdge {
                    drug_atccode: drug.atccode.clone(),
                    drug_name: drug.name.clone(),
                    source_type: SourceType::Clinical,
                    source_id: trial.id.clone(),
                    source_title: trial.scientific_title.clone().unwrap_or_default(),
                    journal: trial.journal.clone(),
                    date: trial.date,
                });
            }
        }
    }

    debug!(
        drugs = drugs.len(),
        publications = publications.len(),
        trials = trials.len(),
        edges = edges.len(),
        "computed mention edges"
    );
    edges
}

fn title_contains(title: Option<&str>, needle_lower: &str) -> bool {
    match title {
        Some(title) => title.to_lowercase().contains(needle_lower),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn drug(atccode: &str, name: &str) -> DrugRecord {
        DrugRecord { atccode: atccode.to_string(), name: name.to_string() }
    }

    fn publication(id: &str, title: Option<&str>, journal: &str, ymd: (i32, u32, u32)) -> Publication {
        Publication {
            id: id.to_string(),
            title: title.map(str::to_string),
            journal: Some(journal.to_string()),
            date: NaiveDate::from_ymd_opt(ymd.0, ymd.1, ymd.2),
        }
    }

    fn trial(id: &str, title: Option<&str>, journal: &str, ymd: (i32, u32, u32)) -> Trial {
        Trial {
            id: id.to_string(),
            scientific_title: title.map(str::to_string),
            journal: Some(journal.to_string()),
            date: NaiveDate::from_ymd_opt(ymd.0, ymd.1, ymd.2),
        }
    }

    #[test]
    fn matches_both_sources_case_insensitively() {
        let drugs = vec![drug("A01", "Epinephrine")];
        let publications = vec![
            publication("p1", Some("Study on Epinephrine response"), "J1", (2020, 2, 1)),
            publication("p2", Some("Unrelated title"), "J2", (2020, 2, 2)),
        ];
        let trials = vec![
            trial("t1", Some("Clinical trial of epinephrine dosage"), "J3", (2020, 3, 4)),
            trial("t2", Some("Another study"), "J4", (2020, 3, 5)),
        ];

        let edges = compute_mentions(&drugs, &publications, &trials);
        assert_eq!(edges.len(), 2);

        let pm = &edges[0];
        assert_eq!(pm.source_type, SourceType::Pubmed);
        assert_eq!(pm.drug_atccode, "A01");
        assert_eq!(pm.drug_name, "Epinephrine");
        assert_eq!(pm.source_id, "p1");
        assert_eq!(pm.source_title, "Study on Epinephrine response");
        assert_eq!(pm.journal.as_deref(), Some("J1"));
        assert_eq!(pm.date, NaiveDate::from_ymd_opt(2020, 2, 1));

        let cl = &edges[1];
        assert_eq!(cl.source_type, SourceType::Clinical);
        assert_eq!(cl.source_id, "t1");
        assert_eq!(cl.source_title, "Clinical trial of epinephrine dosage");
        assert_eq!(cl.journal.as_deref(), Some("J3"));
        assert_eq!(cl.date, NaiveDate::from_ymd_opt(2020, 3, 4));
    }

    #[test]
    fn one_record_yields_one_edge_per_mentioned_drug() {
        let drugs = vec![drug("D01", "Aspirin"), drug("D02", "Paracetamol")];
        let publications = vec![
            publication("p1", Some("ASPIRIN reduces fever"), "JX", (2021, 1, 1)),
            publication("p2", Some("Effect of Paracetamol on pain"), "JY", (2021, 1, 2)),
        ];
        let trials = vec![trial(
            "t1",
            Some("Combined Aspirin and paracetamol study"),
            "JZ",
            (2021, 2, 3),
        )];

        let edges = compute_mentions(&drugs, &publications, &trials);
        assert_eq!(edges.len(), 4);

        let count = |name: &str, source: SourceType| {
            edges
                .iter()
                .filter(|e| e.drug_name == name && e.source_type == source)
                .count()
        };
        assert_eq!(count("Aspirin", SourceType::Pubmed), 1);
        assert_eq!(count("Paracetamol", SourceType::Pubmed), 1);
        assert_eq!(count("Aspirin", SourceType::Clinical), 1);
        assert_eq!(count("Paracetamol", SourceType::Clinical), 1);
    }

    #[test]
    fn missing_titles_never_match_or_fail() {
        let drugs = vec![drug("X01", "FooDrug")];
        let publications = vec![publication("p1", None, "J", (2020, 1, 1))];
        let trials = vec![trial("t1", None, "J", (2020, 1, 2))];

        let edges = compute_mentions(&drugs, &publications, &trials);
        assert!(edges.is_empty());
    }

    #[test]
    fn substring_matching_hits_inside_longer_words() {
        // accepted limitation of substring semantics
        let drugs = vec![drug("B01", "aspir")];
        let trials = vec![trial("t1", Some("An aspirin trial"), "J", (2020, 1, 1))];
        let edges = compute_mentions(&drugs, &[], &trials);
        assert_eq!(edges.len(), 1);
    }
}
