//! Venue aggregation: which journal mentions the most distinct drugs.

use std::collections::{BTreeMap, BTreeSet};

use medgraph_common::MentionEdge;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Result of the top-venue query. `journal` is `None` (serialized as
/// `null`) when there are no edges to aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopJournal {
    pub journal: Option<String>,
    pub distinct_drugs: usize,
}

/// Find the journal mentioning the most distinct drug codes.
///
/// Edges without a venue are ignored. Ties break toward the
/// lexicographically smallest journal name, so the answer does not depend
/// on edge order.
pub fn top_journal(edges: &[MentionEdge]) -> TopJournal {
    let mut drugs_by_journal: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for edge in edges {
        if let Some(journal) = edge.journal.as_deref() {
            drugs_by_journal
                .entry(journal)
                .or_default()
                .insert(edge.drug_atccode.as_str());
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (journal, drugs) in &drugs_by_journal {
        // strict > keeps the first (smallest) journal on ties
        if best.map_or(true, |(_, count)| drugs.len() > count) {
            best = Some((journal, drugs.len()));
        }
    }

    let result = match best {
        Some((journal, distinct_drugs)) => TopJournal {
            journal: Some(journal.to_string()),
            distinct_drugs,
        },
        None => TopJournal { journal: None, distinct_drugs: 0 },
    };
    debug!(
        journals = drugs_by_journal.len(),
        top = result.journal.as_deref().unwrap_or("-"),
        distinct_drugs = result.distinct_drugs,
        "ranked venues by distinct drug count"
    );
    result
}
