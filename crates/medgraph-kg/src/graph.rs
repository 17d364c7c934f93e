//! Graph-document assembly.
//!
//! Projects the mention-edge collection into the serializable document:
//! deduplicated drug nodes, a sorted unique venue list, and the edges with
//! dates rendered as ISO strings.

use std::collections::BTreeSet;

use medgraph_common::{MentionEdge, SourceType};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A deduplicated drug node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDrug {
    pub atccode: String,
    pub name: String,
}

/// A mention edge as serialized in the graph document; the date is
/// rendered as an ISO `YYYY-MM-DD` string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub drug_atccode: String,
    pub drug_name: String,
    pub source_type: SourceType,
    pub source_id: String,
    pub source_title: String,
    pub journal: Option<String>,
    pub date: Option<String>,
}

/// The aggregated, serializable mention graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub drugs: Vec<GraphDrug>,
    pub journals: Vec<String>,
    pub edges: Vec<GraphEdge>,
}

/// Assemble the graph document from mention edges.
///
/// Drugs are deduplicated and sorted ascending by atccode; venues are
/// deduplicated, sorted ascending, with missing/empty values dropped.
/// Edges keep their input order and multiplicity.
pub fn build_graph(edges: &[MentionEdge]) -> GraphDocument {
    let drug_pairs: BTreeSet<(&str, &str)> = edges
        .iter()
        .map(|e| (e.drug_atccode.as_str(), e.drug_name.as_str()))
        .collect();
    let drugs = drug_pairs
        .into_iter()
        .map(|(atccode, name)| GraphDrug {
            atccode: atccode.to_string(),
            name: name.to_string(),
        })
        .collect();

    let journal_set: BTreeSet<&str> = edges
        .iter()
        .filter_map(|e| e.journal.as_deref())
        .filter(|j| !j.is_empty())
        .collect();
    let journals = journal_set.into_iter().map(str::to_string).collect();

    let out_edges = edges
        .iter()
        .map(|e| GraphEdge {
            drug_atccode: e.drug_atccode.clone(),
            drug_name: e.drug_name.clone(),
            source_type: e.source_type,
            source_id: e.source_id.clone(),
            source_title: e.source_title.clone(),
            journal: e.journal.clone(),
            date: e.date.map(|d| d.format("%Y-%m-%d").to_string()),
        })
        .collect();

    let document = GraphDocument { drugs, journals, edges: out_edges };
    debug!(
        drugs = document.drugs.len(),
        journals = document.journals.len(),
        edges = document.edges.len(),
        "assembled graph document"
    );
    document
}
