//! medgraph-kg — Mention-graph construction.
//!
//! Builds the drug → source-record mention relation and assembles it into
//! the serializable graph document.

pub mod graph;
pub mod mentions;

pub use graph::{build_graph, GraphDocument, GraphDrug, GraphEdge};
pub use mentions::compute_mentions;
