//! medgraph-ranker — Analytic queries over the mention relation.

pub mod journals;

pub use journals::{top_journal, TopJournal};
