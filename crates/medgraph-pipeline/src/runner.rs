//! Sequential stage wiring: read → normalize → match → aggregate → write.
//!
//! The whole snapshot is recomputed on every run; nothing is cached
//! between invocations. A failed stage aborts the run and leaves no
//! partially written final document.

use std::path::{Path, PathBuf};

use medgraph_ingestion::normalise::{normalize_drugs, normalize_publications, normalize_trials};
use medgraph_ingestion::readers;
use medgraph_kg::{build_graph, compute_mentions};
use medgraph_ranker::{top_journal, TopJournal};
use medgraph_common::Result;
use tracing::info;

use crate::config::Config;
use crate::io;

// Raw input file names, resolved against the configured data directory.
pub const DRUGS_CSV: &str = "drugs.csv";
pub const PUBMED_CSV: &str = "pubmed.csv";
pub const PUBMED_JSON: &str = "pubmed.json";
pub const CLINICAL_TRIALS_CSV: &str = "clinical_trials.csv";

// Intermediary and final artifact names.
pub const DRUGS_NORMALIZED_CSV: &str = "drugs_normalized.csv";
pub const PUBMED_NORMALIZED_CSV: &str = "pubmed_normalized.csv";
pub const TRIALS_NORMALIZED_CSV: &str = "trials_normalized.csv";
pub const MENTIONS_EDGES_CSV: &str = "mentions_edges.csv";
pub const GRAPH_JSON: &str = "graph.json";
pub const TOP_JOURNAL_JSON: &str = "top_journal.json";

/// What a pipeline run produced, with the paths of the final artifacts.
#[derive(Debug)]
pub struct PipelineSummary {
    pub drugs: usize,
    pub publications: usize,
    pub trials: usize,
    pub edges: usize,
    pub top: TopJournal,
    pub graph_path: PathBuf,
    pub top_journal_path: PathBuf,
}

/// Run the full pipeline over the configured directories.
pub fn run(config: &Config) -> Result<PipelineSummary> {
    let paths = &config.paths;

    info!(data_dir = %paths.data_dir.display(), "reading raw tables");
    let drugs_raw = readers::read_drugs_csv(&paths.data_dir.join(DRUGS_CSV))?;
    let mut pubmed_raw = readers::read_pubmed_csv(&paths.data_dir.join(PUBMED_CSV))?;
    pubmed_raw.extend(readers::read_pubmed_json(&paths.data_dir.join(PUBMED_JSON))?);
    let trials_raw = readers::read_clinical_trials_csv(&paths.data_dir.join(CLINICAL_TRIALS_CSV))?;

    info!(
        drugs = drugs_raw.len(),
        publications = pubmed_raw.len(),
        trials = trials_raw.len(),
        "normalizing tables"
    );
    let drugs = normalize_drugs(&drugs_raw);
    let publications = normalize_publications(&pubmed_raw)?;
    let trials = normalize_trials(&trials_raw)?;

    io::save_csv(&drugs, &paths.intermediary_dir.join(DRUGS_NORMALIZED_CSV))?;
    io::save_csv(&publications, &paths.intermediary_dir.join(PUBMED_NORMALIZED_CSV))?;
    io::save_csv(&trials, &paths.intermediary_dir.join(TRIALS_NORMALIZED_CSV))?;

    let edges = compute_mentions(&drugs, &publications, &trials);
    io::save_csv(&edges, &paths.intermediary_dir.join(MENTIONS_EDGES_CSV))?;
    info!(edges = edges.len(), "computed mention edges");

    let graph = build_graph(&edges);
    let graph_path = paths.processed_dir.join(GRAPH_JSON);
    io::write_json_pretty(&graph, &graph_path)?;

    let top = top_journal(&edges);
    let top_journal_path = paths.intermediary_dir.join(TOP_JOURNAL_JSON);
    io::write_json_pretty(&top, &top_journal_path)?;

    info!(
        graph = %graph_path.display(),
        top_journal = top.journal.as_deref().unwrap_or("-"),
        distinct_drugs = top.distinct_drugs,
        "pipeline complete"
    );

    Ok(PipelineSummary {
        drugs: drugs.len(),
        publications: publications.len(),
        trials: trials.len(),
        edges: edges.len(),
        top,
        graph_path,
        top_journal_path,
    })
}

/// Answer the top-venue question from a persisted mention-edge table,
/// without recomputing the pipeline.
pub fn top_journal_from_csv(path: &Path) -> Result<TopJournal> {
    let edges = io::read_edges_csv(path)?;
    Ok(top_journal(&edges))
}
