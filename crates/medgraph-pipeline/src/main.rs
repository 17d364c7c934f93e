//! Medgraph pipeline binary.
//!
//! Run with: cargo run -p medgraph-pipeline
//!
//! Commands:
//!   medgraph run                        full pipeline over the configured dirs
//!   medgraph top-journal [edges.csv]    ranking query over a persisted edge table

use std::path::PathBuf;

use medgraph_pipeline::{runner, Config};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config::load()?;
    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        None | Some("run") => {
            let summary = runner::run(&config)?;
            info!(
                drugs = summary.drugs,
                publications = summary.publications,
                trials = summary.trials,
                edges = summary.edges,
                "done"
            );
        }
        Some("top-journal") => {
            let default_path = config.paths.intermediary_dir.join(runner::MENTIONS_EDGES_CSV);
            let path = args.get(2).map(PathBuf::from).unwrap_or(default_path);
            let top = runner::top_journal_from_csv(&path)?;
            println!("{}", serde_json::to_string(&top)?);
        }
        Some(other) => {
            anyhow::bail!("unknown command `{other}` (expected `run` or `top-journal`)")
        }
    }

    Ok(())
}
