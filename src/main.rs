//! bmc-inventory entry point: CLI dispatch, async runtime, and the bounded
//! fan-out that inventories many nodes concurrently.

mod app;
mod catalog;
mod classify;
mod config;
mod error;
mod facts;
mod output;
mod record;
mod taxonomy;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{error, info, warn};

use app::cli::Args;
use app::logging::init_tracing;
use config::persistence::load_config;
use config::types::InventoryConfig;
use facts::{FactsProvider, FileDirectory, FileFactsProvider, NodeDescriptor, NodeDirectory};
use record::{BuilderOptions, NodeRecordBuilder};

/// Nodes reporting a management schema at or below this cannot be
/// inventoried reliably and are skipped.
const MIN_SCHEMA_VERSION: &str = "1.0.2";

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(args.config_path.as_deref()).await?;

    // Priority: 1. --log-level flag, 2. LOG_LEVEL env, 3. config file
    let log_level = if let Some(level) = args.log_level.as_ref() {
        level.to_lowercase()
    } else if let Ok(env_level) = std::env::var("LOG_LEVEL") {
        env_level.to_lowercase()
    } else {
        config.logging.log_level.to_lowercase()
    };

    let filter = match log_level.as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "info" => "info",
        "warn" => "warn",
        "error" => "error",
        _ => {
            eprintln!(
                "Invalid log level '{}'. Using INFO. Valid levels: TRACE, DEBUG, INFO, WARN, ERROR",
                log_level
            );
            "info"
        }
    };

    init_tracing(filter);

    if args.show_config {
        println!("\n{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    if args.node_names.is_empty() && !args.all {
        eprintln!("ERROR: No nodes selected. Pass --name <node> (repeatable) or --all.");
        std::process::exit(1);
    }

    info!(
        "bmc-inventory v{} starting ({})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS
    );

    run_scan(&args, &config).await
}

async fn run_scan(args: &Args, config: &InventoryConfig) -> Result<()> {
    let nodes_file = args
        .nodes_file
        .clone()
        .unwrap_or_else(|| config.directory.nodes_file.clone().into());
    let facts_path = args
        .facts_path
        .clone()
        .unwrap_or_else(|| config.provider.facts_path.clone().into());

    let directory = FileDirectory::new(nodes_file);
    let provider: Arc<dyn FactsProvider> = Arc::new(FileFactsProvider::new(facts_path));

    let options = BuilderOptions {
        detect_gpus: config.scan.detect_gpus,
        detect_fpgas: config.scan.detect_fpgas,
        check_infiniband: config.scan.check_infiniband,
        strict_chassis_match: config.scan.strict_chassis_match,
    };

    let wanted: Vec<String> = args.node_names.iter().map(|n| n.to_lowercase()).collect();
    let selected: Vec<NodeDescriptor> = directory
        .nodes()
        .await?
        .into_iter()
        .filter(|node| args.all || wanted.contains(&node.name.to_lowercase()))
        .collect();

    if selected.is_empty() {
        warn!("No registered nodes match the selection");
        return Ok(());
    }

    info!(
        "Inventorying {} nodes with up to {} workers",
        selected.len(),
        config.scan.max_workers
    );

    // One node per worker; a failure aborts that node only. The catalog is
    // the only shared state and it is read-only.
    let semaphore = Arc::new(Semaphore::new(config.scan.max_workers.max(1)));
    let mut workers = JoinSet::new();

    for node in selected {
        let provider = Arc::clone(&provider);
        let semaphore = Arc::clone(&semaphore);
        let output_path = args.output_path.clone();

        workers.spawn(async move {
            let Ok(_permit) = semaphore.acquire_owned().await else {
                return (node.name.clone(), Ok(false));
            };
            let outcome = inventory_node(provider.as_ref(), &node, options, &output_path).await;
            (node.name.clone(), outcome)
        });
    }

    let mut generated = 0usize;
    let mut failed = 0usize;
    while let Some(joined) = workers.join_next().await {
        match joined {
            Ok((_, Ok(true))) => generated += 1,
            Ok((_, Ok(false))) => {}
            Ok((name, Err(e))) => {
                failed += 1;
                error!("{}: {:#}", name, e);
            }
            Err(e) => {
                failed += 1;
                error!("worker panicked: {}", e);
            }
        }
    }

    info!("Scan complete: {} records generated, {} nodes failed", generated, failed);
    Ok(())
}

/// Inventory one node end-to-end: fetch facts, build the canonical record,
/// persist it. Returns Ok(false) when the node was skipped.
async fn inventory_node(
    provider: &dyn FactsProvider,
    node: &NodeDescriptor,
    options: BuilderOptions,
    output_path: &Path,
) -> Result<bool> {
    info!("querying {} at {}", node.name, node.bmc.address);

    let facts = provider.fetch(&node.bmc).await?;

    if let Some(version) = facts.system.schema_version.as_deref() {
        if version <= MIN_SCHEMA_VERSION {
            warn!(
                "Node {} does not have a supported management schema version ({})",
                node.name, version
            );
            return Ok(false);
        }
    }

    let record = NodeRecordBuilder::new(node, options).populate(&facts)?;
    output::write_record(output_path, &record).await?;
    Ok(true)
}
