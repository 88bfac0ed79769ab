//! Command-line argument definitions (clap).

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "bmc-inventory")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scrape BMC hardware facts into canonical node records", long_about = None)]
pub struct Args {
    // === Node Selection ===
    /// Node name to inventory (repeatable)
    #[arg(long = "name", value_name = "NODE", action = clap::ArgAction::Append, help_heading = "Node Selection")]
    pub node_names: Vec<String>,

    /// Inventory all registered nodes
    #[arg(long, help_heading = "Node Selection")]
    pub all: bool,

    // === Paths ===
    /// Path to the reference-repository subdir for your cluster
    #[arg(long = "output-path", default_value = ".", help_heading = "Paths")]
    pub output_path: PathBuf,

    /// Nodes file overriding the configured node directory
    #[arg(long = "nodes-file", help_heading = "Paths")]
    pub nodes_file: Option<PathBuf>,

    /// Captured facts directory overriding the configured provider path
    #[arg(long = "facts-path", help_heading = "Paths")]
    pub facts_path: Option<PathBuf>,

    /// Config file path (defaults to config.json next to the binary)
    #[arg(long = "config-path", help_heading = "Paths")]
    pub config_path: Option<String>,

    // === Config & Debug ===
    /// Show current configuration and exit
    #[arg(short = 'c', long = "show-config", help_heading = "Config & Debug")]
    pub show_config: bool,

    /// Set log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(long = "log-level", help_heading = "Config & Debug")]
    pub log_level: Option<String>,
}
