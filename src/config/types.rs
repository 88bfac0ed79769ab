//! Inventory tool configuration structs and defaults.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryConfig {
    pub directory: DirectorySettings,
    pub provider: ProviderSettings,
    pub scan: ScanSettings,
    pub logging: LoggingSettings,
}

/// Where the node directory and its credentials live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectorySettings {
    /// JSON nodes file standing in for the cluster-orchestration service.
    pub nodes_file: String,
}

/// Where captured hardware-facts documents live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSettings {
    pub facts_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSettings {
    /// Bounded worker pool size; one node is processed per worker.
    pub max_workers: usize,
    pub detect_gpus: bool,
    pub detect_fpgas: bool,
    pub check_infiniband: bool,
    /// Require chassis tokens to match whole words instead of substrings.
    #[serde(default)]
    pub strict_chassis_match: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    pub log_level: String,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            directory: DirectorySettings {
                nodes_file: "nodes.json".to_string(),
            },
            provider: ProviderSettings {
                facts_path: "captures".to_string(),
            },
            scan: ScanSettings {
                max_workers: 20,
                detect_gpus: true,
                detect_fpgas: true,
                check_infiniband: true,
                strict_chassis_match: false,
            },
            logging: LoggingSettings {
                log_level: "INFO".to_string(),
            },
        }
    }
}
