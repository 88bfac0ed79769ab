//! Config file load and save.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

use crate::config::types::InventoryConfig;

fn default_config_path() -> Result<PathBuf> {
    let exe_dir = std::env::current_exe()?
        .parent()
        .ok_or_else(|| anyhow::anyhow!("Cannot determine executable directory"))?
        .to_path_buf();
    Ok(exe_dir.join("config.json"))
}

/// Load configuration from the given path, or `config.json` next to the
/// binary. A missing file falls back to defaults; a malformed file is a
/// startup-fatal error, since the run cannot proceed on guessed settings.
pub async fn load_config(path: Option<&str>) -> Result<InventoryConfig> {
    let config_path = match path {
        Some(p) => PathBuf::from(p),
        None => default_config_path()?,
    };

    if config_path.exists() {
        let content = tokio::fs::read_to_string(&config_path).await?;
        let config: InventoryConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config: {:?}", config_path))?;
        info!("Loaded configuration from: {:?}", config_path);
        Ok(config)
    } else {
        info!("Config file not found at {:?}, using defaults", config_path);
        Ok(InventoryConfig::default())
    }
}

pub async fn save_config(config: &InventoryConfig, path: &str) -> Result<()> {
    let content = serde_json::to_string_pretty(config)?;
    tokio::fs::write(path, content).await?;
    info!("Configuration saved to: {}", path);
    Ok(())
}
