//! Capture-replay implementations of the directory and provider seams.
//! The directory reads a nodes JSON file; the provider reads one parsed
//! facts document per node, keyed by BMC address. Used for offline runs
//! and as the test double for the external wire client.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use crate::error::{InventoryError, Result};
use crate::facts::types::{BmcEndpoint, NodeDescriptor, NodeFacts};
use crate::facts::{FactsProvider, NodeDirectory};

/// Node directory backed by a JSON file: a top-level array of
/// `NodeDescriptor` objects.
pub struct FileDirectory {
    path: PathBuf,
}

impl FileDirectory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl NodeDirectory for FileDirectory {
    async fn nodes(&self) -> Result<Vec<NodeDescriptor>> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            InventoryError::Connection {
                address: self.path.display().to_string(),
                reason: e.to_string(),
            }
        })?;
        let nodes: Vec<NodeDescriptor> =
            serde_json::from_str(&content).map_err(|e| InventoryError::Connection {
                address: self.path.display().to_string(),
                reason: format!("invalid nodes file: {}", e),
            })?;
        debug!("Loaded {} nodes from {:?}", nodes.len(), self.path);
        Ok(nodes)
    }
}

/// Facts provider replaying captured documents from `<root>/<address>.json`.
pub struct FileFactsProvider {
    root: PathBuf,
}

impl FileFactsProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn capture_path(&self, endpoint: &BmcEndpoint) -> PathBuf {
        // BMC addresses are hostnames or IPs; safe as file stems.
        self.root.join(format!("{}.json", endpoint.address))
    }
}

#[async_trait]
impl FactsProvider for FileFactsProvider {
    async fn fetch(&self, endpoint: &BmcEndpoint) -> Result<NodeFacts> {
        let path = self.capture_path(endpoint);
        if !path.exists() {
            // A missing capture is the replay equivalent of an unreachable
            // controller: abort this node, leave the others alone.
            return Err(InventoryError::Connection {
                address: endpoint.address.clone(),
                reason: format!("no capture at {:?}", path),
            });
        }

        let content =
            tokio::fs::read_to_string(&path)
                .await
                .map_err(|e| InventoryError::Connection {
                    address: endpoint.address.clone(),
                    reason: e.to_string(),
                })?;

        serde_json::from_str(&content).map_err(|e| InventoryError::Connection {
            address: endpoint.address.clone(),
            reason: format!("malformed capture: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint(address: &str) -> BmcEndpoint {
        BmcEndpoint {
            address: address.to_string(),
            username: "root".to_string(),
            password: "calvin".to_string(),
        }
    }

    #[tokio::test]
    async fn missing_capture_is_a_connection_failure() {
        let provider = FileFactsProvider::new("/nonexistent/captures");
        let err = provider.fetch(&endpoint("10.0.0.1")).await.unwrap_err();
        assert!(matches!(err, InventoryError::Connection { .. }));
    }

    #[tokio::test]
    async fn replays_a_captured_document() {
        let dir = std::env::temp_dir().join("bmc-inventory-test-captures");
        tokio::fs::create_dir_all(&dir).await.unwrap();
        let doc = serde_json::json!({
            "system": {
                "manufacturer": "Dell Inc.",
                "bios_version": "2.8.2",
                "schema_version": "1.6.0",
                "bios_release_date": null,
                "cpu_architecture": "x86-64 bit",
                "cpu_count": 48,
                "processors": [],
                "memory": { "size_gib": 192.0 },
                "drives": [],
                "pcie_devices": []
            },
            "chassis": {
                "manufacturer": "Dell Inc.",
                "model": "PowerEdge R740",
                "serial": "ABC1234",
                "location_info_format": "RackName;RackSlot",
                "location_info": "r01;42",
                "network_adapters": []
            }
        });
        tokio::fs::write(dir.join("10.0.0.2.json"), doc.to_string())
            .await
            .unwrap();

        let provider = FileFactsProvider::new(&dir);
        let facts = provider.fetch(&endpoint("10.0.0.2")).await.unwrap();
        assert_eq!(facts.chassis.model.as_deref(), Some("PowerEdge R740"));
        assert_eq!(facts.system.cpu_count, Some(48));
    }
}
