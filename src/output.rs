//! Output shaping and persistence: one pretty-printed JSON document per
//! node, keys sorted, written to `<output_path>/<node_id>.json`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::record::NodeRecord;

/// Render the persisted form of a record. The raw `pcie_devices` working
/// set is internal-only and stripped, and a GPU object with nothing
/// detected is omitted entirely rather than written as `{"gpu": false}`.
pub fn render(record: &NodeRecord) -> Result<String> {
    // Round-trip through Value: serde_json maps are BTreeMap-backed, which
    // gives the sorted keys the reference dataset expects.
    let mut value = serde_json::to_value(record).context("Failed to serialize node record")?;

    if let Some(map) = value.as_object_mut() {
        map.remove("pcie_devices");
        if !record.gpu.gpu {
            map.remove("gpu");
        }
    }

    let mut rendered = serde_json::to_string_pretty(&value)?;
    rendered.push('\n');
    Ok(rendered)
}

/// Path for one node's record, derived from node identity.
pub fn record_path(output_path: &Path, node_id: &str) -> PathBuf {
    output_path.join(format!("{}.json", node_id))
}

/// Write one finalized record. Writes are not transactional; a crash
/// mid-write can leave a partial file.
pub async fn write_record(output_path: &Path, record: &NodeRecord) -> Result<PathBuf> {
    let path = record_path(output_path, &record.uid);
    let rendered = render(record)?;
    tokio::fs::write(&path, rendered)
        .await
        .with_context(|| format!("Failed to write {:?}", path))?;
    info!("generated {:?}", path);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{GpuSummary, PcieDeviceRecord};

    fn record_with_pcie() -> NodeRecord {
        let mut record = NodeRecord::new("uid-1", "nc01");
        record.pcie_devices.push(PcieDeviceRecord {
            id: "59-0".to_string(),
            name: None,
            manufacturer: None,
            vendor_id: Some("0x10de".to_string()),
            device_id: Some("0x20f1".to_string()),
            device_class: Some("DisplayController".to_string()),
            firmware_version: None,
            part_number: None,
            serial_number: None,
        });
        record
    }

    #[test]
    fn strips_pcie_devices_and_empty_gpu() {
        let record = record_with_pcie();
        let rendered = render(&record).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert!(value.get("pcie_devices").is_none());
        assert!(value.get("gpu").is_none());
        assert_eq!(value["uid"], "uid-1");
    }

    #[test]
    fn keeps_gpu_object_when_present() {
        let mut record = record_with_pcie();
        record.gpu = GpuSummary {
            gpu: true,
            gpu_model: Some("GA100 [A100 PCIe 40GB]".to_string()),
            gpu_name: Some("A100".to_string()),
            gpu_vendor: Some("NVIDIA Corporation".to_string()),
            gpu_count: Some(4),
        };
        let rendered = render(&record).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["gpu"]["gpu"], true);
        assert_eq!(value["gpu"]["gpu_count"], 4);
    }

    #[test]
    fn renders_keys_sorted() {
        let rendered = render(&record_with_pcie()).unwrap();
        // Top-level keys are indented by exactly two spaces.
        let keys: Vec<&str> = rendered
            .lines()
            .filter_map(|line| {
                if line.starts_with("  \"") {
                    line.trim_start().split('"').nth(1)
                } else {
                    None
                }
            })
            .collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn record_path_is_keyed_by_node_id() {
        let path = record_path(Path::new("/tmp/out"), "uid-1");
        assert_eq!(path, PathBuf::from("/tmp/out/uid-1.json"));
    }
}
