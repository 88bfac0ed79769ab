//! Parsed hardware-facts data model, as supplied by the external client
//! library. Everything optional here degrades to a null output field;
//! the builder decides which absences are fatal for a node.

use serde::{Deserialize, Serialize};

/// One node as known to the node directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeDescriptor {
    pub id: String,
    pub name: String,
    pub bmc: BmcEndpoint,
    /// MAC addresses the directory has registered for this node.
    /// Matched case-insensitively against reported port MACs.
    #[serde(default)]
    pub known_macs: Vec<String>,
}

/// Out-of-band management endpoint and credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmcEndpoint {
    pub address: String,
    pub username: String,
    pub password: String,
}

/// Everything the facts provider yields for one node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeFacts {
    pub system: SystemFacts,
    pub chassis: ChassisFacts,
}

/// System descriptor: CPU list, memory summary, BIOS/OEM block, storage,
/// PCIe devices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemFacts {
    pub manufacturer: Option<String>,
    pub bios_version: Option<String>,
    /// Management schema version the controller reports.
    pub schema_version: Option<String>,
    /// OEM block: firmware BIOS release date, when the vendor exposes it.
    pub bios_release_date: Option<String>,
    /// Instruction-set string as the firmware reports it, e.g. "x86-64 bit".
    pub cpu_architecture: Option<String>,
    /// Total logical thread count across all sockets.
    pub cpu_count: Option<u32>,
    #[serde(default)]
    pub processors: Vec<ProcessorFacts>,
    pub memory: Option<MemoryFacts>,
    #[serde(default)]
    pub drives: Vec<DriveFacts>,
    #[serde(default)]
    pub pcie_devices: Vec<PcieDeviceFacts>,
}

/// One processor package. OEM cache/clock fields are zero or absent on many
/// platforms; zeros are treated as absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessorFacts {
    /// "CPU" for sockets; accelerators and DIMM-attached parts differ.
    pub processor_type: Option<String>,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub version: Option<String>,
    pub current_clock_speed_mhz: Option<f64>,
    pub cache_l1_kb: Option<f64>,
    pub cache_l2_kb: Option<f64>,
    pub cache_l3_kb: Option<f64>,
}

/// Memory summary. Firmware reports binary GiB.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MemoryFacts {
    pub size_gib: f64,
}

/// One physical drive behind a storage controller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriveFacts {
    pub id: String,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub capacity_bytes: u64,
    pub protocol: Option<String>,
    pub revision: Option<String>,
    pub media_type: Option<String>,
}

/// One PCIe device with its first function's identifiers flattened in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PcieDeviceFacts {
    pub id: String,
    pub name: Option<String>,
    pub manufacturer: Option<String>,
    pub firmware_version: Option<String>,
    pub part_number: Option<String>,
    pub serial_number: Option<String>,
    pub device_class: Option<String>,
    pub vendor_id: Option<String>,
    pub device_id: Option<String>,
}

/// Chassis descriptor: model, location, and network adapters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChassisFacts {
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub serial: Option<String>,
    /// Semicolon-delimited location key names, zipped with `location_info`.
    pub location_info_format: Option<String>,
    /// Semicolon-delimited location values.
    pub location_info: Option<String>,
    #[serde(default)]
    pub network_adapters: Vec<NetworkAdapterFacts>,
}

/// One network adapter and its ports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkAdapterFacts {
    pub id: String,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub ports: Vec<NetworkPortFacts>,
}

/// One link-layer port on an adapter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkPortFacts {
    pub id: String,
    #[serde(default)]
    pub mac_addresses: Vec<String>,
    /// "Ethernet", "InfiniBand", ...
    pub link_technology: Option<String>,
    pub link_speed_mbps: Option<f64>,
}
