//! Canonical node record types, serialized one JSON document per node.
//! Structs are created fresh per node, mutated only by the builder, then
//! serialized and dropped; nothing here is shared across nodes.

use serde::Serialize;

/// The canonical output unit for one bare-metal node.
#[derive(Debug, Clone, Serialize)]
pub struct NodeRecord {
    pub uid: String,
    pub node_name: String,
    /// Computed last, after every PCIe device has been classified and the
    /// GPU summary populated.
    pub node_type: Option<String>,
    pub chassis: Chassis,
    pub architecture: Option<Architecture>,
    pub bios: Option<Bios>,
    pub processor: Processor,
    pub main_memory: Option<MainMemory>,
    pub network_adapters: Vec<NetworkPortRecord>,
    pub storage_devices: Vec<StorageRecord>,
    /// Internal working set; stripped before persistence.
    pub pcie_devices: Vec<PcieDeviceRecord>,
    pub gpu: GpuSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fpga: Option<FpgaRecord>,
    pub placement: Option<Placement>,
    pub infiniband: bool,
}

impl NodeRecord {
    pub fn new(uid: impl Into<String>, node_name: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            node_name: node_name.into(),
            node_type: None,
            chassis: Chassis::default(),
            architecture: None,
            bios: None,
            processor: Processor::default(),
            main_memory: None,
            network_adapters: Vec::new(),
            storage_devices: Vec::new(),
            pcie_devices: Vec::new(),
            gpu: GpuSummary::default(),
            fpga: None,
            placement: None,
            infiniband: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Chassis {
    pub manufacturer: Option<String>,
    pub name: Option<String>,
    pub serial: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Architecture {
    pub platform_type: Option<String>,
    /// Socket count.
    pub smp_size: usize,
    /// Total logical thread count.
    pub smt_size: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Bios {
    pub release_date: Option<String>,
    pub vendor: Option<String>,
    pub version: Option<String>,
}

/// Processor description. Zero or missing OEM cache/clock values are
/// omitted rather than stored as 0.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Processor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clock_speed: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_l1: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_l2: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_l3: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instruction_set: Option<String>,
}

/// Memory summary. `ram_size` mixes binary and decimal units on purpose:
/// firmware reports binary GiB, the reference dataset stores decimal bytes.
#[derive(Debug, Clone, Serialize)]
pub struct MainMemory {
    pub humanized_ram_size: String,
    pub ram_size: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct NetworkPortRecord {
    pub device: String,
    pub interface: Option<String>,
    /// Lowercased.
    pub mac: String,
    pub model: Option<String>,
    pub vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<u64>,
    /// True when the directory knows this port's MAC.
    pub enabled: bool,
    pub management: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct StorageRecord {
    pub device: String,
    /// Decimal GB.
    pub humanized_size: String,
    pub interface: Option<String>,
    pub model: Option<String>,
    pub rev: Option<String>,
    pub size: u64,
    pub vendor: Option<String>,
    pub media_type: Option<String>,
}

/// One PCIe function as kept for classification. Immutable once built;
/// owned by the builder for the duration of one node's processing.
#[derive(Debug, Clone, Serialize)]
pub struct PcieDeviceRecord {
    pub id: String,
    pub name: Option<String>,
    pub manufacturer: Option<String>,
    pub vendor_id: Option<String>,
    pub device_id: Option<String>,
    pub device_class: Option<String>,
    pub firmware_version: Option<String>,
    pub part_number: Option<String>,
    pub serial_number: Option<String>,
}

/// GPU accounting for one node. `gpu_count` equals the number of PCIe
/// devices that matched exactly one non-ignored catalog entry.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GpuSummary {
    pub gpu: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpu_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpu_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpu_vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpu_count: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FpgaRecord {
    pub board_model: String,
    pub board_vendor: String,
    pub fpga_model: String,
    pub fpga_vendor: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Placement {
    pub node: Option<String>,
    pub rack: Option<String>,
}
