//! Node record builder: populates one canonical record from raw facts,
//! delegating device classification and taxonomy resolution.
//!
//! One builder per node, owned by the worker processing that node. Step
//! order matters: the node type is resolved only after every PCIe device
//! has been classified and the GPU summary populated.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::catalog;
use crate::classify::{self, GpuClassification};
use crate::error::{InventoryError, Result};
use crate::facts::{
    ChassisFacts, DriveFacts, NetworkAdapterFacts, NetworkPortFacts, NodeDescriptor, NodeFacts,
    PcieDeviceFacts, ProcessorFacts, SystemFacts,
};
use crate::record::types::*;
use crate::taxonomy;

/// Which optional record sections get populated. The fleet has run builder
/// variants with and without each of these; one parameterized builder
/// replaces them.
#[derive(Debug, Clone, Copy)]
pub struct BuilderOptions {
    pub detect_gpus: bool,
    pub detect_fpgas: bool,
    pub check_infiniband: bool,
    /// Chassis tokens must match whole words instead of bare substrings.
    pub strict_chassis_match: bool,
}

impl Default for BuilderOptions {
    fn default() -> Self {
        Self {
            detect_gpus: true,
            detect_fpgas: true,
            check_infiniband: true,
            strict_chassis_match: false,
        }
    }
}

pub struct NodeRecordBuilder {
    record: NodeRecord,
    options: BuilderOptions,
    /// Directory-registered MACs, lowercased for case-insensitive matching.
    known_macs: HashSet<String>,
}

/// Strip a trailing "-bit" suffix and canonicalize separators in an
/// OS-reported instruction-set string: whitespace runs collapse to
/// underscores, underscores reconvert to hyphens.
/// "64-bit" -> "64", "x86-64 bit" -> "x86-64".
pub fn normalize_instruction_set(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join("_");
    let hyphenated = collapsed.replace('_', "-");
    hyphenated
        .strip_suffix("-bit")
        .unwrap_or(&hyphenated)
        .to_string()
}

fn is_cpu(proc: &ProcessorFacts) -> bool {
    proc.processor_type.as_deref() == Some("CPU")
}

impl NodeRecordBuilder {
    pub fn new(descriptor: &NodeDescriptor, options: BuilderOptions) -> Self {
        Self {
            record: NodeRecord::new(&descriptor.id, &descriptor.name),
            options,
            known_macs: descriptor
                .known_macs
                .iter()
                .map(|mac| mac.to_lowercase())
                .collect(),
        }
    }

    /// Run every population step in order and finalize the record.
    pub fn populate(mut self, facts: &NodeFacts) -> Result<NodeRecord> {
        self.set_chassis(&facts.chassis);
        self.set_architecture(&facts.system)?;
        self.set_bios(&facts.system);
        self.set_memory(&facts.system);
        self.set_processor(&facts.system)?;

        for device in &facts.system.pcie_devices {
            self.add_pcie_device(device);
        }

        for adapter in &facts.chassis.network_adapters {
            for port in &adapter.ports {
                self.add_network_port(adapter, port);
            }
        }

        for drive in &facts.system.drives {
            self.add_storage(drive);
        }

        self.set_placement(&facts.chassis)?;
        self.finalize()
    }

    pub fn set_chassis(&mut self, chassis: &ChassisFacts) {
        self.record.chassis = Chassis {
            manufacturer: chassis.manufacturer.clone(),
            name: chassis.model.clone(),
            serial: chassis.serial.clone(),
        };
    }

    /// Socket/thread counts and normalized platform type.
    /// An empty CPU list is fatal for this node.
    pub fn set_architecture(&mut self, system: &SystemFacts) -> Result<()> {
        let sockets = system.processors.iter().filter(|p| is_cpu(p)).count();
        if sockets == 0 {
            return Err(InventoryError::MissingField("processors"));
        }

        let platform_type = system.cpu_architecture.as_deref().map(|raw| {
            let normalized = normalize_instruction_set(raw);
            if normalized.contains("x86-64") {
                "x86_64".to_string()
            } else {
                normalized
            }
        });

        self.record.architecture = Some(Architecture {
            platform_type,
            smp_size: sockets,
            smt_size: system.cpu_count,
        });
        Ok(())
    }

    pub fn set_bios(&mut self, system: &SystemFacts) {
        self.record.bios = Some(Bios {
            release_date: system.bios_release_date.clone(),
            vendor: system.manufacturer.clone(),
            version: system.bios_version.clone(),
        });
    }

    /// Binary GiB humanized string plus decimal-byte integer. The unit mix
    /// is intentional and matches firmware conventions.
    pub fn set_memory(&mut self, system: &SystemFacts) {
        self.record.main_memory = system.memory.map(|mem| MainMemory {
            humanized_ram_size: format!("{} GiB", mem.size_gib),
            ram_size: (mem.size_gib * 1e9).round() as u64,
        });
    }

    /// Populate processor fields from the first CPU socket. Zero or missing
    /// OEM cache/clock values are omitted; gaps are filled from the CPU
    /// reference catalog when the exact model string is known.
    pub fn set_processor(&mut self, system: &SystemFacts) -> Result<()> {
        let cpu = system
            .processors
            .iter()
            .find(|p| is_cpu(p))
            .ok_or(InventoryError::MissingField("processors"))?;

        let nonzero = |raw: Option<f64>, scale: f64| -> Option<u64> {
            raw.filter(|v| *v != 0.0).map(|v| (v * scale) as u64)
        };

        let mut processor = Processor {
            model: cpu.model.clone().filter(|s| !s.is_empty()),
            vendor: cpu.manufacturer.clone().filter(|s| !s.is_empty()),
            version: cpu.version.clone().filter(|s| !s.is_empty()),
            clock_speed: nonzero(cpu.current_clock_speed_mhz, 1e6),
            cache_l1: nonzero(cpu.cache_l1_kb, 1e3),
            cache_l2: nonzero(cpu.cache_l2_kb, 1e3),
            cache_l3: nonzero(cpu.cache_l3_kb, 1e3),
            instruction_set: None,
        };

        if let Some(reference) = processor.model.as_deref().and_then(catalog::find_cpu) {
            debug!(node = %self.record.node_name, "CPU matched reference catalog entry");
            processor.instruction_set = Some(reference.instruction_set.to_string());
            if processor.clock_speed.is_none() {
                processor.clock_speed = reference.clock_speed;
            }
            if processor.cache_l2.is_none() {
                processor.cache_l2 = reference.cache_l2;
            }
            if processor.cache_l3.is_none() {
                processor.cache_l3 = reference.cache_l3;
            }
        }

        self.record.processor = processor;
        Ok(())
    }

    /// Classify one PCIe device, update GPU/FPGA state, and keep the record
    /// in the internal working set.
    pub fn add_pcie_device(&mut self, facts: &PcieDeviceFacts) {
        let device = PcieDeviceRecord {
            id: facts.id.clone(),
            name: facts.name.clone(),
            manufacturer: facts.manufacturer.clone(),
            vendor_id: facts.vendor_id.clone(),
            device_id: facts.device_id.clone(),
            device_class: facts.device_class.clone(),
            firmware_version: facts.firmware_version.clone(),
            part_number: facts.part_number.clone(),
            serial_number: facts.serial_number.clone(),
        };

        if self.options.detect_gpus {
            match classify_gpu_logged(&self.record.node_name, &device) {
                GpuClassification::Gpu(entry) => {
                    let gpu = &mut self.record.gpu;
                    gpu.gpu = true;
                    gpu.gpu_model = Some(entry.name.to_string());
                    gpu.gpu_name = Some(entry.friendly_name.to_string());
                    gpu.gpu_vendor = device
                        .manufacturer
                        .clone()
                        .or_else(|| Some(entry.manufacturer.to_string()));
                    gpu.gpu_count = Some(gpu.gpu_count.unwrap_or(0) + 1);
                }
                // Ignored, ambiguous, and unmatched devices contribute
                // nothing to GPU accounting.
                GpuClassification::GpuIgnored(_)
                | GpuClassification::Ambiguous(_)
                | GpuClassification::Unmatched
                | GpuClassification::NotRelevant => {}
            }
        }

        if self.options.detect_fpgas && self.record.fpga.is_none() {
            if let Some(entry) = classify::match_fpga(&device) {
                self.record.fpga = Some(FpgaRecord {
                    board_model: entry.board_model.to_string(),
                    board_vendor: entry.board_vendor.to_string(),
                    fpga_model: entry.fpga_model.to_string(),
                    fpga_vendor: entry.fpga_vendor.to_string(),
                });
            }
        }

        self.record.pcie_devices.push(device);
    }

    /// Build one port record. `enabled` is derived by cross-referencing the
    /// port's MACs against the directory's known MAC list.
    pub fn add_network_port(&mut self, adapter: &NetworkAdapterFacts, port: &NetworkPortFacts) {
        let Some(mac) = port.mac_addresses.first() else {
            warn!(
                node = %self.record.node_name,
                port = %port.id,
                "network port reports no MAC address, skipping"
            );
            return;
        };

        let enabled = port
            .mac_addresses
            .iter()
            .any(|m| self.known_macs.contains(&m.to_lowercase()));

        self.record.network_adapters.push(NetworkPortRecord {
            device: port.id.clone(),
            interface: port.link_technology.clone(),
            mac: mac.to_lowercase(),
            model: adapter.model.clone(),
            vendor: adapter.manufacturer.clone(),
            rate: port
                .link_speed_mbps
                .filter(|v| *v != 0.0)
                .map(|v| (v * 1e6) as u64),
            enabled,
            management: false,
        });
    }

    /// Capacity humanized as decimal GB.
    pub fn add_storage(&mut self, drive: &DriveFacts) {
        let size_gb = drive.capacity_bytes / 1_000_000_000;
        self.record.storage_devices.push(StorageRecord {
            device: drive.id.clone(),
            humanized_size: format!("{} GB", size_gb),
            interface: drive.protocol.clone(),
            model: drive.model.clone(),
            rev: drive.revision.clone(),
            size: drive.capacity_bytes,
            vendor: drive.manufacturer.clone(),
            media_type: drive.media_type.clone(),
        });
    }

    /// Physical placement from the BMC location block: `InfoFormat` and
    /// `Info` are semicolon-delimited key and value lists, zipped
    /// positionally. A missing location block is fatal for this node.
    pub fn set_placement(&mut self, chassis: &ChassisFacts) -> Result<()> {
        let (format, info) = match (&chassis.location_info_format, &chassis.location_info) {
            (Some(format), Some(info)) => (format, info),
            _ => return Err(InventoryError::MissingField("chassis location")),
        };

        let mut node = None;
        let mut rack = None;
        for (key, value) in format.split(';').zip(info.split(';')) {
            match key {
                "RackSlot" => node = Some(value.to_string()),
                "RackName" => rack = Some(value.to_string()),
                _ => {}
            }
        }

        self.record.placement = Some(Placement { node, rack });
        Ok(())
    }

    /// Set the InfiniBand flag and resolve the node type. Must run last:
    /// taxonomy depends on the populated GPU summary and network ports.
    pub fn finalize(mut self) -> Result<NodeRecord> {
        if self.options.check_infiniband {
            self.record.infiniband = self
                .record
                .network_adapters
                .iter()
                .any(|port| port.interface.as_deref() == Some("InfiniBand"));
        }

        let chassis_model = self.record.chassis.name.clone().unwrap_or_default();
        let cpu_model = self.record.processor.model.clone().unwrap_or_default();
        self.record.node_type = taxonomy::resolve_node_type(
            &chassis_model,
            &cpu_model,
            &self.record.gpu,
            self.options.strict_chassis_match,
        );

        Ok(self.record)
    }
}

/// Classify and emit the warning-level conditions with node context.
fn classify_gpu_logged(node_name: &str, device: &PcieDeviceRecord) -> GpuClassification {
    let result = classify::classify_gpu(device);
    match &result {
        GpuClassification::Unmatched => {
            warn!(
                node = %node_name,
                device = %device.id,
                vendor_id = device.vendor_id.as_deref().unwrap_or("?"),
                device_id = device.device_id.as_deref().unwrap_or("?"),
                "display controller has no catalog entry"
            );
        }
        GpuClassification::Ambiguous(candidates) => {
            warn!(
                node = %node_name,
                device = %device.id,
                candidates = candidates.len(),
                "multiple catalog entries match, device excluded from GPU accounting"
            );
        }
        _ => {}
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InventoryError;
    use crate::facts::{BmcEndpoint, MemoryFacts};

    fn descriptor(known_macs: &[&str]) -> NodeDescriptor {
        NodeDescriptor {
            id: "8fb8ab9e-1c85-4b2f-8dfd-1f8cf577f688".to_string(),
            name: "nc01".to_string(),
            bmc: BmcEndpoint {
                address: "10.0.0.1".to_string(),
                username: "root".to_string(),
                password: "calvin".to_string(),
            },
            known_macs: known_macs.iter().map(|m| m.to_string()).collect(),
        }
    }

    fn cpu_facts(model: &str) -> ProcessorFacts {
        ProcessorFacts {
            processor_type: Some("CPU".to_string()),
            model: Some(model.to_string()),
            manufacturer: Some("Intel".to_string()),
            version: Some(model.to_string()),
            current_clock_speed_mhz: Some(2600.0),
            cache_l1_kb: Some(64.0),
            cache_l2_kb: Some(1024.0),
            cache_l3_kb: Some(0.0),
        }
    }

    fn base_facts(chassis_model: &str, cpu_model: &str) -> NodeFacts {
        NodeFacts {
            system: SystemFacts {
                manufacturer: Some("Dell Inc.".to_string()),
                bios_version: Some("2.8.2".to_string()),
                schema_version: Some("1.6.0".to_string()),
                bios_release_date: Some("03/15/2021".to_string()),
                cpu_architecture: Some("x86-64 bit".to_string()),
                cpu_count: Some(48),
                processors: vec![cpu_facts(cpu_model)],
                memory: Some(MemoryFacts { size_gib: 128.0 }),
                drives: vec![],
                pcie_devices: vec![],
            },
            chassis: ChassisFacts {
                manufacturer: Some("Dell Inc.".to_string()),
                model: Some(chassis_model.to_string()),
                serial: Some("ABC1234".to_string()),
                location_info_format: Some("DataCenter;RackName;RackSlot".to_string()),
                location_info: Some("uc;r03;17".to_string()),
                network_adapters: vec![],
            },
        }
    }

    fn gpu_device(id: &str, name: &str, vendor_id: &str, device_id: Option<&str>) -> PcieDeviceFacts {
        PcieDeviceFacts {
            id: id.to_string(),
            name: Some(name.to_string()),
            manufacturer: Some("NVIDIA Corporation".to_string()),
            firmware_version: None,
            part_number: None,
            serial_number: None,
            device_class: Some("DisplayController".to_string()),
            vendor_id: Some(vendor_id.to_string()),
            device_id: device_id.map(str::to_string),
        }
    }

    #[test]
    fn normalizes_instruction_set_strings() {
        assert_eq!(normalize_instruction_set("64-bit"), "64");
        assert_eq!(normalize_instruction_set("x86-64 bit"), "x86-64");
        assert_eq!(normalize_instruction_set("x86-64"), "x86-64");
        assert_eq!(normalize_instruction_set("ARM 64 bit"), "ARM-64");
    }

    #[test]
    fn r740_with_gold_6126_resolves_compute_skylake() {
        let facts = base_facts("PowerEdge R740", "Intel Xeon Gold 6126");
        let record = NodeRecordBuilder::new(&descriptor(&[]), BuilderOptions::default())
            .populate(&facts)
            .unwrap();
        assert_eq!(record.node_type.as_deref(), Some("compute_skylake"));
        assert_eq!(record.architecture.as_ref().unwrap().smp_size, 1);
        assert_eq!(
            record.architecture.as_ref().unwrap().platform_type.as_deref(),
            Some("x86_64")
        );
    }

    #[test]
    fn memory_mixes_binary_humanized_and_decimal_bytes() {
        let facts = base_facts("PowerEdge R740", "Intel Xeon Gold 6126");
        let record = NodeRecordBuilder::new(&descriptor(&[]), BuilderOptions::default())
            .populate(&facts)
            .unwrap();
        let mem = record.main_memory.unwrap();
        assert_eq!(mem.ram_size, 128_000_000_000);
        assert_eq!(mem.humanized_ram_size, "128 GiB");
    }

    #[test]
    fn zero_oem_cache_is_omitted_not_zero() {
        let facts = base_facts("PowerEdge R740", "Some Unknown CPU");
        let record = NodeRecordBuilder::new(&descriptor(&[]), BuilderOptions::default())
            .populate(&facts)
            .unwrap();
        assert_eq!(record.processor.cache_l3, None);
        assert_eq!(record.processor.cache_l2, Some(1_024_000));
        assert_eq!(record.processor.clock_speed, Some(2_600_000_000));
    }

    #[test]
    fn catalog_fills_gaps_for_known_cpu_models() {
        let mut facts = base_facts(
            "PowerEdge R740",
            "Intel(R) Xeon(R) Gold 6126 CPU @ 2.60GHz",
        );
        // Firmware reports zeros for everything OEM.
        let cpu = &mut facts.system.processors[0];
        cpu.current_clock_speed_mhz = Some(0.0);
        cpu.cache_l2_kb = None;
        cpu.cache_l3_kb = Some(0.0);

        let record = NodeRecordBuilder::new(&descriptor(&[]), BuilderOptions::default())
            .populate(&facts)
            .unwrap();
        assert_eq!(record.processor.clock_speed, Some(2_600_000_000));
        assert_eq!(record.processor.cache_l3, Some(20_185_088));
        assert_eq!(record.processor.instruction_set.as_deref(), Some("x86-64"));
    }

    #[test]
    fn empty_processor_list_is_fatal_for_the_node() {
        let mut facts = base_facts("PowerEdge R740", "Intel Xeon Gold 6126");
        facts.system.processors.clear();
        let err = NodeRecordBuilder::new(&descriptor(&[]), BuilderOptions::default())
            .populate(&facts)
            .unwrap_err();
        assert!(matches!(err, InventoryError::MissingField("processors")));
    }

    #[test]
    fn missing_location_block_is_fatal_for_the_node() {
        let mut facts = base_facts("PowerEdge R740", "Intel Xeon Gold 6126");
        facts.chassis.location_info = None;
        let err = NodeRecordBuilder::new(&descriptor(&[]), BuilderOptions::default())
            .populate(&facts)
            .unwrap_err();
        assert!(matches!(err, InventoryError::MissingField(_)));
    }

    #[test]
    fn placement_zips_format_and_info_positionally() {
        let facts = base_facts("PowerEdge R740", "Intel Xeon Gold 6126");
        let record = NodeRecordBuilder::new(&descriptor(&[]), BuilderOptions::default())
            .populate(&facts)
            .unwrap();
        let placement = record.placement.unwrap();
        assert_eq!(placement.rack.as_deref(), Some("r03"));
        assert_eq!(placement.node.as_deref(), Some("17"));
    }

    #[test]
    fn single_gpu_match_increments_count_once() {
        let mut facts = base_facts("PowerEdge C4140", "Intel Xeon Gold 6126");
        facts.system.pcie_devices = vec![
            gpu_device("59-0", "GV100GL [Tesla V100 SXM2 32GB]", "0x10de", Some("0x1db5")),
            gpu_device("60-0", "GV100GL [Tesla V100 SXM2 32GB]", "0x10de", Some("0x1db5")),
        ];
        let record = NodeRecordBuilder::new(&descriptor(&[]), BuilderOptions::default())
            .populate(&facts)
            .unwrap();
        assert!(record.gpu.gpu);
        assert_eq!(record.gpu.gpu_count, Some(2));
        assert_eq!(record.gpu.gpu_name.as_deref(), Some("V100"));
        // GPU rule wins over the C4140 chassis mapping.
        assert_eq!(
            record.node_type.as_deref(),
            Some("gpu_gv100gl_[tesla_v100_sxm2_32gb]")
        );
    }

    #[test]
    fn ignored_and_ambiguous_devices_leave_gpu_count_alone() {
        let mut facts = base_facts("PowerEdge R740", "Intel Xeon Gold 6126");
        facts.system.pcie_devices = vec![
            // Integrated BMC graphics: single ignore=true match.
            gpu_device(
                "3-0",
                "Integrated Matrox G200eW3 Graphics Controller",
                "0x102b",
                Some("0x0536"),
            ),
            // Two A100 80GB entries share a null device ID: ambiguous.
            gpu_device("59-0", "GA100 [A100 PCIe 80GB]", "0x10de", None),
        ];
        let record = NodeRecordBuilder::new(&descriptor(&[]), BuilderOptions::default())
            .populate(&facts)
            .unwrap();
        assert!(!record.gpu.gpu);
        assert_eq!(record.gpu.gpu_count, None);
        assert_eq!(record.node_type.as_deref(), Some("compute_skylake"));
    }

    #[test]
    fn fpga_match_populates_board_and_silicon() {
        let mut facts = base_facts("PowerEdge R740", "Intel Xeon Gold 6126");
        facts.system.pcie_devices = vec![PcieDeviceFacts {
            id: "24-0".to_string(),
            name: Some("Alveo U280".to_string()),
            manufacturer: Some("Xilinx Corporation".to_string()),
            firmware_version: None,
            part_number: None,
            serial_number: None,
            device_class: Some("ProcessingAccelerators".to_string()),
            vendor_id: Some("0x10ee".to_string()),
            device_id: Some("0x500c".to_string()),
        }];
        let record = NodeRecordBuilder::new(&descriptor(&[]), BuilderOptions::default())
            .populate(&facts)
            .unwrap();
        let fpga = record.fpga.unwrap();
        assert_eq!(fpga.board_model, "Alveo U280");
        assert_eq!(fpga.fpga_model, "XCU280");
        // Not a display controller, so GPU accounting is untouched.
        assert!(!record.gpu.gpu);
    }

    #[test]
    fn port_enabled_matches_directory_macs_case_insensitively() {
        let mut facts = base_facts("PowerEdge R740", "Intel Xeon Gold 6126");
        facts.chassis.network_adapters = vec![NetworkAdapterFacts {
            id: "NIC.Slot.1".to_string(),
            model: Some("ConnectX-5".to_string()),
            manufacturer: Some("Mellanox Technologies".to_string()),
            ports: vec![
                NetworkPortFacts {
                    id: "NIC.Slot.1-1".to_string(),
                    mac_addresses: vec!["AA:BB:CC:DD:EE:01".to_string()],
                    link_technology: Some("Ethernet".to_string()),
                    link_speed_mbps: Some(25000.0),
                },
                NetworkPortFacts {
                    id: "NIC.Slot.1-2".to_string(),
                    mac_addresses: vec!["AA:BB:CC:DD:EE:02".to_string()],
                    link_technology: Some("InfiniBand".to_string()),
                    link_speed_mbps: Some(0.0),
                },
            ],
        }];
        let record = NodeRecordBuilder::new(
            &descriptor(&["aa:bb:cc:dd:ee:01"]),
            BuilderOptions::default(),
        )
        .populate(&facts)
        .unwrap();

        assert_eq!(record.network_adapters.len(), 2);
        let first = &record.network_adapters[0];
        assert!(first.enabled);
        assert_eq!(first.mac, "aa:bb:cc:dd:ee:01");
        assert_eq!(first.rate, Some(25_000_000_000));
        let second = &record.network_adapters[1];
        assert!(!second.enabled);
        assert_eq!(second.rate, None);
        assert!(record.infiniband);
    }

    #[test]
    fn storage_capacity_humanized_as_decimal_gb() {
        let mut facts = base_facts("PowerEdge R740", "Intel Xeon Gold 6126");
        facts.system.drives = vec![DriveFacts {
            id: "Disk.Bay.0".to_string(),
            model: Some("MZ7KM240HMHQ0D3".to_string()),
            manufacturer: Some("Samsung".to_string()),
            capacity_bytes: 240_057_409_536,
            protocol: Some("SATA".to_string()),
            revision: Some("GD57".to_string()),
            media_type: Some("SSD".to_string()),
        }];
        let record = NodeRecordBuilder::new(&descriptor(&[]), BuilderOptions::default())
            .populate(&facts)
            .unwrap();
        let drive = &record.storage_devices[0];
        assert_eq!(drive.humanized_size, "240 GB");
        assert_eq!(drive.size, 240_057_409_536);
    }

    #[test]
    fn option_toggles_suppress_detection_independently() {
        let mut facts = base_facts("PowerEdge C4140", "Intel Xeon Gold 6126");
        facts.system.pcie_devices = vec![gpu_device(
            "59-0",
            "GV100GL [Tesla V100 SXM2 32GB]",
            "0x10de",
            Some("0x1db5"),
        )];
        let options = BuilderOptions {
            detect_gpus: false,
            ..BuilderOptions::default()
        };
        let record = NodeRecordBuilder::new(&descriptor(&[]), options)
            .populate(&facts)
            .unwrap();
        assert!(!record.gpu.gpu);
        // With GPU detection off, chassis classification applies.
        assert_eq!(record.node_type.as_deref(), Some("gpu_v100"));
        // The device itself is still recorded in the working set.
        assert_eq!(record.pcie_devices.len(), 1);
    }
}
