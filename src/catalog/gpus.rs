//! GPU reference table and lookup.
//! Entries come from PCIe vendor/device IDs observed on fleet hardware.
//! Some parts (SXM/PCIe variants of the same silicon) report no stable
//! device ID; those entries match by the reported device name instead.

/// One known GPU part. `ignore` marks devices that share the display
/// controller PCIe class but are not accelerators (integrated BMC graphics)
/// and must stay out of GPU accounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpuEntry {
    pub vendor_id: &'static str,
    pub device_id: Option<&'static str>,
    pub name: &'static str,
    pub friendly_name: &'static str,
    pub manufacturer: &'static str,
    pub ignore: bool,
}

const fn nvidia(
    name: &'static str,
    friendly_name: &'static str,
    device_id: Option<&'static str>,
) -> GpuEntry {
    GpuEntry {
        vendor_id: "0x10de",
        device_id,
        name,
        friendly_name,
        manufacturer: "NVIDIA Corporation",
        ignore: false,
    }
}

const fn amd(
    name: &'static str,
    friendly_name: &'static str,
    device_id: Option<&'static str>,
) -> GpuEntry {
    GpuEntry {
        vendor_id: "0x1002",
        device_id,
        name,
        friendly_name,
        manufacturer: "Advanced Micro Devices, Inc. [AMD/ATI]",
        ignore: false,
    }
}

const fn matrox_integrated(name: &'static str, device_id: &'static str) -> GpuEntry {
    GpuEntry {
        vendor_id: "0x102b",
        device_id: Some(device_id),
        name,
        friendly_name: name,
        manufacturer: "Matrox Electronics Systems Ltd.",
        ignore: true,
    }
}

pub static GPU_CATALOG: &[GpuEntry] = &[
    nvidia("GA100 [A100 PCIe 40GB]", "A100", Some("0x20f1")),
    // PCIe and SXM4 80GB variants report the same name and no device ID;
    // the classifier surfaces them as an ambiguity rather than guessing.
    nvidia("GA100 [A100 PCIe 80GB]", "A100", None),
    nvidia("GA100 [A100 PCIe 80GB]", "A100", None),
    nvidia("GV100GL [Tesla V100 PCIe 32GB]", "V100", None),
    nvidia("GV100GL [Tesla V100 SXM2 32GB]", "V100", None),
    nvidia("GP100GL [Tesla P100 PCIe 16GB]", "P100", Some("0x15f8")),
    nvidia("TU102GL [Quadro RTX 6000/8000]", "RTX6000", None),
    amd("Arcturus GL-XL [AMD Instinct MI100]", "MI100", Some("0x738c")),
    matrox_integrated("Integrated Matrox G200eW3 Graphics Controller", "0x0536"),
    matrox_integrated("G200eR2", "0x0534"),
];

/// Look up every catalog entry matching a PCIe function.
///
/// An entry matches when its vendor ID equals `vendor_id` and either its
/// device ID equals `device_id`, or the entry carries no device ID and its
/// name equals `device_name`.
///
/// Zero, one, or several entries may come back; the catalog makes no
/// uniqueness guarantee.
pub fn find_gpu(
    vendor_id: &str,
    device_id: Option<&str>,
    device_name: Option<&str>,
) -> Vec<&'static GpuEntry> {
    GPU_CATALOG
        .iter()
        .filter(|entry| {
            if !entry.vendor_id.eq_ignore_ascii_case(vendor_id) {
                return false;
            }
            match entry.device_id {
                Some(known) => device_id.is_some_and(|seen| known.eq_ignore_ascii_case(seen)),
                None => device_name == Some(entry.name),
            }
        })
        .collect()
}
