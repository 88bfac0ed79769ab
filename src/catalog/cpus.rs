//! CPU reference table and lookup.
//! Keyed by the exact model string as reported by firmware. Entries carry
//! the datasheet values the OEM blocks often omit or zero out, plus the
//! firmware processor-ID register block for cross-checking.

/// Firmware processor-ID registers for one CPU part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessorIdRef {
    pub effective_family: &'static str,
    pub effective_model: &'static str,
    pub identification_registers: &'static str,
    pub microcode_info: Option<&'static str>,
    pub step: &'static str,
    pub vendor_id: &'static str,
}

/// Reference specification for one CPU model. Cache sizes in bytes, clock
/// speed in Hz. Sparse entries (no datasheet values collected yet) still
/// pin down vendor, family, and instruction set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuReferenceEntry {
    pub vendor: &'static str,
    pub model_family: &'static str,
    pub architecture: &'static str,
    pub instruction_set: &'static str,
    pub clock_speed: Option<u64>,
    pub cache_l1: Option<u64>,
    pub cache_l1d: Option<u64>,
    pub cache_l1i: Option<u64>,
    pub cache_l2: Option<u64>,
    pub cache_l3: Option<u64>,
    pub other_description: Option<&'static str>,
    pub processor_id: Option<ProcessorIdRef>,
}

const fn intel_xeon() -> CpuReferenceEntry {
    CpuReferenceEntry {
        vendor: "Intel",
        model_family: "Intel Xeon",
        architecture: "x86",
        instruction_set: "x86-64",
        clock_speed: None,
        cache_l1: None,
        cache_l1d: None,
        cache_l1i: None,
        cache_l2: None,
        cache_l3: None,
        other_description: None,
        processor_id: None,
    }
}

const fn amd_epyc() -> CpuReferenceEntry {
    CpuReferenceEntry {
        vendor: "AMD",
        model_family: "AMD EPYC",
        ..intel_xeon()
    }
}

static XEON_GOLD_6126: CpuReferenceEntry = CpuReferenceEntry {
    clock_speed: Some(2_600_000_000),
    cache_l1d: Some(32_768),
    cache_l1i: Some(32_768),
    cache_l2: Some(1_048_576),
    cache_l3: Some(20_185_088),
    other_description: Some("Intel(R) Xeon(R) Gold 6126 CPU @ 2.60GHz"),
    processor_id: Some(ProcessorIdRef {
        effective_family: "6",
        effective_model: "85",
        identification_registers: "0x00050654",
        microcode_info: None,
        step: "4",
        vendor_id: "GenuineIntel",
    }),
    ..intel_xeon()
};

static XEON_GOLD_6240R: CpuReferenceEntry = CpuReferenceEntry {
    processor_id: Some(ProcessorIdRef {
        effective_family: "6",
        effective_model: "85",
        identification_registers: "0x00050657",
        microcode_info: Some("0x5003005"),
        step: "7",
        vendor_id: "GenuineIntel",
    }),
    ..intel_xeon()
};

static XEON_GOLD_6230: CpuReferenceEntry = intel_xeon();
static XEON_PLATINUM_8276: CpuReferenceEntry = intel_xeon();

static EPYC_7352: CpuReferenceEntry = CpuReferenceEntry {
    processor_id: Some(ProcessorIdRef {
        effective_family: "15",
        effective_model: "49",
        identification_registers: "0x00830F10",
        microcode_info: Some("0x830104D"),
        step: "0",
        vendor_id: "AuthenticAMD",
    }),
    ..amd_epyc()
};

static CPU_CATALOG: &[(&str, &CpuReferenceEntry)] = &[
    ("AMD EPYC 7352 24-Core Processor", &EPYC_7352),
    ("Intel(R) Xeon(R) Gold 6240R CPU @ 2.40GHz", &XEON_GOLD_6240R),
    ("Intel(R) Xeon(R) Gold 6126 CPU @ 2.60GHz", &XEON_GOLD_6126),
    ("Intel(R) Xeon(R) Platinum 8276 CPU @ 2.20GHz", &XEON_PLATINUM_8276),
    ("Intel(R) Xeon(R) Gold 6230 CPU @ 2.10GHz", &XEON_GOLD_6230),
];

/// Look up a CPU reference spec by the exact firmware model string.
pub fn find_cpu(model_name: &str) -> Option<&'static CpuReferenceEntry> {
    CPU_CATALOG
        .iter()
        .find(|(key, _)| *key == model_name)
        .map(|(_, entry)| *entry)
}
