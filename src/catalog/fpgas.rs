//! FPGA reference table and lookup.
//! FPGA boards are keyed by PCIe manufacturer string and device ID, with no
//! vendor-ID cross-check: the PCIe class code for accelerators is unreliable
//! across vendors, so matching never consults the device class either.

/// One known FPGA board, carrying both the board identity and the silicon
/// on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FpgaEntry {
    pub manufacturer: &'static str,
    pub device_id: &'static str,
    pub board_model: &'static str,
    pub board_vendor: &'static str,
    pub fpga_model: &'static str,
    pub fpga_vendor: &'static str,
}

const fn alveo_u280(device_id: &'static str) -> FpgaEntry {
    FpgaEntry {
        manufacturer: "Xilinx Corporation",
        device_id,
        board_model: "Alveo U280",
        board_vendor: "Xilinx Corporation",
        fpga_model: "XCU280",
        fpga_vendor: "Xilinx Corporation",
    }
}

// The U280 shows up under two device IDs depending on shell image.
pub static FPGA_CATALOG: &[FpgaEntry] = &[alveo_u280("0x500c"), alveo_u280("0x500d")];

/// Look up an FPGA board by PCIe manufacturer and device ID.
/// First match wins; callers must not assume the table enforces uniqueness.
pub fn find_fpga(manufacturer: &str, device_id: &str) -> Option<&'static FpgaEntry> {
    FPGA_CATALOG.iter().find(|entry| {
        entry.manufacturer == manufacturer && entry.device_id.eq_ignore_ascii_case(device_id)
    })
}
