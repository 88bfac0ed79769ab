//! Device classifier: decides whether one PCIe device is a GPU, an FPGA,
//! or irrelevant, against the reference catalog.

use tracing::warn;

use crate::catalog::{self, FpgaEntry, GpuEntry};
use crate::record::PcieDeviceRecord;

/// PCIe device class reported for display controllers.
pub const DISPLAY_CONTROLLER_CLASS: &str = "DisplayController";

/// Outcome of GPU classification for one PCIe device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GpuClassification {
    /// Device class is not a display controller; not a GPU candidate.
    NotRelevant,
    /// Exactly one non-ignored catalog match.
    Gpu(&'static GpuEntry),
    /// Exactly one match, flagged as non-accelerator (integrated graphics).
    /// Excluded from GPU accounting without a warning.
    GpuIgnored(&'static GpuEntry),
    /// More than one catalog match. First-match-wins would silently hide
    /// catalog data errors, so the device contributes nothing instead.
    Ambiguous(Vec<&'static GpuEntry>),
    /// Display controller with no catalog entry at all.
    Unmatched,
}

/// Classify one PCIe device against the GPU catalog.
/// `Unmatched` and `Ambiguous` are warning conditions for the caller;
/// neither aborts node processing.
pub fn classify_gpu(device: &PcieDeviceRecord) -> GpuClassification {
    if device.device_class.as_deref() != Some(DISPLAY_CONTROLLER_CLASS) {
        return GpuClassification::NotRelevant;
    }

    let Some(vendor_id) = device.vendor_id.as_deref() else {
        warn!(
            device = %device.id,
            "display controller reports no vendor ID, cannot classify"
        );
        return GpuClassification::Unmatched;
    };

    let candidates =
        catalog::find_gpu(vendor_id, device.device_id.as_deref(), device.name.as_deref());

    match candidates.len() {
        0 => GpuClassification::Unmatched,
        1 => {
            let single = candidates[0];
            if single.ignore {
                GpuClassification::GpuIgnored(single)
            } else {
                GpuClassification::Gpu(single)
            }
        }
        _ => GpuClassification::Ambiguous(candidates),
    }
}

/// Match one PCIe device against the FPGA catalog.
/// Runs for every device regardless of PCIe class: accelerator class codes
/// are unreliable across vendors. Keyed by manufacturer and device ID only.
pub fn match_fpga(device: &PcieDeviceRecord) -> Option<&'static FpgaEntry> {
    let manufacturer = device.manufacturer.as_deref()?;
    let device_id = device.device_id.as_deref()?;
    catalog::find_fpga(manufacturer, device_id)
}
