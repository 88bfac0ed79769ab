//! Node taxonomy resolver: chassis model, CPU model, and GPU state map to
//! one node-type string.
//!
//! Chassis matching is substring containment against an ordered table,
//! reproducing the documented fleet behavior. It is order-dependent and
//! prone to accidental collisions; strict mode (config option) requires the
//! token to appear as a whole whitespace-delimited word instead.

use crate::record::GpuSummary;

/// Ordered chassis-model tokens to node classes. First containment wins.
pub const CHASSIS_CLASSES: &[(&str, &str)] = &[
    ("R740", "compute"),
    ("R6515", "mgmt"),
    ("R6525", "storage_nvme"),
    ("C4140", "gpu_v100"),
    ("R840", "compute_nvdimm"),
];

/// CPU model substrings to series names, consulted for `compute` nodes only.
pub const CPU_SERIES: &[(&str, &str)] = &[
    ("Gold 6126", "skylake"),
    ("Gold 6240R", "cascadelake_r"),
];

fn chassis_class(chassis_model: &str, strict: bool) -> Option<&'static str> {
    CHASSIS_CLASSES
        .iter()
        .find(|(token, _)| {
            if strict {
                chassis_model.split_whitespace().any(|word| word == *token)
            } else {
                chassis_model.contains(token)
            }
        })
        .map(|(_, class)| *class)
}

fn cpu_series(cpu_model: &str) -> Option<&'static str> {
    CPU_SERIES
        .iter()
        .find(|(token, _)| cpu_model.contains(token))
        .map(|(_, series)| *series)
}

/// Resolve a node's type string. Pure and idempotent.
///
/// Precedence, first match wins:
/// 1. GPU present: `gpu_<model>` (lowercased, spaces to underscores). The
///    CPU series is never appended for GPU nodes.
/// 2. Chassis class from the ordered table; no match resolves to `None`.
/// 3. A `compute` class gets a `_<cpu_series>` suffix when one matches.
///    With no matching series the type stays bare `"compute"` rather than
///    embedding a null-like token.
pub fn resolve_node_type(
    chassis_model: &str,
    cpu_model: &str,
    gpu: &GpuSummary,
    strict: bool,
) -> Option<String> {
    if gpu.gpu {
        let model = gpu.gpu_model.as_deref().unwrap_or_default();
        return Some(format!(
            "gpu_{}",
            model.to_lowercase().replace(' ', "_")
        ));
    }

    let class = chassis_class(chassis_model, strict)?;

    if class == "compute" {
        return Some(match cpu_series(cpu_model) {
            Some(series) => format!("compute_{}", series),
            None => "compute".to_string(),
        });
    }

    Some(class.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gpu_present(model: &str) -> GpuSummary {
        GpuSummary {
            gpu: true,
            gpu_model: Some(model.to_string()),
            gpu_name: None,
            gpu_vendor: None,
            gpu_count: Some(1),
        }
    }

    #[test]
    fn r740_with_skylake_gold_is_compute_skylake() {
        let node_type = resolve_node_type(
            "PowerEdge R740",
            "Intel Xeon Gold 6126",
            &GpuSummary::default(),
            false,
        );
        assert_eq!(node_type.as_deref(), Some("compute_skylake"));
    }

    #[test]
    fn compute_with_unknown_cpu_stays_bare_compute() {
        let node_type = resolve_node_type(
            "PowerEdge R740",
            "Intel Xeon Platinum 8276",
            &GpuSummary::default(),
            false,
        );
        assert_eq!(node_type.as_deref(), Some("compute"));
    }

    #[test]
    fn gpu_presence_overrides_chassis_class() {
        // C4140 maps to gpu_v100 by chassis, but the detected GPU wins.
        let node_type = resolve_node_type(
            "PowerEdge C4140",
            "Intel Xeon Gold 6126",
            &gpu_present("GV100GL [Tesla V100 SXM2 32GB]"),
            false,
        );
        assert_eq!(
            node_type.as_deref(),
            Some("gpu_gv100gl_[tesla_v100_sxm2_32gb]")
        );
    }

    #[test]
    fn gpu_wins_regardless_of_chassis_string() {
        for chassis in ["PowerEdge R740", "PowerEdge R6515", "Unknown Box"] {
            let node_type =
                resolve_node_type(chassis, "whatever", &gpu_present("RTX 6000"), false);
            assert_eq!(node_type.as_deref(), Some("gpu_rtx_6000"));
        }
    }

    #[test]
    fn cpu_series_not_appended_to_non_compute_classes() {
        let node_type = resolve_node_type(
            "PowerEdge R6525",
            "Intel Xeon Gold 6240R",
            &GpuSummary::default(),
            false,
        );
        assert_eq!(node_type.as_deref(), Some("storage_nvme"));
    }

    #[test]
    fn unmatched_chassis_resolves_to_none() {
        let node_type = resolve_node_type(
            "Supermicro X11",
            "Intel Xeon Gold 6126",
            &GpuSummary::default(),
            false,
        );
        assert_eq!(node_type, None);
    }

    #[test]
    fn resolution_is_idempotent() {
        let gpu = GpuSummary::default();
        let a = resolve_node_type("PowerEdge R840", "EPYC 7352", &gpu, false);
        let b = resolve_node_type("PowerEdge R840", "EPYC 7352", &gpu, false);
        assert_eq!(a, b);
        assert_eq!(a.as_deref(), Some("compute_nvdimm"));
    }

    #[test]
    fn strict_mode_requires_whole_word_tokens() {
        // Substring mode happily matches a token embedded in another word.
        assert_eq!(
            resolve_node_type("XR7400", "cpu", &GpuSummary::default(), false).as_deref(),
            Some("compute")
        );
        // Strict mode does not.
        assert_eq!(
            resolve_node_type("XR7400", "cpu", &GpuSummary::default(), true),
            None
        );
        // Whole words still match in strict mode.
        assert_eq!(
            resolve_node_type("PowerEdge R740", "cpu", &GpuSummary::default(), true).as_deref(),
            Some("compute")
        );
    }
}
