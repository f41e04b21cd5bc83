use std::collections::HashMap;

use tracing::error;

use crate::types::{Gpu, GpuSpec};

/// Checks a requested GPU spec against a map of per-kind maximums.
///
/// Returns false, logging the reason, when the GPU kind is absent from
/// the map or the requested count exceeds the mapped maximum.
/// `limit_type` labels the limit source in log messages (e.g. "zone" or
/// "quota").
pub fn validate_gpu_spec_against_limits(
    spec: &GpuSpec,
    limits: &HashMap<Gpu, u32>,
    limit_type: &str,
) -> bool {
    let Some(max_count) = limits.get(&spec.gpu) else {
        let supported: Vec<String> = limits.keys().map(|g| g.to_string()).collect();
        error!(
            "unsupported gpu type {}, supported types for {limit_type}: {}",
            spec.gpu,
            supported.join(", ")
        );
        return false;
    };

    if spec.count > *max_count {
        error!(
            "requested {} count {} unsupported, {limit_type} max = {max_count}",
            spec.gpu, spec.count
        );
        return false;
    }

    true
}
