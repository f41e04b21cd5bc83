use crate::types::{Quota, ResourceLimit};

/// Extracts the model tag from a GPU quota metric of form
/// `NVIDIA_<MODEL>_GPUS`. Prefixed metrics such as
/// `PREEMPTIBLE_NVIDIA_V100_GPUS` do not match.
fn gpu_metric_model(metric: &str) -> Option<&str> {
    let model = metric.strip_prefix("NVIDIA_")?.strip_suffix("_GPUS")?;
    if model.is_empty()
        || !model
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
    {
        return None;
    }
    Some(model)
}

/// Translates region quotas into a cluster resource-limit list.
///
/// The `CPUS` metric expands to a cpu limit plus a memory limit of
/// `gb_per_cpu` GB per core; `NVIDIA_<MODEL>_GPUS` metrics map to the
/// matching accelerator resource type; everything else is dropped.
/// Output order follows input order and repeated metrics are not
/// deduplicated, trusting the provider not to emit duplicates.
pub fn resource_limits_from_quotas(quotas: &[Quota], gb_per_cpu: u32) -> Vec<ResourceLimit> {
    let mut limits = Vec::new();

    for quota in quotas {
        if quota.metric == "CPUS" {
            let cpus = quota.limit as i64;
            limits.push(ResourceLimit {
                resource_type: "cpu".to_string(),
                maximum: cpus.to_string(),
            });
            limits.push(ResourceLimit {
                resource_type: "memory".to_string(),
                maximum: (cpus * i64::from(gb_per_cpu)).to_string(),
            });
            continue;
        }

        if let Some(model) = gpu_metric_model(&quota.metric) {
            limits.push(ResourceLimit {
                resource_type: format!("nvidia-tesla-{}", model.to_lowercase()),
                maximum: (quota.limit as i64).to_string(),
            });
        }
    }

    limits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quota(metric: &str, limit: f64) -> Quota {
        Quota {
            metric: metric.to_string(),
            limit,
            usage: 0.0,
        }
    }

    fn limit(resource_type: &str, maximum: &str) -> ResourceLimit {
        ResourceLimit {
            resource_type: resource_type.to_string(),
            maximum: maximum.to_string(),
        }
    }

    #[test]
    fn cpus_expand_to_cpu_and_memory() {
        let limits = resource_limits_from_quotas(&[quota("CPUS", 4.0)], 16);
        assert_eq!(limits, vec![limit("cpu", "4"), limit("memory", "64")]);
    }

    #[test]
    fn gpu_metric_maps_to_accelerator_resource_type() {
        let limits = resource_limits_from_quotas(&[quota("NVIDIA_V100_GPUS", 2.0)], 16);
        assert_eq!(limits, vec![limit("nvidia-tesla-v100", "2")]);
    }

    #[test]
    fn unrelated_metrics_are_dropped() {
        let limits = resource_limits_from_quotas(&[quota("DISKS_TOTAL_GB", 10.0)], 16);
        assert!(limits.is_empty());
    }

    #[test]
    fn preemptible_gpu_metrics_do_not_match() {
        let limits = resource_limits_from_quotas(&[quota("PREEMPTIBLE_NVIDIA_V100_GPUS", 2.0)], 16);
        assert!(limits.is_empty());
    }

    #[test]
    fn output_preserves_input_order() {
        let quotas = [
            quota("NVIDIA_K80_GPUS", 8.0),
            quota("CPUS", 2.0),
            quota("NVIDIA_T4_GPUS", 1.0),
        ];
        let limits = resource_limits_from_quotas(&quotas, 16);
        assert_eq!(
            limits,
            vec![
                limit("nvidia-tesla-k80", "8"),
                limit("cpu", "2"),
                limit("memory", "32"),
                limit("nvidia-tesla-t4", "1"),
            ]
        );
    }

    #[test]
    fn repeated_metrics_emit_repeated_limits() {
        let quotas = [quota("CPUS", 2.0), quota("CPUS", 4.0)];
        let limits = resource_limits_from_quotas(&quotas, 16);
        assert_eq!(limits.len(), 4);
        assert_eq!(limits[2], limit("cpu", "4"));
    }
}
