//! Zone and region queries, mapping raw API responses into the typed
//! accelerator model. Accelerator names the converters do not recognize
//! are dropped from results rather than reported, so callers see a
//! filtered list.

use axl_core::limits::resource_limits_from_quotas;
use axl_core::types::{Gpu, GpuSpec, Quota, ResourceLimit, TpuSpec};
use axl_core::{AxlError, ComputeApi, TpuApi};

use crate::constants::MAX_GB_PER_CPU;

/// GPU accelerator types available in a zone. `count` is the zone's
/// maximum cards per instance.
pub fn get_zone_gpu_types(api: &impl ComputeApi, zone: &str) -> Result<Vec<GpuSpec>, AxlError> {
    let accelerators = api.accelerator_types(zone)?;

    Ok(accelerators
        .into_iter()
        .filter_map(|a| {
            let gpu: Gpu = a.name.parse().ok()?;
            Some(GpuSpec {
                gpu,
                count: a.max_cards_per_instance,
            })
        })
        .collect())
}

/// TPU accelerator types available in a zone.
pub fn get_zone_tpu_types(api: &impl TpuApi, zone: &str) -> Result<Vec<TpuSpec>, AxlError> {
    let types = api.tpu_types(zone)?;
    Ok(types.iter().filter_map(|t| t.parse().ok()).collect())
}

/// Supported TPU runtime versions for a zone.
pub fn get_tpu_drivers(api: &impl TpuApi, zone: &str) -> Result<Vec<String>, AxlError> {
    api.runtime_versions(zone)
}

/// Compute quotas for a region. Includes cpu and gpu quotas; tpu quotas
/// are not part of this surface.
pub fn get_region_quotas(api: &impl ComputeApi, region: &str) -> Result<Vec<Quota>, AxlError> {
    api.region_quotas(region)
}

/// Resource limits for cluster creation, derived from region quotas.
pub fn generate_resource_limits(
    api: &impl ComputeApi,
    region: &str,
) -> Result<Vec<ResourceLimit>, AxlError> {
    let quotas = api.region_quotas(region)?;
    Ok(resource_limits_from_quotas(&quotas, MAX_GB_PER_CPU))
}
