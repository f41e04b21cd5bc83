pub mod error;
pub mod limits;
pub mod types;
pub mod validate;

pub use error::{trap, AxlError};

use types::{Operation, Quota, ZoneAccelerator};

/// Cluster operations surface of the container API.
pub trait ClusterApi {
    /// Fetch a long-running operation by fully-qualified name,
    /// of form `projects/*/locations/*/operations/*`.
    fn get_operation(&self, name: &str) -> Result<Operation, AxlError>;
}

/// Accelerator and quota surface of the compute API.
///
/// List calls consume only the first page of results.
pub trait ComputeApi {
    /// Accelerator types offered in a zone, with per-instance card maximums.
    fn accelerator_types(&self, zone: &str) -> Result<Vec<ZoneAccelerator>, AxlError>;

    /// Quotas for a region.
    fn region_quotas(&self, region: &str) -> Result<Vec<Quota>, AxlError>;
}

/// TPU API surface.
///
/// List calls consume only the first page of results.
pub trait TpuApi {
    /// Raw TPU accelerator type strings offered in a zone (e.g. `v2-8`).
    fn tpu_types(&self, zone: &str) -> Result<Vec<String>, AxlError>;

    /// Supported TPU runtime versions for a zone.
    fn runtime_versions(&self, zone: &str) -> Result<Vec<String>, AxlError>;
}
