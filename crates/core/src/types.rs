use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AxlError;

/// GPU accelerator families offered by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gpu {
    K80,
    P4,
    P100,
    T4,
    V100,
    A100,
}

impl Gpu {
    /// Lowercase model tag as it appears in accelerator strings.
    pub fn model(&self) -> &'static str {
        match self {
            Gpu::K80 => "k80",
            Gpu::P4 => "p4",
            Gpu::P100 => "p100",
            Gpu::T4 => "t4",
            Gpu::V100 => "v100",
            Gpu::A100 => "a100",
        }
    }
}

impl fmt::Display for Gpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "nvidia-tesla-{}", self.model())
    }
}

impl FromStr for Gpu {
    type Err = AxlError;

    /// Parses a provider accelerator string of form `nvidia-tesla-<model>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let model = s
            .strip_prefix("nvidia-tesla-")
            .ok_or_else(|| AxlError::Parse(format!("malformed gpu accelerator string: '{s}'")))?;

        match model {
            "k80" => Ok(Gpu::K80),
            "p4" => Ok(Gpu::P4),
            "p100" => Ok(Gpu::P100),
            "t4" => Ok(Gpu::T4),
            "v100" => Ok(Gpu::V100),
            "a100" => Ok(Gpu::A100),
            _ => Err(AxlError::Parse(format!("unknown gpu model: '{model}'"))),
        }
    }
}

/// TPU hardware versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tpu {
    V2,
    V3,
}

impl fmt::Display for Tpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tpu::V2 => write!(f, "v2"),
            Tpu::V3 => write!(f, "v3"),
        }
    }
}

/// A GPU kind together with a card count. Depending on context the count
/// is either requested cards or the zone maximum per instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GpuSpec {
    pub gpu: Gpu,
    pub count: u32,
}

/// A TPU version together with a core count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TpuSpec {
    pub tpu: Tpu,
    pub count: u32,
}

impl FromStr for TpuSpec {
    type Err = AxlError;

    /// Parses a provider TPU accelerator string of form `v{2,3}-<count>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (version, count) = s
            .split_once('-')
            .ok_or_else(|| AxlError::Parse(format!("malformed tpu accelerator string: '{s}'")))?;

        let tpu = match version {
            "v2" => Tpu::V2,
            "v3" => Tpu::V3,
            _ => return Err(AxlError::Parse(format!("unknown tpu version: '{version}'"))),
        };

        if count.is_empty() || !count.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AxlError::Parse(format!("invalid tpu core count: '{count}'")));
        }
        let count = count
            .parse()
            .map_err(|e| AxlError::Parse(format!("invalid tpu core count '{count}': {e}")))?;

        Ok(TpuSpec { tpu, count })
    }
}

impl fmt::Display for TpuSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.tpu, self.count)
    }
}

/// Status of a long-running cluster operation, as reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OpStatus {
    StatusUnspecified,
    Pending,
    Running,
    Done,
    Aborting,
}

impl fmt::Display for OpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OpStatus::StatusUnspecified => "STATUS_UNSPECIFIED",
            OpStatus::Pending => "PENDING",
            OpStatus::Running => "RUNNING",
            OpStatus::Done => "DONE",
            OpStatus::Aborting => "ABORTING",
        };
        write!(f, "{s}")
    }
}

/// Base OS image of cluster nodes. Selects the matching driver
/// installer daemonset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeImage {
    Cos,
    Ubuntu,
}

/// A long-running cluster operation, as returned by the operations API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub name: String,
    pub status: OpStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_link: Option<String>,
}

/// Provider-reported quota for a region. Values arrive as JSON doubles
/// but are integral in practice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quota {
    pub metric: String,
    pub limit: f64,
    #[serde(default)]
    pub usage: f64,
}

/// A resource limit entry for cluster autoscaling, embedded verbatim
/// into cluster create request payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceLimit {
    pub resource_type: String,
    pub maximum: String,
}

/// A raw accelerator type entry for a zone, prior to conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneAccelerator {
    pub name: String,
    pub max_cards_per_instance: u32,
}
