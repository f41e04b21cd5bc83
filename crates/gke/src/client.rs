use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use axl_core::types::{Operation, Quota, ZoneAccelerator};
use axl_core::{AxlError, ClusterApi, ComputeApi, TpuApi};

use crate::constants::{COMPUTE_API_URL, CONTAINER_API_URL, TPU_API_URL};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Blocking REST client over the container, compute, and TPU v1 APIs.
///
/// The caller supplies an already-minted access token; no credential
/// handling happens here.
pub struct GkeClient {
    client: reqwest::blocking::Client,
    project_id: String,
    access_token: String,
}

impl GkeClient {
    pub fn new(
        project_id: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Result<Self, AxlError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| AxlError::Transport(e.to_string()))?;

        Ok(GkeClient {
            client,
            project_id: project_id.into(),
            access_token: access_token.into(),
        })
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    fn get<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, AxlError> {
        debug!(url, "GET");

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.access_token)
            .header("accept", "application/json")
            .send()
            .map_err(|e| AxlError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .map_err(|e| AxlError::Transport(e.to_string()))?;

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(AxlError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            return Err(AxlError::Api {
                status: status.as_u16(),
                message: text,
            });
        }

        serde_json::from_str(&text)
            .map_err(|e| AxlError::Parse(format!("{e} - response body: {text}")))
    }
}

#[derive(Deserialize)]
struct AcceleratorTypeList {
    #[serde(default)]
    items: Vec<AcceleratorTypeItem>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AcceleratorTypeItem {
    name: String,
    #[serde(default)]
    maximum_cards_per_instance: u32,
}

#[derive(Deserialize)]
struct RegionInfo {
    #[serde(default)]
    quotas: Vec<Quota>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TpuAcceleratorTypeList {
    #[serde(default)]
    accelerator_types: Vec<TpuAcceleratorType>,
}

#[derive(Deserialize)]
struct TpuAcceleratorType {
    #[serde(rename = "type")]
    accelerator_type: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TensorFlowVersionList {
    #[serde(default)]
    tensorflow_versions: Vec<TensorFlowVersion>,
}

#[derive(Deserialize)]
struct TensorFlowVersion {
    version: String,
}

impl ClusterApi for GkeClient {
    fn get_operation(&self, name: &str) -> Result<Operation, AxlError> {
        self.get(&format!("{CONTAINER_API_URL}/{name}"))
    }
}

impl ComputeApi for GkeClient {
    fn accelerator_types(&self, zone: &str) -> Result<Vec<ZoneAccelerator>, AxlError> {
        let url = format!(
            "{COMPUTE_API_URL}/projects/{}/zones/{zone}/acceleratorTypes",
            self.project_id
        );
        let rsp: AcceleratorTypeList = self.get(&url)?;

        Ok(rsp
            .items
            .into_iter()
            .map(|item| ZoneAccelerator {
                name: item.name,
                max_cards_per_instance: item.maximum_cards_per_instance,
            })
            .collect())
    }

    fn region_quotas(&self, region: &str) -> Result<Vec<Quota>, AxlError> {
        let url = format!(
            "{COMPUTE_API_URL}/projects/{}/regions/{region}",
            self.project_id
        );
        let rsp: RegionInfo = self.get(&url)?;
        Ok(rsp.quotas)
    }
}

impl TpuApi for GkeClient {
    fn tpu_types(&self, zone: &str) -> Result<Vec<String>, AxlError> {
        let url = format!(
            "{TPU_API_URL}/projects/{}/locations/{zone}/acceleratorTypes",
            self.project_id
        );
        let rsp: TpuAcceleratorTypeList = self.get(&url)?;
        Ok(rsp
            .accelerator_types
            .into_iter()
            .map(|t| t.accelerator_type)
            .collect())
    }

    fn runtime_versions(&self, zone: &str) -> Result<Vec<String>, AxlError> {
        let url = format!(
            "{TPU_API_URL}/projects/{}/locations/{zone}/tensorflowVersions",
            self.project_id
        );
        let rsp: TensorFlowVersionList = self.get(&url)?;
        Ok(rsp.tensorflow_versions.into_iter().map(|v| v.version).collect())
    }
}
