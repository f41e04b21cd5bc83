use axl_core::types::NodeImage;

pub const CONTAINER_API_URL: &str = "https://container.googleapis.com/v1";
pub const COMPUTE_API_URL: &str = "https://compute.googleapis.com/compute/v1";
pub const TPU_API_URL: &str = "https://tpu.googleapis.com/v1";

pub const NVIDIA_DRIVER_COS_DAEMONSET_URL: &str =
    "https://raw.githubusercontent.com/GoogleCloudPlatform/container-engine-accelerators/master/nvidia-driver-installer/cos/daemonset-preloaded.yaml";
pub const NVIDIA_DRIVER_UBUNTU_DAEMONSET_URL: &str =
    "https://raw.githubusercontent.com/GoogleCloudPlatform/container-engine-accelerators/master/nvidia-driver-installer/ubuntu/daemonset-preloaded.yaml";

pub const DASHBOARD_CLUSTER_URL: &str =
    "https://console.cloud.google.com/kubernetes/clusters/details";

/// Memory granted per core when deriving a memory limit from a cpu quota.
pub const MAX_GB_PER_CPU: u32 = 64;

/// NVIDIA driver installer daemonset for a node image.
pub fn nvidia_daemonset_url(node_image: NodeImage) -> Option<&'static str> {
    match node_image {
        NodeImage::Cos => Some(NVIDIA_DRIVER_COS_DAEMONSET_URL),
        NodeImage::Ubuntu => Some(NVIDIA_DRIVER_UBUNTU_DAEMONSET_URL),
    }
}

/// Cloud console URL for a cluster.
pub fn dashboard_cluster_url(cluster_id: &str, zone: &str, project_id: &str) -> String {
    format!(
        "{DASHBOARD_CLUSTER_URL}/{zone}/{cluster_id}?project={}",
        urlencoding::encode(project_id)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daemonset_url_per_image() {
        assert_eq!(
            nvidia_daemonset_url(NodeImage::Cos),
            Some(NVIDIA_DRIVER_COS_DAEMONSET_URL)
        );
        assert_eq!(
            nvidia_daemonset_url(NodeImage::Ubuntu),
            Some(NVIDIA_DRIVER_UBUNTU_DAEMONSET_URL)
        );
    }

    #[test]
    fn dashboard_url_encodes_project_query() {
        let url = dashboard_cluster_url("training", "us-central1-a", "my project");
        assert_eq!(
            url,
            "https://console.cloud.google.com/kubernetes/clusters/details/us-central1-a/training?project=my%20project"
        );
    }
}
