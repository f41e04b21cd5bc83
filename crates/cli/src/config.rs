use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

const CONFIG_PATH: &str = "~/.axl/config.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// GCP project id.
    pub project: String,
    /// Pre-minted access token for the cloud APIs. axl performs no
    /// credential flow of its own.
    #[serde(rename = "access-token")]
    pub access_token: String,
    /// Default zone for zone-scoped commands.
    #[serde(default)]
    pub zone: Option<String>,
    /// Default region for region-scoped commands.
    #[serde(default)]
    pub region: Option<String>,
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

pub fn parse_config() -> Result<Config, Box<dyn std::error::Error>> {
    let config_path = expand_tilde(CONFIG_PATH);
    let config_content = fs::read_to_string(&config_path)
        .map_err(|e| format!("Failed to read config at {}: {}", config_path.display(), e))?;

    let config: Config = toml::from_str(&config_content)
        .map_err(|e| format!("Failed to parse config: {}", e))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_parses_kebab_case_keys() {
        let config: Config = toml::from_str(
            r#"
            project = "ml-research"
            access-token = "ya29.token"
            zone = "us-central1-a"
            "#,
        )
        .unwrap();

        assert_eq!(config.project, "ml-research");
        assert_eq!(config.access_token, "ya29.token");
        assert_eq!(config.zone.as_deref(), Some("us-central1-a"));
        assert!(config.region.is_none());
    }

    #[test]
    fn config_requires_project_and_token() {
        assert!(toml::from_str::<Config>(r#"project = "p""#).is_err());
    }
}
