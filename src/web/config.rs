use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

use crate::bramon::BramonConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub bramon: BramonConfig,
    #[serde(default)]
    pub gallery: GalleryConfig,
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub labels: Labels,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

impl Default for WebConfig {
    fn default() -> Self {
        WebConfig {
            bind: default_bind(),
            static_dir: default_static_dir(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

#[derive(Debug, Clone, Deserialize)]
pub struct GalleryConfig {
    /// Captures per page unless the request asks for `capture_limit`.
    #[serde(default = "default_page_limit")]
    pub page_limit: u32,
    #[serde(default = "default_radiants_file")]
    pub radiants_file: PathBuf,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        GalleryConfig {
            page_limit: default_page_limit(),
            radiants_file: default_radiants_file(),
        }
    }
}

fn default_page_limit() -> u32 {
    15
}

fn default_radiants_file() -> PathBuf {
    PathBuf::from("resources/radiants.txt")
}

/// User-facing strings of the rendered fragments
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub unclassified: String,
    pub capture_date: String,
    pub radiant: String,
    pub search: String,
    pub first: String,
    pub last: String,
    pub unavailable: String,
}

impl Default for Labels {
    fn default() -> Self {
        Labels {
            unclassified: "Unclassified".to_string(),
            capture_date: "Capture date:".to_string(),
            radiant: "Radiant:".to_string(),
            search: "Search".to_string(),
            first: "First".to_string(),
            last: "Last".to_string(),
            unavailable: "The BRAMON service is unavailable right now.".to_string(),
        }
    }
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    pub fn from_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.gallery.page_limit == 0 {
            return Err(ConfigError::Invalid(
                "gallery.page_limit must be at least 1".into(),
            ));
        }
        url::Url::parse(&self.bramon.base_url)
            .map_err(|e| ConfigError::Invalid(format!("bramon.base_url: {}", e)))?;
        Ok(())
    }
}
