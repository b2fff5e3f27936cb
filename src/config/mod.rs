//! Configuration loading and management

use crate::core::error::ConfigError;
use crate::entities::ResourceKind;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable naming the YAML config file
pub const CONFIG_ENV_VAR: &str = "CROCHET_CONFIG";

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Per-resource overrides for the admin list views
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceConfig {
    pub resource: ResourceKind,

    /// Dot-paths searched by the `q` parameter
    #[serde(default)]
    pub search_fields: Vec<String>,

    /// Page size for this resource only
    #[serde(default)]
    pub items_per_page: Option<usize>,
}

/// Complete configuration for the shop service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopConfig {
    #[serde(default)]
    pub server: ServerConfig,

    /// Location of the JSON data file
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Default page size for list views
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,

    /// Upper bound for the `limit` query parameter
    #[serde(default = "default_max_items_per_page")]
    pub max_items_per_page: usize,

    #[serde(default)]
    pub resources: Vec<ResourceConfig>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_data_file() -> PathBuf {
    PathBuf::from("data/db.json")
}

fn default_items_per_page() -> usize {
    10
}

fn default_max_items_per_page() -> usize {
    100
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            data_file: default_data_file(),
            items_per_page: default_items_per_page(),
            max_items_per_page: default_max_items_per_page(),
            resources: Vec::new(),
        }
    }
}

impl ShopConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the file named by `CROCHET_CONFIG`, or use the defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) if !path.is_empty() => Self::from_yaml_file(&path),
            _ => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.items_per_page == 0 {
            return Err(ConfigError::Invalid("items_per_page must be at least 1".into()));
        }
        if self.max_items_per_page < self.items_per_page {
            return Err(ConfigError::Invalid(
                "max_items_per_page must not be below items_per_page".into(),
            ));
        }
        Ok(())
    }

    fn resource(&self, kind: ResourceKind) -> Option<&ResourceConfig> {
        self.resources.iter().find(|r| r.resource == kind)
    }

    /// Search fields for `kind`, falling back to the resource defaults
    pub fn search_fields(&self, kind: ResourceKind) -> Vec<String> {
        match self.resource(kind) {
            Some(r) if !r.search_fields.is_empty() => r.search_fields.clone(),
            _ => kind
                .default_search_fields()
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Default page size for `kind`
    pub fn items_per_page(&self, kind: ResourceKind) -> usize {
        self.resource(kind)
            .and_then(|r| r.items_per_page)
            .unwrap_or(self.items_per_page)
            .max(1)
    }
}
