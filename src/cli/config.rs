//! Configuration file
//!
//! A JSON document; only `data_dir` is required.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::gallery::service::DEFAULT_ROOT_DOMAIN;
use crate::http_server::HttpServerConfig;
use crate::validation::policy::DEFAULT_MAX_IMAGE_BYTES;

/// Longest accepted token lifetime: one year
pub const MAX_JWT_TTL_MINUTES: i64 = 365 * 24 * 60;

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Data directory (required)
    pub data_dir: String,

    #[serde(default)]
    pub http: HttpServerConfig,

    /// Base URL clients reach the server at; defaults to `http://localhost:<port>`
    #[serde(default)]
    pub public_base_url: Option<String>,

    /// HS256 signing secret; a random one is generated per boot when unset
    #[serde(default)]
    pub jwt_secret: Option<String>,

    #[serde(default = "default_jwt_ttl_minutes")]
    pub jwt_ttl_minutes: i64,

    /// Hosts serving the main gallery
    #[serde(default = "default_main_domains")]
    pub main_domains: Vec<String>,

    /// Domain user galleries are published under
    #[serde(default = "default_root_domain")]
    pub root_domain: String,

    #[serde(default = "default_max_image_bytes")]
    pub max_image_bytes: u64,

    /// Seed demo artworks into an empty gallery at boot
    #[serde(default)]
    pub seed_sample_artworks: bool,
}

fn default_jwt_ttl_minutes() -> i64 {
    60
}

fn default_main_domains() -> Vec<String> {
    vec![DEFAULT_ROOT_DOMAIN.to_string()]
}

fn default_root_domain() -> String {
    DEFAULT_ROOT_DOMAIN.to_string()
}

fn default_max_image_bytes() -> u64 {
    DEFAULT_MAX_IMAGE_BYTES
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("Failed to read config: {}", e)))?;

        Self::from_json(&content)
    }

    /// Parse and validate configuration JSON
    pub fn from_json(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::Config(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> CliResult<()> {
        if self.data_dir.trim().is_empty() {
            return Err(CliError::Config("data_dir must not be empty".to_string()));
        }

        if self.max_image_bytes == 0 {
            return Err(CliError::Config("max_image_bytes must be > 0".to_string()));
        }

        if self.jwt_ttl_minutes <= 0 || self.jwt_ttl_minutes > MAX_JWT_TTL_MINUTES {
            return Err(CliError::Config(format!(
                "jwt_ttl_minutes must be between 1 and {}",
                MAX_JWT_TTL_MINUTES
            )));
        }

        if matches!(&self.jwt_secret, Some(secret) if secret.is_empty()) {
            return Err(CliError::Config("jwt_secret must not be empty when set".to_string()));
        }

        if let Some(url) = &self.public_base_url {
            url::Url::parse(url).map_err(|e| {
                CliError::Config(format!("Invalid public_base_url '{}': {}", url, e))
            })?;
        }

        Ok(())
    }

    /// Get data directory as Path
    pub fn data_path(&self) -> &Path {
        Path::new(&self.data_dir)
    }

    /// Directory holding the JSON documents
    pub fn store_path(&self) -> PathBuf {
        self.data_path().join("store")
    }

    /// Directory holding uploaded images
    pub fn media_path(&self) -> PathBuf {
        self.data_path().join("media")
    }

    pub fn public_base_url(&self) -> String {
        self.public_base_url
            .clone()
            .unwrap_or_else(|| format!("http://localhost:{}", self.http.port))
    }
}
