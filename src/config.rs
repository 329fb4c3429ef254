//! YAML configuration file support for cinemeta.
//!
//! Lets deployments define the pipeline configuration in a single YAML file
//! and load it at runtime. Missing sections fall back to their defaults, so
//! a minimal file stays valid.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! # cinemeta pipeline configuration
//! version: "1.0"
//! name: "production"
//!
//! ingest:
//!   version: 1
//!   strip_control_chars: true
//!   max_payload_bytes: 10485760
//! ```

use std::fs;
use std::path::Path;

use cine_ingest::IngestConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration for the extraction pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CinemetaConfig {
    /// Configuration format version.
    pub version: String,

    /// Optional configuration name/description.
    #[serde(default)]
    pub name: Option<String>,

    /// Intake stage configuration.
    #[serde(default)]
    pub ingest: IngestConfig,
}

impl CinemetaConfig {
    /// Load a YAML configuration file from the given path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: CinemetaConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => {}
            v => return Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }

        if self.ingest.version == 0 {
            return Err(ConfigLoadError::Validation(
                "ingest.version must be >= 1".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for CinemetaConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            ingest: IngestConfig::default(),
        }
    }
}
