//! Configuration management for the file registry
//!
//! Holds the two settings the registry core consumes: the upload directory
//! and the upload size limit. Collaborators that own configuration can
//! construct values directly; standalone deployments load them from
//! config.toml with environment overrides.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Registry configuration
#[derive(Debug, Deserialize, Clone)]
pub struct RegistryConfig {
    /// Directory that receives uploaded files and the metadata snapshot
    pub upload_dir: String,

    /// Maximum upload size in MB
    /// Environment: FILES_UPLOAD_LIMIT_MB
    pub upload_limit_mb: u64,
}

impl RegistryConfig {
    /// Build a configuration from values the host service already holds
    pub fn new(upload_dir: impl Into<String>, upload_limit_mb: u64) -> Self {
        Self {
            upload_dir: upload_dir.into(),
            upload_limit_mb,
        }
    }

    /// Load configuration from config.toml with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("FILES"))
            .build()?;

        let config: RegistryConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.upload_dir.is_empty() {
            return Err(config::ConfigError::Message(
                "upload_dir cannot be empty".into(),
            ));
        }

        if self.upload_limit_mb == 0 {
            return Err(config::ConfigError::Message(
                "upload_limit_mb must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Get maximum upload size in bytes
    pub fn upload_limit_bytes(&self) -> u64 {
        self.upload_limit_mb * 1024 * 1024
    }

    /// Get upload directory as PathBuf
    pub fn upload_dir_path(&self) -> PathBuf {
        PathBuf::from(&self.upload_dir)
    }
}
