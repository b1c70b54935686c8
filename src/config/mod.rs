//! Configuration management for autowall
//!
//! Settings are layered, lowest priority first:
//! 1. Default values (embedded in structs)
//! 2. TOML configuration file
//! 3. Environment variables
//!
//! Command-line flags are applied on top by the binary.
//!
//! # Environment Variables
//!
//! Any key can be overridden with `AUTOWALL__<section>__<key>`:
//! - `AUTOWALL__SOURCE__URL=http://mirror.local/download`
//! - `AUTOWALL__JOBS__IMAGES=10`
//! - `AUTOWALL__SOURCE__MAX_ATTEMPTS=500`
//!
//! # Configuration File
//!
//! Read from `autowall.toml` in the working directory unless
//! `AUTOWALL_CONFIG` points elsewhere. A missing file is not an error.

mod models;
mod sources;
mod validation;

pub use models::{Config, JobsConfig, SourceConfig, StoreConfig};
pub use validation::ValidationError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] ValidationError),
}

impl Config {
    /// Load configuration from all sources (file + environment)
    ///
    /// Values are not validated here; command-line flags may still replace
    /// them. Call [`Config::validate`] once overrides are applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file is malformed.
    pub fn load() -> Result<Self, ConfigError> {
        Ok(sources::load()?)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: std::path::PathBuf) -> Result<Self, ConfigError> {
        Ok(sources::load_from_sources(path)?)
    }

    /// Check the final values, after command-line overrides
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate(self)?;
        Ok(())
    }
}
