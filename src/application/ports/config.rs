//! Configuration port interface

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Port for session-scoped configuration storage
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load configuration from storage.
    ///
    /// # Returns
    /// The loaded config (may have None fields if nothing was saved)
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Save configuration to storage.
    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;

    /// Remove the stored configuration.
    async fn clear(&self) -> Result<(), ConfigError>;

    /// Get the configuration file path.
    fn path(&self) -> PathBuf;

    /// Check if a configuration file exists.
    fn exists(&self) -> bool;
}
