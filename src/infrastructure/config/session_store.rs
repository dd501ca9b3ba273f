//! Session-scoped TOML configuration store
//!
//! Settings live under the user's runtime directory, so they survive
//! between invocations of the tool but not (on most systems) across
//! reboots or logins. The `clear` operation removes the file outright.

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

const APP_DIR: &str = "soap-scribe";
const CONFIG_FILE: &str = "session.toml";

/// TOML-backed session configuration store
pub struct SessionConfigStore {
    config_path: PathBuf,
}

impl SessionConfigStore {
    /// Create a store rooted at the runtime directory
    /// (`$XDG_RUNTIME_DIR/soap-scribe/session.toml`, falling back to the
    /// system temp directory when no runtime dir is available)
    pub fn new() -> Self {
        let base = dirs::runtime_dir().unwrap_or_else(std::env::temp_dir);
        Self {
            config_path: base.join(APP_DIR).join(CONFIG_FILE),
        }
    }

    /// Create a store with a custom file path (tests)
    pub fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    async fn ensure_parent_dir(&self) -> Result<(), ConfigError> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ConfigError::WriteError(e.to_string()))?;
        }
        Ok(())
    }
}

impl Default for SessionConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigStore for SessionConfigStore {
    async fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.config_path.exists() {
            return Ok(AppConfig::empty());
        }

        let contents = fs::read_to_string(&self.config_path)
            .await
            .map_err(|e| ConfigError::ReadError(e.to_string()))?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        self.ensure_parent_dir().await?;

        let contents =
            toml::to_string_pretty(config).map_err(|e| ConfigError::WriteError(e.to_string()))?;

        fs::write(&self.config_path, contents)
            .await
            .map_err(|e| ConfigError::WriteError(e.to_string()))
    }

    async fn clear(&self) -> Result<(), ConfigError> {
        if !self.config_path.exists() {
            return Ok(());
        }

        fs::remove_file(&self.config_path)
            .await
            .map_err(|e| ConfigError::WriteError(e.to_string()))
    }

    fn path(&self) -> PathBuf {
        self.config_path.clone()
    }

    fn exists(&self) -> bool {
        self.config_path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(dir: &tempfile::TempDir) -> SessionConfigStore {
        SessionConfigStore::with_path(dir.path().join("nested").join("session.toml"))
    }

    #[tokio::test]
    async fn load_missing_file_returns_empty_config() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);

        assert!(!store.exists());
        let config = store.load().await.unwrap();
        assert_eq!(config, AppConfig::empty());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);

        let config = AppConfig {
            api_key: Some("key-123".to_string()),
            model: Some("gemini-test".to_string()),
        };
        store.save(&config).await.unwrap();

        assert!(store.exists());
        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, config);
    }

    #[tokio::test]
    async fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);

        store.save(&AppConfig::empty()).await.unwrap();
        assert!(store.path().parent().unwrap().is_dir());
    }

    #[tokio::test]
    async fn clear_removes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);

        store.save(&AppConfig::defaults()).await.unwrap();
        assert!(store.exists());

        store.clear().await.unwrap();
        assert!(!store.exists());

        // Clearing an absent file is not an error
        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn malformed_toml_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.toml");
        std::fs::write(&path, "api_key = [not toml").unwrap();

        let store = SessionConfigStore::with_path(path);
        let err = store.load().await.unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[tokio::test]
    async fn partial_config_loads_with_none_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.toml");
        std::fs::write(&path, "model = \"gemini-test\"\n").unwrap();

        let store = SessionConfigStore::with_path(path);
        let config = store.load().await.unwrap();
        assert!(config.api_key.is_none());
        assert_eq!(config.model, Some("gemini-test".to_string()));
    }
}
