//! Configuration loader with layered sources.

use crate::{AppConfig, ConfigValidator};
use config::{Config, ConfigError, Environment, File};
use scribe_core::ScribeError;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Environment variable selecting the `{environment}.toml` overlay.
pub const ENVIRONMENT_VAR: &str = "SCRIBE_ENVIRONMENT";

/// Configuration loader with runtime refresh support.
#[derive(Clone)]
pub struct ConfigLoader {
    config: Arc<RwLock<AppConfig>>,
    config_dir: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `{config_dir}/default.toml` - Default values
    /// 2. `{config_dir}/{environment}.toml` - Environment-specific overrides
    /// 3. `{config_dir}/local.toml` - Uncommitted local overrides
    /// 4. Environment variables such as `SCRIBE__SERVER__PORT=9000`
    pub fn new(config_dir: impl Into<PathBuf>) -> Result<Self, ScribeError> {
        let config_dir = config_dir.into();
        let config = Self::load_config(&config_dir)?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_dir,
        })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, ScribeError> {
        Self::new("./config")
    }

    /// Returns the current configuration.
    pub async fn get(&self) -> AppConfig {
        self.config.read().await.clone()
    }

    /// Reloads the configuration from disk.
    ///
    /// On failure the previously loaded configuration stays in place.
    pub async fn reload(&self) -> Result<(), ScribeError> {
        let new_config = Self::load_config(&self.config_dir)?;
        *self.config.write().await = new_config;
        info!("Configuration reloaded successfully");
        Ok(())
    }

    /// Loads configuration from the specified directory.
    fn load_config(config_dir: &Path) -> Result<AppConfig, ScribeError> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var(ENVIRONMENT_VAR).unwrap_or_else(|_| "development".to_string());
        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();
        for name in ["default", environment.as_str(), "local"] {
            let path = config_dir.join(format!("{name}.toml"));
            if path.exists() {
                debug!("Loading config layer from: {}", path.display());
                builder = builder.add_source(File::from(path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("SCRIBE")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let app_config: AppConfig = builder
            .build()
            .and_then(Config::try_deserialize::<AppConfig>)
            .map_err(config_error_to_scribe_error)?;

        ConfigValidator::validate(&app_config).map_err(|errors| {
            ScribeError::Configuration(
                errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; "),
            )
        })?;

        Ok(app_config)
    }
}

fn config_error_to_scribe_error(err: ConfigError) -> ScribeError {
    ScribeError::Configuration(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CacheBackend, StoreBackend};
    use std::fs;

    #[tokio::test]
    async fn test_missing_directory_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loader = ConfigLoader::new(dir.path().join("absent")).unwrap();
        let config = loader.get().await;
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.pagination.page_size, 10);
    }

    #[tokio::test]
    async fn test_local_overrides_default() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            "[server]\nport = 8100\n[database]\nbackend = \"memory\"\n",
        )
        .unwrap();
        fs::write(dir.path().join("local.toml"), "[server]\nport = 8200\n").unwrap();

        let config = ConfigLoader::new(dir.path()).unwrap().get().await;
        assert_eq!(config.server.port, 8200);
        assert_eq!(config.database.backend, StoreBackend::Memory);
    }

    #[tokio::test]
    async fn test_invalid_config_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("default.toml"), "[pagination]\npage_size = 0\n").unwrap();

        let err = ConfigLoader::new(dir.path()).err().unwrap();
        assert!(matches!(err, ScribeError::Configuration(ref m) if m.contains("page size")));
    }

    #[tokio::test]
    async fn test_reload_picks_up_changes() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("default.toml");
        fs::write(&file, "[cache]\nbackend = \"memory\"\n").unwrap();

        let loader = ConfigLoader::new(dir.path()).unwrap();
        assert_eq!(loader.get().await.cache.backend, CacheBackend::Memory);

        fs::write(&file, "[cache]\nbackend = \"disabled\"\n").unwrap();
        loader.reload().await.unwrap();
        assert_eq!(loader.get().await.cache.backend, CacheBackend::Disabled);
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_previous_config() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("default.toml");
        fs::write(&file, "[server]\nport = 8300\n").unwrap();

        let loader = ConfigLoader::new(dir.path()).unwrap();
        fs::write(&file, "[server]\nport = 0\n").unwrap();
        assert!(loader.reload().await.is_err());
        assert_eq!(loader.get().await.server.port, 8300);
    }
}
