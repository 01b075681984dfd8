//! # compass-config
//!
//! Layered configuration loading for Compass using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`COMPASS_*` prefix, `__` as separator)
//! 2. Project-level `.compass/config.toml`
//! 3. User-level `~/.config/compass/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `COMPASS_DATABASE__PATH` -> `database.path`,
//! `COMPASS_CONNECTOR__SKIP_VERIFY` -> `connector.skip_verify`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use compass_config::CompassConfig;
//!
//! let config = CompassConfig::load_with_dotenv().expect("config");
//! println!("database: {}", config.database.path);
//! ```

mod connector;
mod database;
mod error;
mod general;

pub use connector::ConnectorConfig;
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CompassConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub connector: ConnectorConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl CompassConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.database.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".compass/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("COMPASS_").split("__"))
    }

    /// Tenant to use when a command does not name one explicitly.
    pub fn default_tenant(&self) -> Option<&str> {
        Some(self.general.default_tenant.as_str()).filter(|t| !t.is_empty())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("compass").join("config.toml"))
    }

    /// Load `.env` from the workspace root, falling back to the current dir.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = CompassConfig::default();
        assert_eq!(config.database.path, "compass.db");
        assert!(!config.connector.is_configured());
        assert_eq!(config.default_tenant(), None);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: CompassConfig = CompassConfig::figment().extract()?;
            assert_eq!(config.connector.tenant, "testkit-tenant");
            Ok(())
        });
    }
}
