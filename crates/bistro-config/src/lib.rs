//! # bistro-config
//!
//! Layered configuration loading for Bistro using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`BISTRO_*` prefix, `__` as separator)
//! 2. Project-level `.bistro/config.toml`
//! 3. User-level `~/.config/bistro/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `BISTRO_DATABASE__PATH` -> `database.path`,
//! `BISTRO_DATABASE__ENVIRONMENT` -> `database.environment`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use bistro_config::BistroConfig;
//!
//! let config = BistroConfig::load_with_dotenv().expect("config");
//! println!("database: {}", config.database.resolved_path());
//! ```

mod database;
mod error;
mod general;

pub use database::{DatabaseConfig, Environment};
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BistroConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl BistroConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`. Use [`Self::load_with_dotenv`] for `.env` support.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.database.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".bistro/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("BISTRO_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("bistro").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = BistroConfig::default();
        assert_eq!(config.database.resolved_path(), "database.sqlite");
        assert!(config.general.pretty);
    }

    #[test]
    fn figment_builds_without_files() {
        let figment = BistroConfig::figment();
        let config: BistroConfig = figment.extract().expect("should extract defaults");
        assert_eq!(config.database.test_path, "./test/test.sqlite");
    }
}
