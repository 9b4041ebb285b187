//! Database location configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_path() -> String {
    "database.sqlite".into()
}

fn default_test_path() -> String {
    "./test/test.sqlite".into()
}

/// Which database file the process should open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Production,
    Test,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Database file used in production. `:memory:` is accepted.
    #[serde(default = "default_path")]
    pub path: String,

    /// Database file used when `environment = "test"`.
    #[serde(default = "default_test_path")]
    pub test_path: String,

    #[serde(default)]
    pub environment: Environment,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            test_path: default_test_path(),
            environment: Environment::default(),
        }
    }
}

impl DatabaseConfig {
    /// Path for the selected environment.
    pub fn resolved_path(&self) -> &str {
        match self.environment {
            Environment::Production => &self.path,
            Environment::Test => &self.test_path,
        }
    }

    /// Reject an empty path for the selected environment.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolved_path().trim().is_empty() {
            let field = match self.environment {
                Environment::Production => "database.path",
                Environment::Test => "database.test_path",
            };
            return Err(ConfigError::InvalidValue {
                field: field.into(),
                reason: "path must not be empty".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_production_path() {
        let config = DatabaseConfig::default();
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.resolved_path(), "database.sqlite");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_environment_switches_path() {
        let config = DatabaseConfig {
            environment: Environment::Test,
            ..Default::default()
        };
        assert_eq!(config.resolved_path(), "./test/test.sqlite");
    }

    #[test]
    fn empty_path_is_invalid() {
        let config = DatabaseConfig {
            path: "  ".into(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("database.path"));
    }
}
