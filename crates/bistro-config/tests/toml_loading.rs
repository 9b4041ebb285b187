//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var and file manipulation.

use bistro_config::{BistroConfig, Environment};
use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};

#[test]
fn loads_database_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "prod.sqlite"
test_path = "scratch.sqlite"
environment = "test"
"#,
        )?;

        let config: BistroConfig = Figment::from(Serialized::defaults(BistroConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.database.path, "prod.sqlite");
        assert_eq!(config.database.test_path, "scratch.sqlite");
        assert_eq!(config.database.environment, Environment::Test);
        assert_eq!(config.database.resolved_path(), "scratch.sqlite");
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
pretty = false
"#,
        )?;

        let config: BistroConfig = Figment::from(Serialized::defaults(BistroConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!(!config.general.pretty);
        assert_eq!(config.database.path, "database.sqlite");
        assert_eq!(config.database.environment, Environment::Production);
        Ok(())
    });
}

#[test]
fn env_var_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "from-toml.sqlite"
"#,
        )?;
        jail.set_env("BISTRO_DATABASE__PATH", "from-env.sqlite");

        let config: BistroConfig = Figment::from(Serialized::defaults(BistroConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("BISTRO_").split("__"))
            .extract()?;

        assert_eq!(config.database.path, "from-env.sqlite");
        Ok(())
    });
}

#[test]
fn unknown_environment_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("BISTRO_DATABASE__ENVIRONMENT", "staging");

        let result: Result<BistroConfig, _> =
            Figment::from(Serialized::defaults(BistroConfig::default()))
                .merge(Env::prefixed("BISTRO_").split("__"))
                .extract();

        assert!(result.is_err());
        Ok(())
    });
}

#[test]
fn load_reads_project_config_and_env() {
    Jail::expect_with(|jail| {
        jail.create_dir(".bistro")?;
        jail.create_file(
            ".bistro/config.toml",
            r#"
[database]
test_path = "project-test.sqlite"
"#,
        )?;
        jail.set_env("BISTRO_DATABASE__ENVIRONMENT", "test");

        let config = BistroConfig::load().expect("config loads");
        assert_eq!(config.database.resolved_path(), "project-test.sqlite");
        Ok(())
    });
}

#[test]
fn load_rejects_empty_path() {
    Jail::expect_with(|jail| {
        jail.create_dir(".bistro")?;
        jail.create_file(
            ".bistro/config.toml",
            r#"
[database]
path = ""
"#,
        )?;

        assert!(BistroConfig::load().is_err());
        Ok(())
    });
}
