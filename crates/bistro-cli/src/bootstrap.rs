use bistro_config::BistroConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration, with `.env` from the working directory.
pub fn load_config() -> anyhow::Result<BistroConfig> {
    BistroConfig::load_with_dotenv().map_err(anyhow::Error::from)
}

/// Database file to open: `--database` wins over configuration.
pub fn database_path<'a>(config: &'a BistroConfig, flags: &'a GlobalFlags) -> &'a str {
    flags
        .database
        .as_deref()
        .unwrap_or_else(|| config.database.resolved_path())
}
