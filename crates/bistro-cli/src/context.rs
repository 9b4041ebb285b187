use anyhow::Context;
use bistro_config::BistroConfig;
use bistro_db::service::BistroService;

use crate::bootstrap::database_path;
use crate::cli::{GlobalFlags, OutputFormat};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: BistroService,
    pub db_path: String,
    pub format: OutputFormat,
}

impl AppContext {
    /// Open the configured database (running migrations) and resolve the
    /// output format.
    pub async fn init(config: &BistroConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let db_path = database_path(config, flags).to_string();
        let service = BistroService::new_local(&db_path)
            .await
            .with_context(|| format!("failed to open database at {db_path}"))?;
        Ok(Self {
            service,
            db_path,
            format: flags.output_format(config.general.pretty),
        })
    }
}
