use serde::Serialize;

use crate::cli::root_commands::InitArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct InitReport<'a> {
    database: &'a str,
    seeded: bool,
}

/// Handle `bistro init`. Opening the context already ran migrations.
pub async fn handle(args: &InitArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let seeded = if args.seed {
        ctx.service.seed_defaults().await?
    } else {
        false
    };
    output(
        &InitReport {
            database: &ctx.db_path,
            seeded,
        },
        ctx.format,
    )
}
