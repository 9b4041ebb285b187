use bistro_core::errors::ValidationError;
use bistro_db::error::DatabaseError;
use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("bistro error: {error:#}");
        std::process::exit(exit_code(&error));
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    let config = bootstrap::load_config()?;
    let ctx = context::AppContext::init(&config, &flags).await?;

    commands::dispatch::dispatch(&cli.command, &ctx).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("BISTRO_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

/// Status class of a failure: 400 for bad input or dependents, 404 for a
/// missing record, 500 otherwise.
fn status_of(error: &anyhow::Error) -> u16 {
    error
        .chain()
        .find_map(|cause| {
            if let Some(db) = cause.downcast_ref::<DatabaseError>() {
                Some(db.status_code())
            } else {
                cause.downcast_ref::<ValidationError>().map(|_| 400)
            }
        })
        .unwrap_or(500)
}

fn exit_code(error: &anyhow::Error) -> i32 {
    match status_of(error) {
        400 => 2,
        404 => 3,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use bistro_core::enums::EntityKind;
    use bistro_core::errors::{ExistenceError, ValidationError};
    use bistro_db::error::DatabaseError;

    use super::{exit_code, status_of};

    #[test]
    fn validation_failures_are_bad_requests() {
        let error = anyhow::Error::from(ValidationError::new("wage", "must be an integer"));
        assert_eq!(status_of(&error), 400);
        assert_eq!(exit_code(&error), 2);
    }

    #[test]
    fn existence_failures_follow_status_mapping() {
        let missing =
            anyhow::Error::from(DatabaseError::from(ExistenceError::not_found(EntityKind::Menu)));
        assert_eq!(status_of(&missing), 404);
        assert_eq!(exit_code(&missing), 3);

        let blocked = anyhow::Error::from(DatabaseError::from(ExistenceError::HasDependents {
            entity: EntityKind::Menu,
            dependents: EntityKind::MenuItem,
        }));
        assert_eq!(status_of(&blocked), 400);
    }

    #[test]
    fn context_wrapped_errors_keep_their_status() {
        let error = anyhow::Error::from(DatabaseError::NoResult).context("failed to open database");
        assert_eq!(status_of(&error), 500);
        assert_eq!(exit_code(&error), 1);

        let plain = anyhow::anyhow!("invalid --data JSON");
        assert_eq!(exit_code(&plain), 1);
    }
}
