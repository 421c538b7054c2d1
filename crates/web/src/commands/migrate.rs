//! Migrate command - Database migration management.

use common::AppResult;
use user_service_lib::{run_migrations, MigrateAction};

use crate::cli::args::{MigrateArgs, MigrateCommand};
use crate::config::WebConfig;

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: WebConfig) -> AppResult<()> {
    tracing::info!("Running migration command...");

    let action = match args.action {
        MigrateCommand::Up => MigrateAction::Up,
        MigrateCommand::Down => MigrateAction::Down,
        MigrateCommand::Status => MigrateAction::Status,
        MigrateCommand::Fresh => {
            tracing::warn!("Resetting database and running all migrations...");
            MigrateAction::Fresh
        }
    };

    run_migrations(&config.database, action).await?;
    Ok(())
}
