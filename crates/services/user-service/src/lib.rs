//! User Service Library
//!
//! This crate owns the `users` table: its schema, the database handle and the
//! user store every HTTP surface goes through.

pub mod infra;
pub mod repository;

use tracing::info;

use common::DatabaseConfig;
use sea_orm::DbErr;

pub use crate::infra::Database;
pub use crate::repository::{UserRepository, UserStore};

/// Run migrations (for CLI commands).
pub async fn run_migrations(config: &DatabaseConfig, action: MigrateAction) -> Result<(), DbErr> {
    let db = Database::connect_without_migrations(config).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}
