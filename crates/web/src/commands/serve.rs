//! Serve command - Starts the HTTP server.

use common::{AppError, AppResult, DatabaseConfig};
use user_service_lib::Database;

use crate::cli::args::ServeArgs;
use crate::config::WebConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: WebConfig) -> AppResult<()> {
    let config = config.with_address(args.host, args.port);
    tracing::info!("Starting server...");
    tracing::debug!("Database: {:?}", config.database);

    let db = open_database(&config.database).await?;

    let addr = config.server.bind_address();
    let app = create_router(AppState::with_store(db, config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}

/// Open the pool and bring the schema up to date.
///
/// Only a malformed URL is fatal. If the schema cannot be created the error
/// is logged and the handle is returned anyway; requests fail until the
/// database is reachable.
pub async fn open_database(config: &DatabaseConfig) -> AppResult<Database> {
    let db = Database::connect_lazy(config).await?;

    if let Err(e) = db.run_migrations().await {
        tracing::error!("An error occurred while creating the database schema: {}", e);
    } else {
        tracing::info!("Database schema is up to date");
    }

    Ok(db)
}
