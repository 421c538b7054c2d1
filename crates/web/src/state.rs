//! Application state for dependency injection.

use std::sync::Arc;

use user_service_lib::{Database, UserRepository, UserStore};

use crate::config::WebConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub database: Database,
    pub config: WebConfig,
}

impl AppState {
    /// Create new app state.
    pub fn new(users: Arc<dyn UserRepository>, database: Database, config: WebConfig) -> Self {
        Self {
            users,
            database,
            config,
        }
    }

    /// State backed by the SeaORM user store on `database`.
    pub fn with_store(database: Database, config: WebConfig) -> Self {
        let users = Arc::new(UserStore::new(database.get_connection()));
        Self::new(users, database, config)
    }
}
