//! Web front-end configuration.

use common::{env_or, DatabaseConfig, ServiceConfig};

/// Web configuration.
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Listen address
    pub server: ServiceConfig,
    /// Backing database
    pub database: DatabaseConfig,
    /// Serve Swagger UI and the OpenAPI document
    pub swagger_enabled: bool,
}

impl WebConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            server: ServiceConfig::from_env(),
            database: DatabaseConfig::from_env(),
            swagger_enabled: env_or("SWAGGER_ENABLED", true),
        }
    }

    /// Override the listen address (CLI flags win over the environment).
    pub fn with_address(mut self, host: impl Into<String>, port: u16) -> Self {
        self.server.host = host.into();
        self.server.port = port;
        self
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            server: ServiceConfig::default(),
            database: DatabaseConfig::default(),
            swagger_enabled: true,
        }
    }
}
