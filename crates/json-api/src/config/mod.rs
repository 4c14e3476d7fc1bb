//! Server configuration module

use clap::Parser;

use crate::config::{
    admin::AdminConfig, db::DatabaseConfig, observability::LoggingConfig,
    server::ServerRuntimeConfig,
};

pub(crate) mod admin;
pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod server;

/// Leadgate JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "leadgate-json", about = "Leadgate JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Back-office access settings.
    #[command(flatten)]
    pub admin: AdminConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_defaults_with_database_url() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "leadgate-json",
            "--database-url",
            "postgres://localhost/leadgate",
        ])?;

        assert_eq!(config.socket_addr(), "0.0.0.0:8698");
        assert_eq!(config.database.acquire_timeout().as_secs(), 5);

        Ok(())
    }

    #[test]
    fn admin_token_is_optional() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "leadgate-json",
            "--database-url",
            "postgres://localhost/leadgate",
            "--admin-token",
            "s3cret",
        ])?;

        assert_eq!(config.admin.admin_token.as_deref(), Some("s3cret"));

        Ok(())
    }
}
