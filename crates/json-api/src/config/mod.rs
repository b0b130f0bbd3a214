//! Server configuration module

use clap::Parser;

use storefront_app::notifications::config::MailConfig;

use crate::config::{
    cors::CorsConfig,
    db::DatabaseConfig,
    logging::LoggingConfig,
    server::ServerRuntimeConfig,
    telemetry::TelemetryConfig,
};

pub(crate) mod cors;
pub(crate) mod db;
pub(crate) mod logging;
pub(crate) mod server;
pub(crate) mod telemetry;

/// Storefront JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "storefront-json", about = "Storefront JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Trace export settings.
    #[command(flatten)]
    pub telemetry: TelemetryConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Cross-origin settings.
    #[command(flatten)]
    pub cors: CorsConfig,

    /// Email provider chain and composition settings.
    #[command(flatten)]
    pub mail: MailConfig,
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
