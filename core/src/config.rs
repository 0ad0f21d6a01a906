use std::env;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::error::DomainError;

const DEFAULT_DATABASE_URL: &str = "sqlite://boxing.db?mode=rwc";
const DEFAULT_LOG_FILTER: &str = "info,boxing_core=debug";

#[derive(Debug, Clone)]
pub struct Config {
    /// SeaORM connection URL; `sqlite://` and `postgres://` are supported
    pub database_url: String,
    /// Fallback tracing filter when `RUST_LOG` is unset
    pub log_filter: String,
    /// Log every SQL statement at debug level
    pub sql_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            sql_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            log_filter: env::var("LOG_FILTER").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
            sql_logging: env::var("SQL_LOGGING")
                .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }

    /// Open a connection to the configured database
    pub async fn connect(&self) -> Result<DatabaseConnection, DomainError> {
        let mut options = ConnectOptions::new(self.database_url.clone());
        options.sqlx_logging(self.sql_logging);

        tracing::info!("Connecting to database...");
        let db = Database::connect(options)
            .await
            .map_err(DomainError::from_db)?;
        tracing::info!("Database connected");

        Ok(db)
    }
}
