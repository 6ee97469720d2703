//! Database module providing connection management for the runner.

use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::config::Config;
use crate::error::{AppError, AppResult};

/// Open a SeaORM connection to the configured PostgreSQL database.
///
/// The connection is pinged before being handed back so configuration
/// mistakes surface before any migration runs.
pub async fn connect(config: &Config) -> AppResult<DatabaseConnection> {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.max_connections)
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .sqlx_logging(config.sqlx_logging);

    let conn = Database::connect(options)
        .await
        .map_err(|e| AppError::Database(format!("Failed to connect to database: {}", e)))?;

    conn.ping()
        .await
        .map_err(|e| AppError::Database(format!("Database ping failed: {}", e)))?;

    Ok(conn)
}
