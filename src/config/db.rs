// src/config/db.rs
// DOCUMENTATION: Database connection pool initialization
// PURPOSE: Setup and manage PostgreSQL/PostGIS connection pool

use crate::config::Config;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// Connection options for every pooled session
/// DOCUMENTATION: statement_timeout makes PostgreSQL cancel a proximity query
/// server-side once QUERY_TIMEOUT_SECS elapses, instead of only abandoning the wait
pub fn connect_options(config: &Config) -> Result<PgConnectOptions, sqlx::Error> {
    let options = PgConnectOptions::from_str(&config.database_url)?.options([(
        "statement_timeout",
        format!("{}ms", config.query_timeout_secs * 1000),
    )]);
    Ok(options)
}

/// Initialize PostgreSQL connection pool
/// DOCUMENTATION: Called once during application startup in main.rs.
/// The pool is handed to the repository and closed by main after the server stops.
pub async fn init_db_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    log::info!(
        "Initializing database pool (max {} connections, statement timeout {}s)",
        config.db_max_connections,
        config.query_timeout_secs
    );

    let pool = PgPoolOptions::new()
        // Maximum concurrent connections
        .max_connections(config.db_max_connections)
        // Timeout waiting for connection from pool
        .acquire_timeout(Duration::from_secs(config.db_connection_timeout))
        // Connection idle timeout (5 minutes)
        .idle_timeout(Duration::from_secs(300))
        // Connection lifetime (30 minutes before recycle)
        .max_lifetime(Duration::from_secs(1800))
        .connect_with(connect_options(config)?)
        .await?;

    // Verify connection works and PostGIS is installed
    let (postgis_version,): (String,) = sqlx::query_as("SELECT PostGIS_Version()")
        .fetch_one(&pool)
        .await?;

    log::info!(
        "Database pool initialized successfully (PostGIS {})",
        postgis_version
    );
    Ok(pool)
}
