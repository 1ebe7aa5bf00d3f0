// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, database, and start HTTP server

mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod services;

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use config::Config;
use db::PgLeisureRepository;
use dotenv::dotenv;
use services::{ProximityService, QueryPolicy};
use std::sync::Arc;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            &config.log_level
        } else {
            "info,actix_web=info,sqlx=warn"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    if let Err(e) = config.validate() {
        log::error!("Configuration error: {}", e);
        anyhow::bail!("invalid configuration: {}", e);
    }

    log::info!("Starting leisure-proximity service...");
    log::info!("Environment: {}", config.environment);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );

    // 4. Initialize database connection pool
    let pool = config::init_db_pool(&config)
        .await
        .context("failed to connect to database")?;

    // 5. Wire the proximity service; shared by every worker
    let policy = QueryPolicy::from(&config);
    log::info!(
        "Query policy: default limit {}, cap {}, timeout {}s",
        policy.default_limit,
        policy.max_results,
        policy.query_timeout.as_secs()
    );
    let repository = Arc::new(PgLeisureRepository::new(
        pool.clone(),
        config.query_timeout_secs,
    ));
    let service = web::Data::new(ProximityService::new(repository, policy));

    // 6. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);

    HttpServer::new(move || {
        App::new()
            // Application state
            .app_data(service.clone())
            .app_data(handlers::json_config())
            // Middleware
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            // Routes
            .configure(handlers::health_config)
            .configure(handlers::geometry_config)
    })
    .bind(&server_addr)
    .with_context(|| format!("failed to bind {}", server_addr))?
    .run()
    .await?;

    // 7. Teardown
    log::info!("Server stopped, closing database pool");
    pool.close().await;

    Ok(())
}
