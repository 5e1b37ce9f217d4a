use std::net::SocketAddr;

use axum::Router;
use common::utils::{db_log::DbLogLayer, logging::init_logging_with};
use configs::AppConfig;
use dotenvy::dotenv;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::{errors::StartupError, routes, state::AppState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// `config.toml` (or `CONFIG_PATH`) first, then environment variables.
pub fn load_config() -> anyhow::Result<AppConfig> {
    match AppConfig::load_and_validate() {
        Ok(cfg) => Ok(cfg),
        Err(file_err) => AppConfig::from_env()
            .map_err(|e| anyhow::Error::from(StartupError::InvalidConfig(format!("{e}; config file: {file_err}")))),
    }
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    let addr = format!("{}:{}", cfg.server.host, cfg.server.port);
    addr.parse().map_err(|source| StartupError::BindAddr { addr, source })
}

/// Public entry: wire logging, database and services, then serve until Ctrl+C.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    let cfg = load_config()?;

    let (db_layer, log_rx) = DbLogLayer::with_level_name(&cfg.logging.db_level);
    init_logging_with(&cfg.logging.format, db_layer);

    let db = models::db::connect_with_config(&cfg.database).await?;
    migration::Migrator::up(&db, None).await?;
    if cfg.seed.enabled {
        let seeded = service::seed::seed_if_empty(&db).await?;
        info!(books = seeded, "startup seeding done");
    }

    let state = AppState::new(db);
    // The writer ends once the logging layer, and with it the sender, is dropped
    let _log_writer = service::logs_service::spawn_log_writer(log_rx, state.logs.as_ref().clone());

    let app: Router = routes::build_router(state, build_cors());

    let addr = bind_addr(&cfg)?;
    info!(%addr, "starting my-books api");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c; shutting down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_rejects_garbage_host() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "not a host".into();
        assert!(matches!(bind_addr(&cfg), Err(StartupError::BindAddr { .. })));
        cfg.server.host = "127.0.0.1".into();
        assert_eq!(bind_addr(&cfg).unwrap().port(), 8080);
    }
}
