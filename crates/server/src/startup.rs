use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging_from_env;
use configs::{AppConfig, DatabaseConfig, ServerConfig, StoreBackend};
use dotenvy::dotenv;
use migration::MigratorTrait;
use service::employee::{
    repo::seaorm::SeaOrmEmployeeStore, store::memory::MemoryEmployeeStore, EmployeeStore,
};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_from_env();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(server: &ServerConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", server.host, server.port).parse()?)
}

/// Open the document store named by `cfg`. SQL backends are migrated before use.
pub async fn open_store(cfg: &DatabaseConfig) -> Result<Arc<dyn EmployeeStore>, StartupError> {
    match cfg.backend() {
        Some(StoreBackend::Memory) => {
            warn!("memory store selected; records are lost on exit");
            Ok(Arc::new(MemoryEmployeeStore::new()))
        }
        Some(backend) => {
            let db = models::db::connect_with_config(cfg)
                .await
                .map_err(|e| StartupError::Store(e.to_string()))?;
            migration::Migrator::up(&db, None)
                .await
                .map_err(|e| StartupError::Store(format!("migration failed: {e}")))?;
            info!(?backend, "document store connected");
            Ok(Arc::new(SeaOrmEmployeeStore { db }))
        }
        None => Err(StartupError::InvalidConfig(format!("unsupported database url: {}", cfg.url))),
    }
}

/// The application router over an already opened store.
pub fn app(store: Arc<dyn EmployeeStore>) -> Router {
    routes::build_router(ServerState::new(store), build_cors())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; shutdown only by process kill");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, draining connections");
}

/// Public entry: open the store, serve until Ctrl+C, then close the store
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cfg = AppConfig::load_and_validate().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    let store = open_store(&cfg.database).await?;

    let addr = bind_addr(&cfg.server)?;
    info!(%addr, "starting employee service");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(Arc::clone(&store)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await?;
    info!("document store closed");
    Ok(())
}
