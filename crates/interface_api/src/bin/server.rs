//! Respondent Home - API Server Binary
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration (in-memory store, built-in catalog)
//! cargo run --bin respondent-home-api
//!
//! # Run against PostgreSQL
//! API_DATABASE_URL=postgres://... cargo run --bin respondent-home-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_LOG_LEVEL` - Log level when `RUST_LOG` is unset (default: info)
//! * `API_DATABASE_URL` - PostgreSQL connection string; in-memory store when unset
//! * `API_DATABASE_MAX_CONNECTIONS` - Pool size (default: 10)
//! * `API_DATABASE_MIN_CONNECTIONS` - Idle connections kept open (default: 1)
//! * `API_DATABASE_ACQUIRE_TIMEOUT_SECS` - Wait for a pooled connection (default: 10)
//! * `API_DATABASE_IDLE_TIMEOUT_SECS` - Idle connection lifetime (default: 600)
//! * `API_CASE_BUCKET` - Bucket holding case records (default: case_bucket)
//! * `API_UAC_BUCKET` - Bucket holding unique access codes (default: uac_bucket)
//! * `API_PRODUCT_CATALOG_PATH` - Product catalog JSON; built-in catalog when unset
//! * `API_EVENT_CHANNEL_CAPACITY` - Outbound event channel capacity (default: 1024)

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use core_kernel::HealthCheckable;
use domain_case::CaseService;
use domain_fulfilment::{spawn_logging_sink, ChannelEventPublisher, FulfilmentService};
use domain_product::ProductReference;
use infra_store::{
    create_pool, CloudDataStore, InMemoryDataStore, PgDataStore, RespondentDataRepository,
};
use interface_api::{config::ApiConfig, create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().context("Failed to load configuration")?;

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        "Starting Respondent Home API Server"
    );

    let store = create_store(&config).await?;
    let repository = Arc::new(
        RespondentDataRepository::new(store, config.case_bucket.clone())
            .with_uac_bucket(config.uac_bucket.clone()),
    );

    let catalog = match &config.product_catalog_path {
        Some(path) => ProductReference::load(path)
            .await
            .with_context(|| format!("Failed to load product catalog from {}", path.display()))?,
        None => ProductReference::embedded().context("Built-in product catalog is invalid")?,
    };
    tracing::info!(products = catalog.len(), "Product catalog loaded");
    let catalog = Arc::new(catalog);

    let (publisher, receiver) = ChannelEventPublisher::new(config.event_channel_capacity);
    let publisher = Arc::new(publisher);
    let sink = spawn_logging_sink(receiver);

    let state = AppState {
        fulfilment_service: FulfilmentService::new(
            repository.clone(),
            catalog.clone(),
            publisher.clone(),
        ),
        case_service: CaseService::new(repository.clone()),
        health_checks: vec![
            repository as Arc<dyn HealthCheckable>,
            catalog as Arc<dyn HealthCheckable>,
            publisher as Arc<dyn HealthCheckable>,
        ],
    };

    let app = create_router(state);

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("Invalid server address {}", config.server_addr()))?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // The router held the last senders; the sink ends once it has drained.
    if tokio::time::timeout(Duration::from_secs(5), sink).await.is_err() {
        tracing::warn!("Event sink did not drain before shutdown");
    }

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Picks the object store backend from configuration
async fn create_store(config: &ApiConfig) -> anyhow::Result<Arc<dyn CloudDataStore>> {
    match config.database_config() {
        Some(database) => {
            let pool = create_pool(database)
                .await
                .context("Failed to connect to database")?;
            let store = PgDataStore::new(pool);
            store.ensure_schema().await?;
            Ok(Arc::new(store))
        }
        None => {
            tracing::warn!("No database configured, case records are held in memory");
            Ok(Arc::new(InMemoryDataStore::new()))
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
