//! Core library for the TimberGuard lead intake API: models, record stores,
//! notifications and the axum router.

pub mod config;
pub mod database;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod notifications;
pub mod services;
pub mod store;
pub mod validation;

pub use config::AppConfig;
pub use database::{get_database_pool, run_migrations, SqliteRecordStore};
pub use error::{AppError, Result};
pub use handlers::routes::create_routes;
pub use middleware::cors::cors_layer_from_config;
pub use middleware::logging::logging_layer;
pub use notifications::{NotificationDispatcher, NotificationOutcome, ResendMailer};
pub use services::{ContentCatalog, LeadService};
pub use store::{Collection, DynRecordStore, MemoryRecordStore, RecordStore};
pub use validation::{Validatable, ValidationResult};

use axum::Router;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tower_http::timeout::TimeoutLayer;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub app_name: String,
    pub version: String,
    pub store: DynRecordStore,
    pub leads: LeadService,
    pub content: ContentCatalog,
}

impl Default for AppState {
    fn default() -> Self {
        Self::in_memory(NotificationDispatcher::disabled())
    }
}

impl AppState {
    pub fn new(store: DynRecordStore, notifier: NotificationDispatcher, config: &AppConfig) -> Self {
        let leads = LeadService::new(store.clone(), notifier, config.intake.list_limit);

        Self {
            app_name: "TimberGuard Tree Services API".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            store,
            leads,
            content: ContentCatalog,
        }
    }

    pub fn in_memory(notifier: NotificationDispatcher) -> Self {
        Self::new(Arc::new(MemoryRecordStore::new()), notifier, &AppConfig::default())
    }
}

pub fn create_app(state: AppState, config: &AppConfig) -> Router {
    create_routes()
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors_layer_from_config(&config.cors))
        .layer(logging_layer())
        .with_state(state)
}

pub async fn run_server(app: Router, addr: SocketAddr) -> anyhow::Result<()> {
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
