//! Main entry point for the lead intake API binary

use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use timberguard_core::{
    create_app, run_server, AppConfig, AppState, DynRecordStore, MemoryRecordStore,
    NotificationDispatcher, SqliteRecordStore,
};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Failed to read .env file: {}", e);
        }
    }

    init_tracing();

    let config = AppConfig::load()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    info!("Configuration loaded successfully");
    info!("Server will bind to: {}", config.bind_address());

    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid bind address: {}", e))?;

    let store = initialize_store(&config).await;

    let notifier = match NotificationDispatcher::from_config(&config.email) {
        Ok(notifier) => notifier,
        Err(e) => {
            warn!("Failed to initialize email client, notifications disabled: {}", e);
            NotificationDispatcher::disabled()
        }
    };

    let state = AppState::new(store, notifier, &config);

    info!("App: {} v{}", state.app_name, state.version);
    info!(
        "Record store: {}, notifications: {}",
        state.store.kind(),
        if state.leads.notifier().is_enabled() { "enabled" } else { "disabled" }
    );

    let app = create_app(state, &config);

    run_server(app, addr).await?;

    info!("Server shutdown complete");
    Ok(())
}

async fn initialize_store(config: &AppConfig) -> DynRecordStore {
    if config.database.url.trim().is_empty() {
        info!("No database configured, using in-memory record store");
        return Arc::new(MemoryRecordStore::new());
    }

    info!("Initializing database connection: {}", config.database.url);

    match SqliteRecordStore::connect(&config.database).await {
        Ok(store) => {
            info!("Database initialized successfully (name: {})", store.database_name());
            Arc::new(store)
        }
        Err(e) => {
            warn!("Failed to initialize database, falling back to in-memory store: {}", e);
            Arc::new(MemoryRecordStore::new())
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "timberguard_core=info,timberguard_server=info,tower_http=info".into()
    });

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    let is_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    if is_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer.pretty())
            .init();
    }
}
