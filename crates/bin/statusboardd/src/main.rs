//! # statusboardd: status board daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars) and refuse to start when the
//!   store location or a secret is missing
//! - Initialize the `SQLite` connection pool and run migrations
//! - Seed the fixed list of locations on first start
//! - Construct the repository, services, session keys and axum router
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod config;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use statusboard_adapter_http_axum::router;
use statusboard_adapter_http_axum::session::SessionKeys;
use statusboard_adapter_http_axum::state::AppState;
use statusboard_adapter_storage_sqlite_sqlx::{Config as StorageConfig, SqliteLocationRepository};
use statusboard_app::services::location_service::LocationService;
use statusboard_app::services::reporter_gate::ReporterGate;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    let filter = EnvFilter::try_new(&config.logging.filter)
        .context("invalid logging filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let settings = config.resolve()?;

    // Database
    let db = StorageConfig {
        database_url: settings.database_url.to_string(),
    }
    .build()
    .await
    .context("failed to open the location store")?;
    let repo = SqliteLocationRepository::new(db.pool().clone());

    // Services
    let location_service = LocationService::new(repo);
    location_service
        .seed_defaults()
        .await
        .context("failed to seed initial locations")?;
    let reporter_gate = ReporterGate::new(settings.reporter_password);
    let sessions = SessionKeys::new(
        settings.session_secret.as_bytes(),
        config.session_ttl(),
        config.reporter.secure_cookie,
    );

    // HTTP
    let state = AppState::new(location_service, reporter_gate, sessions)
        .with_poll_seconds(config.dashboard.poll_seconds);
    let app = router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(%bind_addr, "statusboardd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("statusboardd stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
