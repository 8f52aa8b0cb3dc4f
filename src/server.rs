//! HTTP server initialization and runtime setup.
//!
//! Connects to MongoDB, wires the repository into the service and state,
//! and drives the Axum server until a shutdown signal arrives.

use crate::config::Config;
use crate::domain::repositories::BookRepository;
use crate::infrastructure::persistence::{DEFAULT_STORAGE_TIMEOUT, MongoBookRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use mongodb::Client;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - MongoDB client, verified with a `ping`
/// - Book repository, service and shared state
/// - Axum HTTP server with graceful shutdown
///
/// The client is shut down after the server stops.
///
/// # Errors
///
/// Returns an error if:
/// - The connection string cannot be parsed
/// - The database does not answer the `ping`
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let client = connect(&config).await?;
    tracing::info!("Connected to database");

    let database = client.database(&config.db_name);
    let repository: Arc<dyn BookRepository> =
        Arc::new(MongoBookRepository::new(&database, &config.db_collection));

    let state = AppState::new(
        repository,
        config.environment.clone(),
        config.version.clone(),
        config.site_url.clone(),
    );

    let app = app_router(state, &config.static_dir);

    let addr: SocketAddr = config
        .listen_addr()
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr()))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped, closing database connection");
    client.shutdown().await;

    Ok(())
}

async fn connect(config: &Config) -> Result<Client> {
    let mut options = ClientOptions::parse(&config.db_url)
        .await
        .context("Failed to parse DB_URL")?;
    options.app_name = Some(env!("CARGO_PKG_NAME").to_string());

    let client = Client::with_options(options).context("Failed to create database client")?;

    tokio::time::timeout(
        DEFAULT_STORAGE_TIMEOUT,
        client.database("admin").run_command(doc! { "ping": 1 }),
    )
    .await
    .context("Database ping timed out")?
    .context("Database ping failed")?;

    Ok(client)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {e}");
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
                tracing::error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
