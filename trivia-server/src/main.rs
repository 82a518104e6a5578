use anyhow::Result;
use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use trivia_core::TriviaStore;
use trivia_storage::{postgres, MemoryTriviaStore, PgTriviaStore};

mod config;
mod telemetry;

use config::{Config, StorageBackend};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::load()?;

    // Initialize tracing
    telemetry::init_tracing(&config.log_level, config.log_format)?;
    tracing::info!("Starting trivia server");

    let store = build_store(&config).await?;

    let api_state = trivia_api::AppState::new(store, config.api_settings());

    let app = Router::new()
        .route("/health", get(health_check))
        .merge(trivia_api::routes(api_state))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn build_store(config: &Config) -> Result<Arc<dyn TriviaStore>> {
    match config.storage.backend {
        StorageBackend::Postgres => {
            let pool = postgres::create_pool_with_config(&config.postgres()).await?;
            postgres::health_check(&pool).await?;
            tracing::info!("Database pool initialized");

            if config.database.run_migrations {
                postgres::migrate(&pool).await?;
            }

            Ok(Arc::new(PgTriviaStore::new(pool)))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory store; data is lost on shutdown");
            Ok(Arc::new(MemoryTriviaStore::with_standard_categories()))
        }
    }
}

fn cors_layer() -> CorsLayer {
    CorsLayer::permissive()
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
}

/// Resolves on SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received SIGINT (Ctrl+C)"),
        _ = terminate => tracing::info!("Received SIGTERM"),
    }
}

async fn health_check() -> &'static str {
    "OK"
}
