//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use favorites_common::{AppConfig, AppError, DatabaseBackend};
use favorites_db::{
    create_pool, run_migrations, MemoryStore, PgFavoriteRepository, PgGroupRepository,
    PgShareRepository, PgUserRepository, PoolConfig,
};
use favorites_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::{AppState, Storage};

/// Build the complete Axum application with all routes and middleware
///
/// Health routes are merged after the middleware so probes are never rate limited.
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let api = apply_middleware(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );

    api.merge(health_routes()).with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let builder = ServiceContextBuilder::new().settings(config.favorites.clone());

    let (builder, storage) = match config.database.backend {
        DatabaseBackend::Memory => {
            warn!("Using the in-memory store; data is lost on restart");
            let store = Arc::new(MemoryStore::new());
            let builder = builder
                .favorite_repo(store.clone())
                .group_repo(store.clone())
                .share_repo(store.clone())
                .user_repo(store);
            (builder, Storage::Memory)
        }
        DatabaseBackend::Postgres => {
            info!("Connecting to PostgreSQL...");
            let pool = create_pool(&PoolConfig::from(&config.database))
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            info!("PostgreSQL connection established");

            if config.database.run_migrations {
                run_migrations(&pool)
                    .await
                    .map_err(|e| AppError::Database(e.to_string()))?;
                info!("Database schema is up to date");
            }

            let builder = builder
                .favorite_repo(Arc::new(PgFavoriteRepository::new(pool.clone())))
                .group_repo(Arc::new(PgGroupRepository::new(pool.clone())))
                .share_repo(Arc::new(PgShareRepository::new(pool.clone())))
                .user_repo(Arc::new(PgUserRepository::new(pool.clone())));
            (builder, Storage::Postgres(pool))
        }
    };

    let service_context = builder
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config, storage))
}

/// Run the HTTP server on an already bound listener until shutdown
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), AppError> {
    if let Ok(addr) = listener.local_addr() {
        info!("Server listening on http://{}", addr);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    serve(listener, app).await
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let address = config.api.address();
    let addr: SocketAddr = address
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address {}: {}", address, e)))?;

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, addr).await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!(error = %e, "Failed to install terminate handler");
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
}
