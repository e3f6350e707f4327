//! Application state
//!
//! Holds the shared state for the Axum application including
//! the service context, token verifier and configuration.

use std::sync::Arc;

use favorites_common::{AppConfig, JwtService};
use favorites_db::PgPool;
use favorites_service::ServiceContext;

/// Storage engine the repositories run on, kept for readiness probes
#[derive(Clone)]
pub enum Storage {
    Memory,
    Postgres(PgPool),
}

impl Storage {
    /// Whether the storage engine can serve queries right now
    pub async fn is_reachable(&self) -> bool {
        match self {
            Self::Memory => true,
            Self::Postgres(pool) => pool.acquire().await.is_ok(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::Postgres(_) => "postgres",
        }
    }
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all dependencies
    service_context: Arc<ServiceContext>,
    /// Application configuration
    config: Arc<AppConfig>,
    jwt_service: Arc<JwtService>,
    storage: Storage,
}

impl AppState {
    /// Create a new AppState
    pub fn new(service_context: ServiceContext, config: AppConfig, storage: Storage) -> Self {
        let jwt_service = JwtService::new(&config.jwt.secret, config.jwt.access_token_expiry);
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
            jwt_service: Arc::new(jwt_service),
            storage,
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Verifier for bearer tokens
    pub fn jwt_service(&self) -> &JwtService {
        &self.jwt_service
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("config", &"AppConfig")
            .field("storage", &self.storage.name())
            .finish()
    }
}
