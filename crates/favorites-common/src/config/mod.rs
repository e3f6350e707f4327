//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseBackend, DatabaseConfig,
    Environment, FavoritesConfig, JwtConfig, RateLimitConfig, ServerConfig,
};
