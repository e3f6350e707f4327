//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when present).

use serde::Deserialize;
use std::env;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
    pub favorites: FavoritesConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Storage engine behind the repositories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseBackend {
    #[default]
    Postgres,
    /// In-process store; data is lost on restart
    Memory,
}

impl FromStr for DatabaseBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            other => Err(ConfigError::InvalidValue("DATABASE_BACKEND", other.to_string())),
        }
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub backend: DatabaseBackend,
    /// Required for the postgres backend
    pub url: Option<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
}

/// JWT configuration
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "default_access_token_expiry")]
    pub access_token_expiry: i64,
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Favorites, groups and shares settings
#[derive(Debug, Clone, Deserialize)]
pub struct FavoritesConfig {
    /// Name of the group that receives members of a deleted group
    #[serde(default = "default_group_name")]
    pub default_group_name: String,
    /// Public share links are `{share_base_url}/{access_key}`
    #[serde(default = "default_share_base_url")]
    pub share_base_url: String,
    #[serde(default = "default_share_key_length")]
    pub share_key_length: usize,
}

impl Default for FavoritesConfig {
    fn default() -> Self {
        Self {
            default_group_name: default_group_name(),
            share_base_url: default_share_base_url(),
            share_key_length: default_share_key_length(),
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "favorites-server".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_run_migrations() -> bool {
    true
}

fn default_access_token_expiry() -> i64 {
    900 // 15 minutes
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

fn default_group_name() -> String {
    "默认分组".to_string()
}

fn default_share_base_url() -> String {
    "http://localhost:3000/share".to_string()
}

fn default_share_key_length() -> usize {
    16
}

const MIN_SHARE_KEY_LENGTH: usize = 12;

fn parsed<T: FromStr>(key: &'static str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let backend = match env::var("DATABASE_BACKEND") {
            Ok(value) => value.parse()?,
            Err(_) => DatabaseBackend::default(),
        };
        let url = env::var("DATABASE_URL").ok();
        if backend == DatabaseBackend::Postgres && url.is_none() {
            return Err(ConfigError::MissingVar("DATABASE_URL"));
        }

        let share_key_length = parsed("SHARE_KEY_LENGTH").unwrap_or_else(default_share_key_length);
        if share_key_length < MIN_SHARE_KEY_LENGTH {
            return Err(ConfigError::InvalidValue(
                "SHARE_KEY_LENGTH",
                format!("{share_key_length} (minimum is {MIN_SHARE_KEY_LENGTH})"),
            ));
        }

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| match s.to_lowercase().as_str() {
                        "production" => Some(Environment::Production),
                        "staging" => Some(Environment::Staging),
                        "development" => Some(Environment::Development),
                        _ => None,
                    })
                    .unwrap_or_default(),
            },
            api: ServerConfig {
                host: env::var("API_HOST").unwrap_or_else(|_| default_host()),
                port: parsed("API_PORT").ok_or(ConfigError::MissingVar("API_PORT"))?,
            },
            database: DatabaseConfig {
                backend,
                url,
                max_connections: parsed("DATABASE_MAX_CONNECTIONS")
                    .unwrap_or_else(default_max_connections),
                min_connections: parsed("DATABASE_MIN_CONNECTIONS")
                    .unwrap_or_else(default_min_connections),
                run_migrations: parsed("DATABASE_RUN_MIGRATIONS")
                    .unwrap_or_else(default_run_migrations),
            },
            jwt: JwtConfig {
                secret: env::var("JWT_SECRET").map_err(|_| ConfigError::MissingVar("JWT_SECRET"))?,
                access_token_expiry: parsed("JWT_ACCESS_TOKEN_EXPIRY")
                    .unwrap_or_else(default_access_token_expiry),
            },
            rate_limit: RateLimitConfig {
                requests_per_second: parsed("RATE_LIMIT_REQUESTS_PER_SECOND")
                    .unwrap_or_else(default_requests_per_second),
                burst: parsed("RATE_LIMIT_BURST").unwrap_or_else(default_burst),
            },
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                    .ok()
                    .map(|s| s.split(',').map(str::trim).map(String::from).collect())
                    .unwrap_or_default(),
            },
            favorites: FavoritesConfig {
                default_group_name: env::var("DEFAULT_GROUP_NAME")
                    .ok()
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .unwrap_or_else(default_group_name),
                share_base_url: env::var("SHARE_BASE_URL")
                    .map(|s| s.trim_end_matches('/').to_string())
                    .unwrap_or_else(|_| default_share_base_url()),
                share_key_length,
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
