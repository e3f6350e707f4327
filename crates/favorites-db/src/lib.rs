//! # favorites-db
//!
//! Storage layer implementing the repository traits of `favorites-core`.
//!
//! ## Overview
//!
//! - Connection pool management
//! - Schema DDL applied at startup
//! - Database models with SQLx `FromRow` derives and their entity mappers
//! - PostgreSQL repositories
//! - An in-memory store implementing the same traits, for tests and local runs
//!
//! ## Usage
//!
//! ```rust,ignore
//! use favorites_db::pool::{create_pool, PoolConfig};
//! use favorites_db::repositories::PgFavoriteRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = favorites_common::AppConfig::from_env()?;
//!     let pool = create_pool(&PoolConfig::from(&config.database)).await?;
//!     favorites_db::run_migrations(&pool).await?;
//!     let favorites = PgFavoriteRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;

// Re-export commonly used types
pub use memory::MemoryStore;
pub use pool::{create_pool, PgPool, PoolConfig};
pub use repositories::{
    PgFavoriteRepository, PgGroupRepository, PgShareRepository, PgUserRepository,
};
pub use schema::{run_migrations, SCHEMA};
