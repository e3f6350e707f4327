//! Schema management
//!
//! The schema is plain SQL applied with `raw_sql`; every statement uses
//! `IF NOT EXISTS` so running it on startup is safe.

use sqlx::PgPool;
use tracing::{info, instrument};

/// Full schema DDL
pub const SCHEMA: &str = include_str!("../../migrations/0001_favorites.sql");

/// Apply the schema to the database
#[instrument(skip(pool))]
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    info!("Database schema is up to date");
    Ok(())
}
