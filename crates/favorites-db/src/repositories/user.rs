//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use favorites_core::entities::UserProfile;
use favorites_core::traits::{RepoResult, UserRepository};
use favorites_core::value_objects::UserId;

use super::error::map_db_error;

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self, profile), fields(user_id = %profile.id))]
    async fn upsert(&self, profile: &UserProfile) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (id, display_name, created_at, updated_at)
            VALUES ($1, $2, $3, $3)
            ON CONFLICT (id) DO UPDATE
            SET display_name = EXCLUDED.display_name, updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(profile.id.into_inner())
        .bind(&profile.display_name)
        .bind(profile.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn display_name(&self, id: UserId) -> RepoResult<Option<String>> {
        let name = sqlx::query_scalar::<_, String>(
            r#"
            SELECT display_name FROM users WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(name.filter(|n| !n.is_empty()))
    }
}
