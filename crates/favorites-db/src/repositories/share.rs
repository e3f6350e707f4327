//! PostgreSQL implementation of ShareRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::collections::HashSet;
use tracing::instrument;
use uuid::Uuid;

use favorites_core::entities::{NewShare, Share, SharedFavorite, ShareSummary};
use favorites_core::error::DomainError;
use favorites_core::traits::{RepoResult, ShareRepository};
use favorites_core::value_objects::{AccessKey, ShareId, UserId};

use crate::models::{ShareModel, ShareWithCountModel, SharedFavoriteModel};

use super::error::map_db_error;

const SHARE_COLUMNS: &str = "id, user_id, access_key, title, description, password, is_public, \
                             expires_at, view_count, created_at, updated_at";

/// PostgreSQL implementation of ShareRepository
#[derive(Clone)]
pub struct PgShareRepository {
    pool: PgPool,
}

impl PgShareRepository {
    /// Create a new PgShareRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShareRepository for PgShareRepository {
    #[instrument(skip(self, share), fields(owner_id = %share.owner_id, items = share.favorite_ids.len()))]
    async fn create(&self, share: &NewShare) -> RepoResult<Share> {
        let ids: Vec<Uuid> = share.favorite_ids.iter().map(|id| id.into_inner()).collect();

        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Lock the referenced favorites so none disappears before the items land
        let owned: HashSet<Uuid> = sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT id FROM user_favorites
            WHERE user_id = $1 AND id = ANY($2)
            FOR SHARE
            "#,
        )
        .bind(share.owner_id.into_inner())
        .bind(&ids)
        .fetch_all(&mut *tx)
        .await
        .map_err(map_db_error)?
        .into_iter()
        .collect();

        let foreign: Vec<_> = share
            .favorite_ids
            .iter()
            .copied()
            .filter(|id| !owned.contains(&id.into_inner()))
            .collect();
        if !foreign.is_empty() {
            tx.rollback().await.map_err(map_db_error)?;
            return Err(DomainError::ForeignFavorites(foreign));
        }

        let sql = format!(
            r#"
            INSERT INTO favorite_shares (id, user_id, access_key, title, description, password,
                                         is_public, expires_at, view_count, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, TRUE, $7, 0, $8, $8)
            RETURNING {SHARE_COLUMNS}
            "#
        );
        let created = sqlx::query_as::<_, ShareModel>(&sql)
            .bind(share.id.into_inner())
            .bind(share.owner_id.into_inner())
            .bind(share.access_key.as_str())
            .bind(&share.title)
            .bind(share.description.as_deref())
            .bind(share.password.as_deref())
            .bind(share.expires_at)
            .bind(share.created_at)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let positions: Vec<i32> = (1..).take(ids.len()).collect();
        sqlx::query(
            r#"
            INSERT INTO favorite_share_items (share_id, favorite_id, position)
            SELECT $1, item.favorite_id, item.position
            FROM UNNEST($2::uuid[], $3::int4[]) AS item(favorite_id, position)
            "#,
        )
        .bind(share.id.into_inner())
        .bind(&ids)
        .bind(&positions)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(Share::from(created))
    }

    #[instrument(skip(self))]
    async fn list_for_owner(&self, owner_id: UserId) -> RepoResult<Vec<ShareSummary>> {
        let results = sqlx::query_as::<_, ShareWithCountModel>(
            r#"
            SELECT s.id, s.user_id, s.access_key, s.title, s.description, s.password,
                   s.is_public, s.expires_at, s.view_count, s.created_at, s.updated_at,
                   COUNT(i.favorite_id) AS item_count
            FROM favorite_shares s
            LEFT JOIN favorite_share_items i ON i.share_id = s.id
            WHERE s.user_id = $1
            GROUP BY s.id
            ORDER BY s.created_at DESC
            "#,
        )
        .bind(owner_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ShareSummary::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, owner_id: UserId, id: ShareId) -> RepoResult<Option<Share>> {
        let sql = format!(
            r#"
            SELECT {SHARE_COLUMNS}
            FROM favorite_shares
            WHERE id = $1 AND user_id = $2
            "#
        );
        let result = sqlx::query_as::<_, ShareModel>(&sql)
            .bind(id.into_inner())
            .bind(owner_id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Share::from))
    }

    #[instrument(skip(self, access_key))]
    async fn find_public(&self, access_key: &AccessKey) -> RepoResult<Option<Share>> {
        let sql = format!(
            r#"
            SELECT {SHARE_COLUMNS}
            FROM favorite_shares
            WHERE access_key = $1 AND is_public = TRUE
            "#
        );
        let result = sqlx::query_as::<_, ShareModel>(&sql)
            .bind(access_key.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Share::from))
    }

    #[instrument(skip(self))]
    async fn items(&self, share_id: ShareId) -> RepoResult<Vec<SharedFavorite>> {
        let results = sqlx::query_as::<_, SharedFavoriteModel>(
            r#"
            SELECT i.favorite_id, i.position, f.title, f.url, f.icon, f.description, f.category
            FROM favorite_share_items i
            JOIN user_favorites f ON f.id = i.favorite_id
            WHERE i.share_id = $1
            ORDER BY i.position ASC
            "#,
        )
        .bind(share_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(SharedFavorite::from).collect())
    }

    #[instrument(skip(self))]
    async fn record_view(&self, share_id: ShareId) -> RepoResult<Option<i64>> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            UPDATE favorite_shares
            SET view_count = view_count + 1
            WHERE id = $1
            RETURNING view_count
            "#,
        )
        .bind(share_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn set_visibility(
        &self,
        owner_id: UserId,
        id: ShareId,
        is_public: bool,
        updated_at: DateTime<Utc>,
    ) -> RepoResult<Option<Share>> {
        let sql = format!(
            r#"
            UPDATE favorite_shares
            SET is_public = $3, updated_at = $4
            WHERE id = $1 AND user_id = $2
            RETURNING {SHARE_COLUMNS}
            "#
        );
        let result = sqlx::query_as::<_, ShareModel>(&sql)
            .bind(id.into_inner())
            .bind(owner_id.into_inner())
            .bind(is_public)
            .bind(updated_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Share::from))
    }

    #[instrument(skip(self))]
    async fn delete(&self, owner_id: UserId, id: ShareId) -> RepoResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let found = sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT id FROM favorite_shares
            WHERE id = $1 AND user_id = $2
            FOR UPDATE
            "#,
        )
        .bind(id.into_inner())
        .bind(owner_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if found.is_none() {
            tx.rollback().await.map_err(map_db_error)?;
            return Ok(false);
        }

        sqlx::query("DELETE FROM favorite_share_items WHERE share_id = $1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        sqlx::query("DELETE FROM favorite_shares WHERE id = $1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(true)
    }
}
