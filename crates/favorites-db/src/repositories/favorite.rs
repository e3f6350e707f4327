//! PostgreSQL implementation of FavoriteRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, Transaction};
use tracing::{debug, instrument};
use uuid::Uuid;

use favorites_core::entities::{
    next_sort_order, CategoryCount, Favorite, FavoriteChanges, NewFavorite, OrderAssignment,
};
use favorites_core::error::DomainError;
use favorites_core::traits::{FavoriteRepository, RepoResult};
use favorites_core::value_objects::{FavoriteId, GroupId, UserId};

use crate::models::{CategoryCountModel, FavoriteModel};

use super::error::map_db_error;

const FAVORITE_COLUMNS: &str = "id, user_id, title, url, icon, description, category, group_id, \
                                sort_order, created_at, updated_at";

/// PostgreSQL implementation of FavoriteRepository
#[derive(Clone)]
pub struct PgFavoriteRepository {
    pool: PgPool,
}

impl PgFavoriteRepository {
    /// Create a new PgFavoriteRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Serialize position changes of one owner so `max(sort_order) + 1` stays unique
    async fn lock_owner(tx: &mut Transaction<'_, Postgres>, owner_id: UserId) -> RepoResult<()> {
        sqlx::query("SELECT pg_advisory_xact_lock(hashtext('user_favorites:' || $1::text))")
            .bind(owner_id.into_inner())
            .execute(&mut **tx)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }

    /// Append one favorite inside an open transaction
    ///
    /// Returns `None` when `skip_existing` is set and the URL is taken.
    async fn insert_at_end(
        tx: &mut Transaction<'_, Postgres>,
        favorite: &NewFavorite,
        skip_existing: bool,
    ) -> RepoResult<Option<Favorite>> {
        let conflict = if skip_existing {
            "ON CONFLICT ON CONSTRAINT uq_user_favorites_url DO NOTHING"
        } else {
            ""
        };
        let current_max = sqlx::query_scalar::<_, Option<i32>>(
            "SELECT MAX(sort_order) FROM user_favorites WHERE user_id = $1",
        )
        .bind(favorite.owner_id.into_inner())
        .fetch_one(&mut **tx)
        .await
        .map_err(map_db_error)?;
        let sort_order = next_sort_order(current_max)?;

        let sql = format!(
            r#"
            INSERT INTO user_favorites (id, user_id, title, url, icon, description, category,
                                        sort_order, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
            {conflict}
            RETURNING {FAVORITE_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, FavoriteModel>(&sql)
            .bind(favorite.id.into_inner())
            .bind(favorite.owner_id.into_inner())
            .bind(&favorite.title)
            .bind(&favorite.url)
            .bind(favorite.icon.as_deref())
            .bind(favorite.description.as_deref())
            .bind(favorite.category.as_deref())
            .bind(sort_order)
            .bind(favorite.created_at)
            .fetch_optional(&mut **tx)
            .await
            .map_err(map_db_error)?;

        Ok(row.map(Favorite::from))
    }
}

#[async_trait]
impl FavoriteRepository for PgFavoriteRepository {
    #[instrument(skip(self))]
    async fn list_by_owner(&self, owner_id: UserId) -> RepoResult<Vec<Favorite>> {
        let sql = format!(
            r#"
            SELECT {FAVORITE_COLUMNS}
            FROM user_favorites
            WHERE user_id = $1
            ORDER BY sort_order ASC, created_at DESC
            "#
        );
        let results = sqlx::query_as::<_, FavoriteModel>(&sql)
            .bind(owner_id.into_inner())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(Favorite::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, owner_id: UserId, id: FavoriteId) -> RepoResult<Option<Favorite>> {
        let sql = format!(
            r#"
            SELECT {FAVORITE_COLUMNS}
            FROM user_favorites
            WHERE id = $1 AND user_id = $2
            "#
        );
        let result = sqlx::query_as::<_, FavoriteModel>(&sql)
            .bind(id.into_inner())
            .bind(owner_id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Favorite::from))
    }

    #[instrument(skip(self))]
    async fn find_by_url(&self, owner_id: UserId, url: &str) -> RepoResult<Option<FavoriteId>> {
        let result = sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT id FROM user_favorites WHERE user_id = $1 AND url = $2
            "#,
        )
        .bind(owner_id.into_inner())
        .bind(url)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(FavoriteId::from_uuid))
    }

    #[instrument(skip(self, favorite), fields(owner_id = %favorite.owner_id))]
    async fn create(&self, favorite: &NewFavorite) -> RepoResult<Favorite> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;
        Self::lock_owner(&mut tx, favorite.owner_id).await?;

        let created = Self::insert_at_end(&mut tx, favorite, false)
            .await?
            .ok_or_else(|| DomainError::InternalError("insert returned no row".to_string()))?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(created)
    }

    #[instrument(skip(self, favorites), fields(entries = favorites.len()))]
    async fn create_many(&self, favorites: &[NewFavorite]) -> RepoResult<Vec<Favorite>> {
        let mut created = Vec::with_capacity(favorites.len());

        for favorite in favorites {
            let mut tx = self.pool.begin().await.map_err(map_db_error)?;
            Self::lock_owner(&mut tx, favorite.owner_id).await?;

            match Self::insert_at_end(&mut tx, favorite, true).await? {
                Some(row) => {
                    tx.commit().await.map_err(map_db_error)?;
                    created.push(row);
                }
                None => {
                    tx.rollback().await.map_err(map_db_error)?;
                    debug!(url = %favorite.url, "Skipping existing URL in batch");
                }
            }
        }

        Ok(created)
    }

    #[instrument(skip(self, changes))]
    async fn update(
        &self,
        owner_id: UserId,
        id: FavoriteId,
        changes: &FavoriteChanges,
        updated_at: DateTime<Utc>,
    ) -> RepoResult<Option<Favorite>> {
        let sql = format!(
            r#"
            UPDATE user_favorites
            SET title = $3, url = $4, icon = $5, description = $6, category = $7,
                updated_at = $8
            WHERE id = $1 AND user_id = $2
            RETURNING {FAVORITE_COLUMNS}
            "#
        );
        let result = sqlx::query_as::<_, FavoriteModel>(&sql)
            .bind(id.into_inner())
            .bind(owner_id.into_inner())
            .bind(&changes.title)
            .bind(&changes.url)
            .bind(changes.icon.as_deref())
            .bind(changes.description.as_deref())
            .bind(changes.category.as_deref())
            .bind(updated_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Favorite::from))
    }

    #[instrument(skip(self))]
    async fn delete(&self, owner_id: UserId, id: FavoriteId) -> RepoResult<Option<String>> {
        let title = sqlx::query_scalar::<_, String>(
            r#"
            DELETE FROM user_favorites
            WHERE id = $1 AND user_id = $2
            RETURNING title
            "#,
        )
        .bind(id.into_inner())
        .bind(owner_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(title)
    }

    #[instrument(skip(self, assignments), fields(assignments = assignments.len()))]
    async fn reorder(
        &self,
        owner_id: UserId,
        assignments: &[OrderAssignment],
        updated_at: DateTime<Utc>,
    ) -> RepoResult<u64> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;
        Self::lock_owner(&mut tx, owner_id).await?;
        let mut moved = 0;

        for assignment in assignments {
            let result = sqlx::query(
                r#"
                UPDATE user_favorites
                SET sort_order = $3, updated_at = $4
                WHERE id = $1 AND user_id = $2
                "#,
            )
            .bind(assignment.favorite_id.into_inner())
            .bind(owner_id.into_inner())
            .bind(assignment.sort_order)
            .bind(updated_at)
            .execute(&mut *tx)
            .await;

            match result {
                Ok(done) => moved += done.rows_affected(),
                Err(e) => {
                    tx.rollback().await.map_err(map_db_error)?;
                    return Err(map_db_error(e));
                }
            }
        }

        // Surface a position clash while the transaction can still be rolled back
        if let Err(e) = sqlx::query("SET CONSTRAINTS uq_user_favorites_sort_order IMMEDIATE")
            .execute(&mut *tx)
            .await
        {
            tx.rollback().await.map_err(map_db_error)?;
            return Err(map_db_error(e));
        }

        tx.commit().await.map_err(map_db_error)?;
        Ok(moved)
    }

    #[instrument(skip(self))]
    async fn assign_group(
        &self,
        owner_id: UserId,
        id: FavoriteId,
        group_id: Option<GroupId>,
        updated_at: DateTime<Utc>,
    ) -> RepoResult<Option<Favorite>> {
        if let Some(group_id) = group_id {
            let owned = sqlx::query_scalar::<_, bool>(
                r#"
                SELECT EXISTS(SELECT 1 FROM favorite_groups WHERE id = $1 AND user_id = $2)
                "#,
            )
            .bind(group_id.into_inner())
            .bind(owner_id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

            if !owned {
                return Err(DomainError::InvalidTargetGroup(group_id));
            }
        }

        let sql = format!(
            r#"
            UPDATE user_favorites
            SET group_id = $3, updated_at = $4
            WHERE id = $1 AND user_id = $2
            RETURNING {FAVORITE_COLUMNS}
            "#
        );
        let result = sqlx::query_as::<_, FavoriteModel>(&sql)
            .bind(id.into_inner())
            .bind(owner_id.into_inner())
            .bind(group_id.map(GroupId::into_inner))
            .bind(updated_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                // The group was deleted between the check and the update
                let vanished = e.as_database_error().and_then(|d| d.constraint())
                    == Some("fk_user_favorites_group");
                match group_id {
                    Some(group_id) if vanished => DomainError::InvalidTargetGroup(group_id),
                    _ => map_db_error(e),
                }
            })?;

        Ok(result.map(Favorite::from))
    }

    #[instrument(skip(self))]
    async fn categories(&self, owner_id: UserId) -> RepoResult<Vec<CategoryCount>> {
        let results = sqlx::query_as::<_, CategoryCountModel>(
            r#"
            SELECT category, COUNT(*) AS count
            FROM user_favorites
            WHERE user_id = $1 AND category IS NOT NULL AND category <> ''
            GROUP BY category
            ORDER BY count DESC, category ASC
            "#,
        )
        .bind(owner_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(CategoryCount::from).collect())
    }
}
