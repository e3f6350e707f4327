//! PostgreSQL implementation of GroupRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::{info, instrument};
use uuid::Uuid;

use favorites_core::entities::{
    next_sort_order, Group, GroupChanges, GroupDeletion, GroupWithCount, MemberDisposal, NewGroup,
};
use favorites_core::error::DomainError;
use favorites_core::traits::{GroupRepository, RepoResult};
use favorites_core::value_objects::{GroupId, UserId};

use crate::models::{GroupModel, GroupWithCountModel};

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of GroupRepository
#[derive(Clone)]
pub struct PgGroupRepository {
    pool: PgPool,
}

impl PgGroupRepository {
    /// Create a new PgGroupRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GroupRepository for PgGroupRepository {
    #[instrument(skip(self))]
    async fn list_with_counts(&self, owner_id: UserId) -> RepoResult<Vec<GroupWithCount>> {
        let results = sqlx::query_as::<_, GroupWithCountModel>(
            r#"
            SELECT g.id, g.user_id, g.name, g.description, g.color, g.sort_order,
                   g.created_at, g.updated_at, COUNT(f.id) AS favorite_count
            FROM favorite_groups g
            LEFT JOIN user_favorites f ON f.group_id = g.id
            WHERE g.user_id = $1
            GROUP BY g.id
            ORDER BY g.sort_order ASC, g.created_at ASC
            "#,
        )
        .bind(owner_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(GroupWithCount::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, owner_id: UserId, id: GroupId) -> RepoResult<Option<Group>> {
        let result = sqlx::query_as::<_, GroupModel>(
            r#"
            SELECT id, user_id, name, description, color, sort_order, created_at, updated_at
            FROM favorite_groups
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.into_inner())
        .bind(owner_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Group::from))
    }

    #[instrument(skip(self, group), fields(owner_id = %group.owner_id))]
    async fn create(&self, group: &NewGroup) -> RepoResult<Group> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query("SELECT pg_advisory_xact_lock(hashtext('favorite_groups:' || $1::text))")
            .bind(group.owner_id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let current_max = sqlx::query_scalar::<_, Option<i32>>(
            "SELECT MAX(sort_order) FROM favorite_groups WHERE user_id = $1",
        )
        .bind(group.owner_id.into_inner())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;
        let sort_order = next_sort_order(current_max)?;

        let created = sqlx::query_as::<_, GroupModel>(
            r#"
            INSERT INTO favorite_groups (id, user_id, name, description, color, sort_order,
                                         created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
            RETURNING id, user_id, name, description, color, sort_order, created_at, updated_at
            "#,
        )
        .bind(group.id.into_inner())
        .bind(group.owner_id.into_inner())
        .bind(&group.name)
        .bind(group.description.as_deref())
        .bind(group.color.as_deref())
        .bind(sort_order)
        .bind(group.created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::DuplicateGroupName(group.name.clone())))?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(Group::from(created))
    }

    #[instrument(skip(self, changes))]
    async fn update(
        &self,
        owner_id: UserId,
        id: GroupId,
        changes: &GroupChanges,
        updated_at: DateTime<Utc>,
    ) -> RepoResult<Option<Group>> {
        let result = sqlx::query_as::<_, GroupModel>(
            r#"
            UPDATE favorite_groups
            SET name = $3, description = $4, color = $5, updated_at = $6
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, name, description, color, sort_order, created_at, updated_at
            "#,
        )
        .bind(id.into_inner())
        .bind(owner_id.into_inner())
        .bind(&changes.name)
        .bind(changes.description.as_deref())
        .bind(changes.color.as_deref())
        .bind(updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::DuplicateGroupName(changes.name.clone())))?;

        Ok(result.map(Group::from))
    }

    #[instrument(skip(self))]
    async fn delete(
        &self,
        owner_id: UserId,
        id: GroupId,
        disposal: &MemberDisposal,
        updated_at: DateTime<Utc>,
    ) -> RepoResult<Option<GroupDeletion>> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let group = sqlx::query_as::<_, GroupModel>(
            r#"
            SELECT id, user_id, name, description, color, sort_order, created_at, updated_at
            FROM favorite_groups
            WHERE id = $1 AND user_id = $2
            FOR UPDATE
            "#,
        )
        .bind(id.into_inner())
        .bind(owner_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let Some(group) = group else {
            tx.rollback().await.map_err(map_db_error)?;
            return Ok(None);
        };

        let target = match disposal {
            MemberDisposal::MoveTo(target) => {
                let found = if *target == id {
                    None
                } else {
                    sqlx::query_scalar::<_, Uuid>(
                        r#"
                        SELECT id FROM favorite_groups
                        WHERE id = $1 AND user_id = $2
                        FOR SHARE
                        "#,
                    )
                    .bind(target.into_inner())
                    .bind(owner_id.into_inner())
                    .fetch_optional(&mut *tx)
                    .await
                    .map_err(map_db_error)?
                };

                if found.is_none() {
                    tx.rollback().await.map_err(map_db_error)?;
                    return Err(DomainError::InvalidTargetGroup(*target));
                }
                Some(*target)
            }
            MemberDisposal::DefaultOrUngroup { default_name } => sqlx::query_scalar::<_, Uuid>(
                r#"
                SELECT id FROM favorite_groups
                WHERE user_id = $1 AND name = $2 AND id <> $3
                FOR SHARE
                "#,
            )
            .bind(owner_id.into_inner())
            .bind(default_name)
            .bind(id.into_inner())
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_db_error)?
            .map(GroupId::from_uuid),
        };

        let moved = sqlx::query(
            r#"
            UPDATE user_favorites
            SET group_id = $2, updated_at = $3
            WHERE group_id = $1
            "#,
        )
        .bind(id.into_inner())
        .bind(target.map(GroupId::into_inner))
        .bind(updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?
        .rows_affected();

        let remaining = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM user_favorites WHERE group_id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if remaining != 0 {
            tx.rollback().await.map_err(map_db_error)?;
            return Err(DomainError::InternalError(format!(
                "{remaining} favorites still reference group {id}"
            )));
        }

        sqlx::query(
            r#"
            DELETE FROM favorite_groups WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.into_inner())
        .bind(owner_id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        info!(group_id = %id, moved_to = ?target, members_moved = moved, "Group removed");

        Ok(Some(GroupDeletion {
            group: Group::from(group),
            moved_to: target,
            members_moved: moved,
        }))
    }
}
