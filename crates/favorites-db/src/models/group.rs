//! Group database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the favorite_groups table
#[derive(Debug, Clone, FromRow)]
pub struct GroupModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Group joined with its member count
#[derive(Debug, Clone, FromRow)]
pub struct GroupWithCountModel {
    #[sqlx(flatten)]
    pub group: GroupModel,
    pub favorite_count: i64,
}
