//! Share database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the favorite_shares table
#[derive(Debug, Clone, FromRow)]
pub struct ShareModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub access_key: String,
    pub title: String,
    pub description: Option<String>,
    pub password: Option<String>,
    pub is_public: bool,
    pub expires_at: Option<DateTime<Utc>>,
    pub view_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Share joined with its item count
#[derive(Debug, Clone, FromRow)]
pub struct ShareWithCountModel {
    #[sqlx(flatten)]
    pub share: ShareModel,
    pub item_count: i64,
}

/// Share item joined with the favorite it points at
#[derive(Debug, Clone, FromRow)]
pub struct SharedFavoriteModel {
    pub favorite_id: Uuid,
    pub position: i32,
    pub title: String,
    pub url: String,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}
