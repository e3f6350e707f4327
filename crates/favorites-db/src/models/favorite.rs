//! Favorite database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the user_favorites table
#[derive(Debug, Clone, FromRow)]
pub struct FavoriteModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub url: String,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub group_id: Option<Uuid>,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Row of the category aggregation
#[derive(Debug, Clone, FromRow)]
pub struct CategoryCountModel {
    pub category: String,
    pub count: i64,
}
