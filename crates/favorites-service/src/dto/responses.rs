//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Identifiers serialize as UUID strings.

use chrono::{DateTime, Utc};
use serde::Serialize;

use favorites_core::{FavoriteId, GroupId, ShareId, UserId};

// ============================================================================
// Favorite Responses
// ============================================================================

/// Favorite as returned to its owner
#[derive(Debug, Clone, Serialize)]
pub struct FavoriteResponse {
    pub id: FavoriteId,
    pub title: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub group_id: Option<GroupId>,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Result of a batch add
#[derive(Debug, Serialize)]
pub struct BatchAddResponse {
    pub added_count: usize,
    pub favorites: Vec<FavoriteResponse>,
}

/// Result of a URL check
#[derive(Debug, Serialize)]
pub struct CheckFavoriteResponse {
    pub is_favorited: bool,
    pub favorite_id: Option<FavoriteId>,
}

/// Result of a reorder
#[derive(Debug, Serialize)]
pub struct ReorderResponse {
    /// Favorites whose position was written
    pub updated: u64,
}

/// Confirmation of a deleted favorite
#[derive(Debug, Serialize)]
pub struct DeletedFavoriteResponse {
    pub id: FavoriteId,
    pub title: String,
}

/// One category label with its usage count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryResponse {
    pub category: String,
    pub count: i64,
}

// ============================================================================
// Group Responses
// ============================================================================

/// Group with its member count
#[derive(Debug, Clone, Serialize)]
pub struct GroupResponse {
    pub id: GroupId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub sort_order: i32,
    pub favorite_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Outcome of a group deletion
#[derive(Debug, Serialize)]
pub struct DeletedGroupResponse {
    pub id: GroupId,
    pub name: String,
    /// Group that received the members; `null` when they were ungrouped
    pub moved_to: Option<GroupId>,
    pub members_moved: u64,
}

// ============================================================================
// Share Responses
// ============================================================================

/// Share as listed to its owner
#[derive(Debug, Clone, Serialize)]
pub struct ShareResponse {
    pub id: ShareId,
    pub access_key: String,
    pub share_url: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub has_password: bool,
    pub is_public: bool,
    pub expires_at: Option<DateTime<Utc>>,
    /// Evaluated when the response was built
    pub is_expired: bool,
    pub view_count: i64,
    pub item_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Favorite snapshot inside a public share
#[derive(Debug, Clone, Serialize)]
pub struct SharedFavoriteResponse {
    pub id: FavoriteId,
    pub position: i32,
    pub title: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Public view of a share; never exposes the password or owner id
#[derive(Debug, Clone, Serialize)]
pub struct PublicShareResponse {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub owner_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub view_count: i64,
    pub items: Vec<SharedFavoriteResponse>,
}

// ============================================================================
// Profile Responses
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub id: UserId,
    pub display_name: String,
    pub updated_at: DateTime<Utc>,
}
