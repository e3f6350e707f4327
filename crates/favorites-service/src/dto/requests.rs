//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Required text fields default to empty so a missing field surfaces as the
//! same validation failure as a blank one.

use serde::{Deserialize, Serialize};
use validator::Validate;

use favorites_core::{FavoriteId, GroupId};

/// Trim an optional text field, treating blank as absent
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// ============================================================================
// Favorite Requests
// ============================================================================

/// Add favorite request; also one entry of a batch
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateFavoriteRequest {
    #[serde(default)]
    #[validate(length(max = 255, message = "Title must be at most 255 characters"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(max = 2048, message = "URL must be at most 2048 characters"))]
    pub url: String,

    #[validate(length(max = 2048, message = "Icon must be at most 2048 characters"))]
    pub icon: Option<String>,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,

    #[validate(length(max = 100, message = "Category must be at most 100 characters"))]
    pub category: Option<String>,
}

/// Update favorite request; every editable field is replaced
pub type UpdateFavoriteRequest = CreateFavoriteRequest;

/// Batch add request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BatchAddFavoritesRequest {
    #[validate(length(min = 1, max = 500, message = "Batch must contain 1-500 favorites"))]
    pub favorites: Vec<CreateFavoriteRequest>,
}

/// One `(favorite, position)` pair of a reorder request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct OrderEntry {
    pub id: FavoriteId,
    #[validate(range(min = 0, max = 1_000_000_000, message = "Order must be between 0 and 1000000000"))]
    pub order: i32,
}

/// Reorder request with explicit positions
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReorderFavoritesRequest {
    #[validate(length(min = 1, max = 5000, message = "Orders must contain 1-5000 entries"))]
    #[validate(nested)]
    pub orders: Vec<OrderEntry>,
}

/// Set the display order by listing favorites first to last
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SetFavoriteOrderRequest {
    #[validate(length(max = 5000, message = "At most 5000 favorites can be ordered at once"))]
    pub favorite_ids: Vec<FavoriteId>,
}

/// Query for checking whether a URL is already a favorite
#[derive(Debug, Clone, Deserialize)]
pub struct CheckFavoriteQuery {
    #[serde(default)]
    pub url: String,
}

/// Move a favorite into a group, or out of any with `null`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AssignGroupRequest {
    pub group_id: Option<GroupId>,
}

// ============================================================================
// Group Requests
// ============================================================================

/// Create group request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateGroupRequest {
    #[serde(default)]
    #[validate(length(max = 100, message = "Group name must be at most 100 characters"))]
    pub name: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    /// Display color, e.g. `#3498db`
    #[validate(length(max = 32, message = "Color must be at most 32 characters"))]
    pub color: Option<String>,
}

/// Update group request; every editable field is replaced
pub type UpdateGroupRequest = CreateGroupRequest;

/// Query for group deletion
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteGroupQuery {
    /// Group receiving the members; the default group is used when absent
    pub move_to: Option<GroupId>,
}

// ============================================================================
// Share Requests
// ============================================================================

/// Create share request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateShareRequest {
    #[serde(default)]
    #[validate(length(max = 255, message = "Share title must be at most 255 characters"))]
    pub title: String,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,

    #[serde(default)]
    #[validate(length(max = 1000, message = "A share holds at most 1000 favorites"))]
    pub favorite_ids: Vec<FavoriteId>,

    /// Compared verbatim on access; empty means unprotected
    #[validate(length(max = 128, message = "Password must be at most 128 characters"))]
    pub password: Option<String>,

    /// Days until expiry; absent or not positive means never
    #[validate(range(max = 3650, message = "Expiry must be at most 3650 days"))]
    pub expires_in_days: Option<i64>,
}

/// Toggle whether a share can be fetched publicly
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SetShareVisibilityRequest {
    pub is_public: bool,
}

/// Query for the public share endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PublicShareQuery {
    pub password: Option<String>,
}

// ============================================================================
// Profile Requests
// ============================================================================

/// Refresh the caller's display name
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 100, message = "Display name must be 1-100 characters"))]
    pub display_name: String,
}
