//! Test fixtures and data generators
//!
//! Request bodies and the subset of response fields the tests read.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Create favorite request
#[derive(Debug, Clone, Serialize)]
pub struct CreateFavoriteRequest {
    pub title: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl CreateFavoriteRequest {
    pub fn new(title: &str, url: &str) -> Self {
        Self {
            title: title.to_string(),
            url: url.to_string(),
            category: None,
        }
    }

    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self::new(
            &format!("Site {suffix}"),
            &format!("https://site{suffix}.example"),
        )
    }

    pub fn in_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }
}

/// Favorite response
#[derive(Debug, Clone, Deserialize)]
pub struct FavoriteResponse {
    pub id: String,
    pub title: String,
    pub url: String,
    pub category: Option<String>,
    pub group_id: Option<String>,
    pub sort_order: i32,
}

/// Batch add response
#[derive(Debug, Deserialize)]
pub struct BatchAddResponse {
    pub added_count: usize,
    pub favorites: Vec<FavoriteResponse>,
}

/// Check response
#[derive(Debug, Deserialize)]
pub struct CheckFavoriteResponse {
    pub is_favorited: bool,
    pub favorite_id: Option<String>,
}

/// Category response
#[derive(Debug, Deserialize)]
pub struct CategoryResponse {
    pub category: String,
    pub count: i64,
}

/// Group response
#[derive(Debug, Clone, Deserialize)]
pub struct GroupResponse {
    pub id: String,
    pub name: String,
    pub sort_order: i32,
    pub favorite_count: i64,
}

/// Deleted group response
#[derive(Debug, Deserialize)]
pub struct DeletedGroupResponse {
    pub id: String,
    pub moved_to: Option<String>,
    pub members_moved: u64,
}

/// Share response
#[derive(Debug, Clone, Deserialize)]
pub struct ShareResponse {
    pub id: String,
    pub access_key: String,
    pub share_url: String,
    pub title: String,
    pub has_password: bool,
    pub is_public: bool,
    pub is_expired: bool,
    pub view_count: i64,
    pub item_count: i64,
}

/// Shared favorite in a public share
#[derive(Debug, Deserialize)]
pub struct SharedFavoriteResponse {
    pub position: i32,
    pub title: String,
    pub url: String,
}

/// Public share response
#[derive(Debug, Deserialize)]
pub struct PublicShareResponse {
    pub title: String,
    pub owner_name: Option<String>,
    pub view_count: i64,
    pub items: Vec<SharedFavoriteResponse>,
}
