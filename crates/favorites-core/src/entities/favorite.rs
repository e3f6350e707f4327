//! Favorite entity - one bookmark-like entry in an owner's ordered collection

use chrono::{DateTime, Utc};
use std::cmp::Ordering;

use crate::error::DomainError;
use crate::value_objects::{FavoriteId, GroupId, UserId};

/// Largest position a client may assign explicitly
///
/// Appending continues above it, so `i32` leaves ample room for new entries.
pub const MAX_SORT_ORDER: i32 = 1_000_000_000;

/// Position after `current_max`, or 1 for an empty list
pub fn next_sort_order(current_max: Option<i32>) -> Result<i32, DomainError> {
    current_max
        .unwrap_or(0)
        .checked_add(1)
        .ok_or_else(|| DomainError::validation("sort order is exhausted; reorder the list first"))
}

/// Favorite entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    pub id: FavoriteId,
    pub owner_id: UserId,
    pub title: String,
    pub url: String,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub group_id: Option<GroupId>,
    /// Position in the owner's list; unique per owner, gaps allowed
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Favorite {
    /// Listing order: `sort_order` ascending, newest first on ties
    pub fn display_order(&self, other: &Self) -> Ordering {
        self.sort_order
            .cmp(&other.sort_order)
            .then_with(|| other.created_at.cmp(&self.created_at))
    }
}

/// Input for inserting a favorite; the store assigns `sort_order`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFavorite {
    pub id: FavoriteId,
    pub owner_id: UserId,
    pub title: String,
    pub url: String,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl NewFavorite {
    /// Create a new favorite draft with a fresh id
    pub fn new(
        owner_id: UserId,
        title: impl Into<String>,
        url: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: FavoriteId::new(),
            owner_id,
            title: title.into(),
            url: url.into(),
            icon: None,
            description: None,
            category: None,
            created_at,
        }
    }

    pub fn with_icon(mut self, icon: Option<String>) -> Self {
        self.icon = icon;
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    /// Materialize the stored entity once a position is known
    pub fn into_favorite(self, sort_order: i32) -> Favorite {
        Favorite {
            id: self.id,
            owner_id: self.owner_id,
            title: self.title,
            url: self.url,
            icon: self.icon,
            description: self.description,
            category: self.category,
            group_id: None,
            sort_order,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

/// Replacement values for the editable fields of a favorite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteChanges {
    pub title: String,
    pub url: String,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}

/// One `(favorite, position)` pair of a reorder batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderAssignment {
    pub favorite_id: FavoriteId,
    pub sort_order: i32,
}

impl OrderAssignment {
    pub fn new(favorite_id: FavoriteId, sort_order: i32) -> Self {
        Self {
            favorite_id,
            sort_order,
        }
    }
}

/// Number of favorites carrying a category label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: String,
    pub count: i64,
}
