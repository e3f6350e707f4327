//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use chrono::{DateTime, Utc};

use favorites_core::entities::{
    CategoryCount, Favorite, GroupDeletion, GroupWithCount, PublicShare, Share, SharedFavorite,
    UserProfile,
};

use super::responses::{
    CategoryResponse, DeletedGroupResponse, FavoriteResponse, GroupResponse, ProfileResponse,
    PublicShareResponse, ShareResponse, SharedFavoriteResponse,
};

/// Public link of a share: `{base}/{access_key}`
pub fn share_url(base_url: &str, access_key: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), access_key)
}

// ============================================================================
// Favorite Mappers
// ============================================================================

impl From<&Favorite> for FavoriteResponse {
    fn from(favorite: &Favorite) -> Self {
        Self {
            id: favorite.id,
            title: favorite.title.clone(),
            url: favorite.url.clone(),
            icon: favorite.icon.clone(),
            description: favorite.description.clone(),
            category: favorite.category.clone(),
            group_id: favorite.group_id,
            sort_order: favorite.sort_order,
            created_at: favorite.created_at,
            updated_at: favorite.updated_at,
        }
    }
}

impl From<Favorite> for FavoriteResponse {
    fn from(favorite: Favorite) -> Self {
        Self::from(&favorite)
    }
}

impl From<CategoryCount> for CategoryResponse {
    fn from(count: CategoryCount) -> Self {
        Self {
            category: count.category,
            count: count.count,
        }
    }
}

// ============================================================================
// Group Mappers
// ============================================================================

impl From<GroupWithCount> for GroupResponse {
    fn from(entry: GroupWithCount) -> Self {
        let group = entry.group;
        Self {
            id: group.id,
            name: group.name,
            description: group.description,
            color: group.color,
            sort_order: group.sort_order,
            favorite_count: entry.favorite_count,
            created_at: group.created_at,
            updated_at: group.updated_at,
        }
    }
}

impl From<GroupDeletion> for DeletedGroupResponse {
    fn from(deletion: GroupDeletion) -> Self {
        Self {
            id: deletion.group.id,
            name: deletion.group.name,
            moved_to: deletion.moved_to,
            members_moved: deletion.members_moved,
        }
    }
}

// ============================================================================
// Share Mappers
// ============================================================================

impl ShareResponse {
    /// Build the owner's view of a share as of `now`
    pub fn new(share: &Share, item_count: i64, base_url: &str, now: DateTime<Utc>) -> Self {
        Self {
            id: share.id,
            access_key: share.access_key.to_string(),
            share_url: share_url(base_url, share.access_key.as_str()),
            title: share.title.clone(),
            description: share.description.clone(),
            has_password: share.has_password(),
            is_public: share.is_public,
            expires_at: share.expires_at,
            is_expired: share.is_expired_at(now),
            view_count: share.view_count,
            item_count,
            created_at: share.created_at,
            updated_at: share.updated_at,
        }
    }
}

impl From<SharedFavorite> for SharedFavoriteResponse {
    fn from(item: SharedFavorite) -> Self {
        Self {
            id: item.favorite_id,
            position: item.position,
            title: item.title,
            url: item.url,
            icon: item.icon,
            description: item.description,
            category: item.category,
        }
    }
}

impl From<PublicShare> for PublicShareResponse {
    fn from(public: PublicShare) -> Self {
        Self {
            title: public.share.title,
            description: public.share.description,
            owner_name: public.owner_name,
            created_at: public.share.created_at,
            expires_at: public.share.expires_at,
            view_count: public.share.view_count,
            items: public.items.into_iter().map(Into::into).collect(),
        }
    }
}

// ============================================================================
// Profile Mappers
// ============================================================================

impl From<UserProfile> for ProfileResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id,
            display_name: profile.display_name,
            updated_at: profile.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use favorites_core::entities::NewShare;
    use favorites_core::{AccessKey, ShareId, UserId};

    #[test]
    fn test_share_url_joins_once() {
        assert_eq!(
            share_url("https://fav.example/share/", "abc"),
            "https://fav.example/share/abc"
        );
        assert_eq!(
            share_url("https://fav.example/share", "abc"),
            "https://fav.example/share/abc"
        );
    }

    #[test]
    fn test_share_response_flags() {
        let now = Utc::now();
        let (share, _) = NewShare {
            id: ShareId::new(),
            owner_id: UserId::new(),
            access_key: AccessKey::from_string("k3yk3yk3yk3yk3yk"),
            title: "Picks".to_string(),
            description: None,
            password: Some("secret".to_string()),
            expires_at: Some(now + Duration::days(1)),
            favorite_ids: vec![],
            created_at: now,
        }
        .into_share();

        let fresh = ShareResponse::new(&share, 2, "http://localhost:3000/share", now);
        assert!(fresh.has_password);
        assert!(!fresh.is_expired);
        assert_eq!(fresh.share_url, "http://localhost:3000/share/k3yk3yk3yk3yk3yk");

        let later = ShareResponse::new(&share, 2, "http://localhost:3000/share", now + Duration::days(2));
        assert!(later.is_expired);

        let json = serde_json::to_value(&fresh).unwrap();
        assert!(json.get("password").is_none());
    }
}
