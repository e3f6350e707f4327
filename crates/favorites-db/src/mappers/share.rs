//! Share model -> entity mapper

use favorites_core::entities::{Share, SharedFavorite, ShareSummary};
use favorites_core::value_objects::{AccessKey, FavoriteId, ShareId, UserId};

use super::non_empty;
use crate::models::{ShareModel, ShareWithCountModel, SharedFavoriteModel};

impl From<ShareModel> for Share {
    fn from(model: ShareModel) -> Self {
        Share {
            id: ShareId::from_uuid(model.id),
            owner_id: UserId::from_uuid(model.user_id),
            access_key: AccessKey::from_string(model.access_key),
            title: model.title,
            description: non_empty(model.description),
            password: non_empty(model.password),
            is_public: model.is_public,
            expires_at: model.expires_at,
            view_count: model.view_count,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<ShareWithCountModel> for ShareSummary {
    fn from(model: ShareWithCountModel) -> Self {
        ShareSummary {
            share: Share::from(model.share),
            item_count: model.item_count,
        }
    }
}

impl From<SharedFavoriteModel> for SharedFavorite {
    fn from(model: SharedFavoriteModel) -> Self {
        SharedFavorite {
            favorite_id: FavoriteId::from_uuid(model.favorite_id),
            position: model.position,
            title: model.title,
            url: model.url,
            icon: non_empty(model.icon),
            description: non_empty(model.description),
            category: non_empty(model.category),
        }
    }
}
