//! Favorite model -> entity mapper

use favorites_core::entities::{CategoryCount, Favorite};
use favorites_core::value_objects::{FavoriteId, GroupId, UserId};

use super::non_empty;
use crate::models::{CategoryCountModel, FavoriteModel};

impl From<FavoriteModel> for Favorite {
    fn from(model: FavoriteModel) -> Self {
        Favorite {
            id: FavoriteId::from_uuid(model.id),
            owner_id: UserId::from_uuid(model.user_id),
            title: model.title,
            url: model.url,
            icon: non_empty(model.icon),
            description: non_empty(model.description),
            category: non_empty(model.category),
            group_id: model.group_id.map(GroupId::from_uuid),
            sort_order: model.sort_order,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<CategoryCountModel> for CategoryCount {
    fn from(model: CategoryCountModel) -> Self {
        CategoryCount {
            category: model.category,
            count: model.count,
        }
    }
}
