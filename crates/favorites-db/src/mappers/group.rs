//! Group model -> entity mapper

use favorites_core::entities::{Group, GroupWithCount};
use favorites_core::value_objects::{GroupId, UserId};

use super::non_empty;
use crate::models::{GroupModel, GroupWithCountModel};

impl From<GroupModel> for Group {
    fn from(model: GroupModel) -> Self {
        Group {
            id: GroupId::from_uuid(model.id),
            owner_id: UserId::from_uuid(model.user_id),
            name: model.name,
            description: non_empty(model.description),
            color: non_empty(model.color),
            sort_order: model.sort_order,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<GroupWithCountModel> for GroupWithCount {
    fn from(model: GroupWithCountModel) -> Self {
        GroupWithCount {
            group: Group::from(model.group),
            favorite_count: model.favorite_count,
        }
    }
}
