//! Group entity - a named collection of favorites within one owner's space

use chrono::{DateTime, Utc};

use crate::value_objects::{GroupId, UserId};

/// Group entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub id: GroupId,
    pub owner_id: UserId,
    /// Trimmed, non-empty, unique per owner
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for inserting a group; the store assigns `sort_order`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGroup {
    pub id: GroupId,
    pub owner_id: UserId,
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl NewGroup {
    pub fn new(owner_id: UserId, name: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: GroupId::new(),
            owner_id,
            name: name.into(),
            description: None,
            color: None,
            created_at,
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn with_color(mut self, color: Option<String>) -> Self {
        self.color = color;
        self
    }

    pub fn into_group(self, sort_order: i32) -> Group {
        Group {
            id: self.id,
            owner_id: self.owner_id,
            name: self.name,
            description: self.description,
            color: self.color,
            sort_order,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

/// Replacement values for the editable fields of a group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupChanges {
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
}

/// Group together with the number of favorites assigned to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupWithCount {
    pub group: Group,
    pub favorite_count: i64,
}

/// What happens to the members of a group that is being deleted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberDisposal {
    /// Move every member to this group of the same owner
    MoveTo(GroupId),
    /// Move members to the owner's group with this name if one exists,
    /// otherwise leave them ungrouped
    DefaultOrUngroup { default_name: String },
}

/// Outcome of a group deletion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupDeletion {
    pub group: Group,
    /// Group the members ended up in (`None` when they were ungrouped)
    pub moved_to: Option<GroupId>,
    pub members_moved: u64,
}
