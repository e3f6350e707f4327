//! GroupRepository over the in-memory state

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tracing::instrument;

use favorites_core::entities::{
    Group, GroupChanges, GroupDeletion, GroupWithCount, MemberDisposal, NewGroup,
};
use favorites_core::error::DomainError;
use favorites_core::traits::{GroupRepository, RepoResult};
use favorites_core::value_objects::{GroupId, UserId};

use super::{MemoryState, MemoryStore};

fn name_taken(state: &MemoryState, owner_id: UserId, name: &str, except: Option<GroupId>) -> bool {
    state
        .groups
        .values()
        .any(|g| g.owner_id == owner_id && g.name == name && Some(g.id) != except)
}

#[async_trait]
impl GroupRepository for MemoryStore {
    #[instrument(skip(self))]
    async fn list_with_counts(&self, owner_id: UserId) -> RepoResult<Vec<GroupWithCount>> {
        let mut list: Vec<GroupWithCount> = self.read(|state| {
            let mut counts: HashMap<GroupId, i64> = HashMap::new();
            for group_id in state.favorites.values().filter_map(|f| f.group_id) {
                *counts.entry(group_id).or_insert(0) += 1;
            }

            state
                .groups
                .values()
                .filter(|g| g.owner_id == owner_id)
                .map(|g| GroupWithCount {
                    group: g.clone(),
                    favorite_count: counts.get(&g.id).copied().unwrap_or(0),
                })
                .collect()
        });
        list.sort_by(|a, b| {
            a.group
                .sort_order
                .cmp(&b.group.sort_order)
                .then_with(|| a.group.created_at.cmp(&b.group.created_at))
        });
        Ok(list)
    }

    async fn find_by_id(&self, owner_id: UserId, id: GroupId) -> RepoResult<Option<Group>> {
        Ok(self.read(|state| state.owned_group(owner_id, id).cloned()))
    }

    #[instrument(skip(self, group), fields(owner_id = %group.owner_id))]
    async fn create(&self, group: &NewGroup) -> RepoResult<Group> {
        self.write(|state| {
            if name_taken(state, group.owner_id, &group.name, None) {
                return Err(DomainError::DuplicateGroupName(group.name.clone()));
            }
            let created = group
                .clone()
                .into_group(state.next_group_order(group.owner_id)?);
            state.groups.insert(created.id, created.clone());
            Ok(created)
        })
    }

    async fn update(
        &self,
        owner_id: UserId,
        id: GroupId,
        changes: &GroupChanges,
        updated_at: DateTime<Utc>,
    ) -> RepoResult<Option<Group>> {
        self.write(|state| {
            if state.owned_group(owner_id, id).is_none() {
                return Ok(None);
            }
            if name_taken(state, owner_id, &changes.name, Some(id)) {
                return Err(DomainError::DuplicateGroupName(changes.name.clone()));
            }

            let Some(group) = state.groups.get_mut(&id) else {
                return Ok(None);
            };
            group.name.clone_from(&changes.name);
            group.description.clone_from(&changes.description);
            group.color.clone_from(&changes.color);
            group.updated_at = updated_at;
            Ok(Some(group.clone()))
        })
    }

    #[instrument(skip(self))]
    async fn delete(
        &self,
        owner_id: UserId,
        id: GroupId,
        disposal: &MemberDisposal,
        updated_at: DateTime<Utc>,
    ) -> RepoResult<Option<GroupDeletion>> {
        self.transaction(|state| {
            let Some(group) = state.owned_group(owner_id, id).cloned() else {
                return Ok(None);
            };

            let target = match disposal {
                MemberDisposal::MoveTo(target) => {
                    if *target == id || state.owned_group(owner_id, *target).is_none() {
                        return Err(DomainError::InvalidTargetGroup(*target));
                    }
                    Some(*target)
                }
                MemberDisposal::DefaultOrUngroup { default_name } => state
                    .groups
                    .values()
                    .find(|g| g.owner_id == owner_id && g.name == *default_name && g.id != id)
                    .map(|g| g.id),
            };

            let mut moved = 0;
            for favorite in state.favorites.values_mut() {
                if favorite.group_id == Some(id) {
                    favorite.group_id = target;
                    favorite.updated_at = updated_at;
                    moved += 1;
                }
            }

            if state.favorites.values().any(|f| f.group_id == Some(id)) {
                return Err(DomainError::InternalError(format!(
                    "favorites still reference group {id}"
                )));
            }

            state.groups.remove(&id);
            Ok(Some(GroupDeletion {
                group,
                moved_to: target,
                members_moved: moved,
            }))
        })
    }
}
