//! Group service
//!
//! Handles favorite groups and what happens to members when a group goes away.

use tracing::{info, instrument};

use favorites_core::entities::{GroupChanges, GroupWithCount, MemberDisposal, NewGroup};
use favorites_core::{DomainError, GroupId, UserId};

use crate::dto::requests::non_blank;
use crate::dto::{CreateGroupRequest, DeletedGroupResponse, GroupResponse, UpdateGroupRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

fn group_name(raw: &str) -> Result<String, DomainError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(DomainError::validation("group name is required"));
    }
    Ok(name.to_string())
}

/// Group service
pub struct GroupService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GroupService<'a> {
    /// Create a new GroupService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List the owner's groups with member counts
    #[instrument(skip(self))]
    pub async fn list(&self, owner_id: UserId) -> ServiceResult<Vec<GroupResponse>> {
        let groups = self.ctx.group_repo().list_with_counts(owner_id).await?;
        Ok(groups.into_iter().map(Into::into).collect())
    }

    /// Create a group after the owner's existing ones
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        owner_id: UserId,
        request: CreateGroupRequest,
    ) -> ServiceResult<GroupResponse> {
        let name = group_name(&request.name)?;
        let draft = NewGroup::new(owner_id, name, self.ctx.now())
            .with_description(non_blank(request.description))
            .with_color(non_blank(request.color));

        let group = self.ctx.group_repo().create(&draft).await?;

        info!(owner_id = %owner_id, group_id = %group.id, name = %group.name, "Group created");

        Ok(GroupResponse::from(GroupWithCount {
            group,
            favorite_count: 0,
        }))
    }

    /// Rename or restyle a group
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        owner_id: UserId,
        group_id: GroupId,
        request: UpdateGroupRequest,
    ) -> ServiceResult<GroupResponse> {
        let changes = GroupChanges {
            name: group_name(&request.name)?,
            description: non_blank(request.description),
            color: non_blank(request.color),
        };

        let group = self
            .ctx
            .group_repo()
            .update(owner_id, group_id, &changes, self.ctx.now())
            .await?
            .ok_or(DomainError::GroupNotFound(group_id))?;

        // Update does not touch membership; the count comes from the listing
        let favorite_count = self
            .ctx
            .group_repo()
            .list_with_counts(owner_id)
            .await?
            .into_iter()
            .find(|entry| entry.group.id == group_id)
            .map_or(0, |entry| entry.favorite_count);

        info!(owner_id = %owner_id, group_id = %group_id, "Group updated");

        Ok(GroupResponse::from(GroupWithCount {
            group,
            favorite_count,
        }))
    }

    /// Delete a group, moving its members first
    ///
    /// Members go to `move_to` when given, else to the group named by the
    /// configured default, else they end up ungrouped.
    #[instrument(skip(self))]
    pub async fn delete(
        &self,
        owner_id: UserId,
        group_id: GroupId,
        move_to: Option<GroupId>,
    ) -> ServiceResult<DeletedGroupResponse> {
        let disposal = match move_to {
            Some(target) => MemberDisposal::MoveTo(target),
            None => MemberDisposal::DefaultOrUngroup {
                default_name: self.ctx.settings().default_group_name.clone(),
            },
        };

        let deletion = self
            .ctx
            .group_repo()
            .delete(owner_id, group_id, &disposal, self.ctx.now())
            .await?
            .ok_or(DomainError::GroupNotFound(group_id))?;

        info!(
            owner_id = %owner_id,
            group_id = %group_id,
            moved_to = ?deletion.moved_to,
            members_moved = deletion.members_moved,
            "Group deleted"
        );

        Ok(DeletedGroupResponse::from(deletion))
    }
}
