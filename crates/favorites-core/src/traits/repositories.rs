//! Repository traits (ports) - define the interface for data access
//!
//! Every lookup that takes an owner treats "absent" and "owned by someone
//! else" identically, so implementations filter by owner in the same query
//! that finds the row.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{
    CategoryCount, Favorite, FavoriteChanges, Group, GroupChanges, GroupDeletion, GroupWithCount,
    MemberDisposal, NewFavorite, NewGroup, NewShare, OrderAssignment, Share, SharedFavorite,
    ShareSummary, UserProfile,
};
use crate::error::DomainError;
use crate::value_objects::{AccessKey, FavoriteId, GroupId, ShareId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Favorite Repository
// ============================================================================

#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// List an owner's favorites by `sort_order` ASC, `created_at` DESC
    async fn list_by_owner(&self, owner_id: UserId) -> RepoResult<Vec<Favorite>>;

    /// Find a favorite of the owner
    async fn find_by_id(&self, owner_id: UserId, id: FavoriteId) -> RepoResult<Option<Favorite>>;

    /// Find the id of the owner's favorite with this exact URL
    async fn find_by_url(&self, owner_id: UserId, url: &str) -> RepoResult<Option<FavoriteId>>;

    /// Insert at the end of the owner's list (`max(sort_order) + 1`)
    ///
    /// Fails with `DuplicateUrl` when the owner already has the URL.
    async fn create(&self, favorite: &NewFavorite) -> RepoResult<Favorite>;

    /// Insert each entry at the end of the list, skipping URLs the owner
    /// already has. Entries are committed one by one.
    async fn create_many(&self, favorites: &[NewFavorite]) -> RepoResult<Vec<Favorite>>;

    /// Replace the editable fields; `sort_order` and group are untouched
    async fn update(
        &self,
        owner_id: UserId,
        id: FavoriteId,
        changes: &FavoriteChanges,
        updated_at: DateTime<Utc>,
    ) -> RepoResult<Option<Favorite>>;

    /// Delete a favorite, returning its title
    async fn delete(&self, owner_id: UserId, id: FavoriteId) -> RepoResult<Option<String>>;

    /// Apply all assignments in one transaction
    ///
    /// Assignments naming favorites the owner does not have are skipped.
    /// Returns the number of favorites that moved. If the batch would leave
    /// two favorites with the same position nothing is applied.
    async fn reorder(
        &self,
        owner_id: UserId,
        assignments: &[OrderAssignment],
        updated_at: DateTime<Utc>,
    ) -> RepoResult<u64>;

    /// Put a favorite in one of the owner's groups, or take it out of any
    async fn assign_group(
        &self,
        owner_id: UserId,
        id: FavoriteId,
        group_id: Option<GroupId>,
        updated_at: DateTime<Utc>,
    ) -> RepoResult<Option<Favorite>>;

    /// Distinct non-empty categories with counts, by count DESC then name ASC
    async fn categories(&self, owner_id: UserId) -> RepoResult<Vec<CategoryCount>>;
}

// ============================================================================
// Group Repository
// ============================================================================

#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// List groups with member counts by `sort_order` ASC, `created_at` ASC
    async fn list_with_counts(&self, owner_id: UserId) -> RepoResult<Vec<GroupWithCount>>;

    /// Find a group of the owner
    async fn find_by_id(&self, owner_id: UserId, id: GroupId) -> RepoResult<Option<Group>>;

    /// Insert at the end of the owner's groups; `DuplicateGroupName` on clash
    async fn create(&self, group: &NewGroup) -> RepoResult<Group>;

    /// Replace the editable fields; `DuplicateGroupName` on clash with another group
    async fn update(
        &self,
        owner_id: UserId,
        id: GroupId,
        changes: &GroupChanges,
        updated_at: DateTime<Utc>,
    ) -> RepoResult<Option<Group>>;

    /// Dispose of the members then delete the group, in one transaction
    ///
    /// Returns `None` when the owner has no such group and
    /// `InvalidTargetGroup` when an explicit target is not another group of
    /// the owner.
    async fn delete(
        &self,
        owner_id: UserId,
        id: GroupId,
        disposal: &MemberDisposal,
        updated_at: DateTime<Utc>,
    ) -> RepoResult<Option<GroupDeletion>>;
}

// ============================================================================
// Share Repository
// ============================================================================

#[async_trait]
pub trait ShareRepository: Send + Sync {
    /// Insert header and items in one transaction
    ///
    /// Fails with `ForeignFavorites` (listing the offenders) when any item is
    /// not a favorite of the owner, and with `AccessKeyCollision` when the
    /// key is taken.
    async fn create(&self, share: &NewShare) -> RepoResult<Share>;

    /// Owner's shares with item counts, newest first
    async fn list_for_owner(&self, owner_id: UserId) -> RepoResult<Vec<ShareSummary>>;

    /// Find a share of the owner
    async fn find_by_id(&self, owner_id: UserId, id: ShareId) -> RepoResult<Option<Share>>;

    /// Find a publicly visible share by access key
    async fn find_public(&self, access_key: &AccessKey) -> RepoResult<Option<Share>>;

    /// Items still backed by a favorite, by position
    async fn items(&self, share_id: ShareId) -> RepoResult<Vec<SharedFavorite>>;

    /// Increment the view counter, returning the new value
    async fn record_view(&self, share_id: ShareId) -> RepoResult<Option<i64>>;

    /// Toggle public visibility
    async fn set_visibility(
        &self,
        owner_id: UserId,
        id: ShareId,
        is_public: bool,
        updated_at: DateTime<Utc>,
    ) -> RepoResult<Option<Share>>;

    /// Delete items then header in one transaction; `false` when absent
    async fn delete(&self, owner_id: UserId, id: ShareId) -> RepoResult<bool>;
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert or refresh a profile
    async fn upsert(&self, profile: &UserProfile) -> RepoResult<()>;

    /// Display name of a user, if known
    async fn display_name(&self, id: UserId) -> RepoResult<Option<String>>;
}
