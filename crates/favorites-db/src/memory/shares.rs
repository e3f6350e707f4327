//! ShareRepository over the in-memory state

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::instrument;

use favorites_core::entities::{NewShare, Share, SharedFavorite, ShareSummary};
use favorites_core::error::DomainError;
use favorites_core::traits::{RepoResult, ShareRepository};
use favorites_core::value_objects::{AccessKey, ShareId, UserId};

use super::MemoryStore;

#[async_trait]
impl ShareRepository for MemoryStore {
    #[instrument(skip(self, share), fields(owner_id = %share.owner_id, items = share.favorite_ids.len()))]
    async fn create(&self, share: &NewShare) -> RepoResult<Share> {
        self.write(|state| {
            let foreign: Vec<_> = share
                .favorite_ids
                .iter()
                .copied()
                .filter(|id| {
                    !state
                        .favorites
                        .get(id)
                        .is_some_and(|f| f.owner_id == share.owner_id)
                })
                .collect();
            if !foreign.is_empty() {
                return Err(DomainError::ForeignFavorites(foreign));
            }

            if state
                .shares
                .values()
                .any(|s| s.access_key == share.access_key)
            {
                return Err(DomainError::AccessKeyCollision);
            }

            let (created, favorite_ids) = share.clone().into_share();
            let items = favorite_ids.into_iter().zip(1..).collect();
            state.share_items.insert(created.id, items);
            state.shares.insert(created.id, created.clone());
            Ok(created)
        })
    }

    async fn list_for_owner(&self, owner_id: UserId) -> RepoResult<Vec<ShareSummary>> {
        let mut list: Vec<ShareSummary> = self.read(|state| {
            state
                .shares
                .values()
                .filter(|s| s.owner_id == owner_id)
                .map(|s| ShareSummary {
                    share: s.clone(),
                    item_count: state
                        .share_items
                        .get(&s.id)
                        .map_or(0, |items| items.len() as i64),
                })
                .collect()
        });
        list.sort_by(|a, b| b.share.created_at.cmp(&a.share.created_at));
        Ok(list)
    }

    async fn find_by_id(&self, owner_id: UserId, id: ShareId) -> RepoResult<Option<Share>> {
        Ok(self.read(|state| state.owned_share(owner_id, id).cloned()))
    }

    #[instrument(skip(self, access_key))]
    async fn find_public(&self, access_key: &AccessKey) -> RepoResult<Option<Share>> {
        Ok(self.read(|state| {
            state
                .shares
                .values()
                .find(|s| s.access_key == *access_key && s.is_public)
                .cloned()
        }))
    }

    async fn items(&self, share_id: ShareId) -> RepoResult<Vec<SharedFavorite>> {
        Ok(self.read(|state| {
            let Some(items) = state.share_items.get(&share_id) else {
                return Vec::new();
            };
            let mut items: Vec<SharedFavorite> = items
                .iter()
                .filter_map(|(favorite_id, position)| {
                    state.favorites.get(favorite_id).map(|f| SharedFavorite {
                        favorite_id: *favorite_id,
                        position: *position,
                        title: f.title.clone(),
                        url: f.url.clone(),
                        icon: f.icon.clone(),
                        description: f.description.clone(),
                        category: f.category.clone(),
                    })
                })
                .collect();
            items.sort_by_key(|item| item.position);
            items
        }))
    }

    async fn record_view(&self, share_id: ShareId) -> RepoResult<Option<i64>> {
        self.write(|state| {
            Ok(state.shares.get_mut(&share_id).map(|share| {
                share.view_count += 1;
                share.view_count
            }))
        })
    }

    async fn set_visibility(
        &self,
        owner_id: UserId,
        id: ShareId,
        is_public: bool,
        updated_at: DateTime<Utc>,
    ) -> RepoResult<Option<Share>> {
        self.write(|state| {
            Ok(state
                .shares
                .get_mut(&id)
                .filter(|share| share.owner_id == owner_id)
                .map(|share| {
                    share.is_public = is_public;
                    share.updated_at = updated_at;
                    share.clone()
                }))
        })
    }

    #[instrument(skip(self))]
    async fn delete(&self, owner_id: UserId, id: ShareId) -> RepoResult<bool> {
        self.write(|state| {
            if state.owned_share(owner_id, id).is_none() {
                return Ok(false);
            }
            state.share_items.remove(&id);
            state.shares.remove(&id);
            Ok(true)
        })
    }
}
