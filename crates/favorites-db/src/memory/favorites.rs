//! FavoriteRepository over the in-memory state

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashSet};
use tracing::instrument;

use favorites_core::entities::{CategoryCount, Favorite, FavoriteChanges, NewFavorite, OrderAssignment};
use favorites_core::error::DomainError;
use favorites_core::traits::{FavoriteRepository, RepoResult};
use favorites_core::value_objects::{FavoriteId, GroupId, UserId};

use super::{MemoryState, MemoryStore};

fn url_taken(state: &MemoryState, owner_id: UserId, url: &str, except: Option<FavoriteId>) -> bool {
    state
        .favorites
        .values()
        .any(|f| f.owner_id == owner_id && f.url == url && Some(f.id) != except)
}

fn append(state: &mut MemoryState, favorite: &NewFavorite) -> RepoResult<Favorite> {
    let created = favorite
        .clone()
        .into_favorite(state.next_favorite_order(favorite.owner_id)?);
    state.favorites.insert(created.id, created.clone());
    Ok(created)
}

#[async_trait]
impl FavoriteRepository for MemoryStore {
    #[instrument(skip(self))]
    async fn list_by_owner(&self, owner_id: UserId) -> RepoResult<Vec<Favorite>> {
        let mut list: Vec<Favorite> = self.read(|state| {
            state
                .favorites
                .values()
                .filter(|f| f.owner_id == owner_id)
                .cloned()
                .collect()
        });
        list.sort_by(Favorite::display_order);
        Ok(list)
    }

    async fn find_by_id(&self, owner_id: UserId, id: FavoriteId) -> RepoResult<Option<Favorite>> {
        Ok(self.read(|state| {
            state
                .favorites
                .get(&id)
                .filter(|f| f.owner_id == owner_id)
                .cloned()
        }))
    }

    async fn find_by_url(&self, owner_id: UserId, url: &str) -> RepoResult<Option<FavoriteId>> {
        Ok(self.read(|state| {
            state
                .favorites
                .values()
                .find(|f| f.owner_id == owner_id && f.url == url)
                .map(|f| f.id)
        }))
    }

    #[instrument(skip(self, favorite), fields(owner_id = %favorite.owner_id))]
    async fn create(&self, favorite: &NewFavorite) -> RepoResult<Favorite> {
        self.write(|state| {
            if url_taken(state, favorite.owner_id, &favorite.url, None) {
                return Err(DomainError::DuplicateUrl);
            }
            append(state, favorite)
        })
    }

    #[instrument(skip(self, favorites), fields(entries = favorites.len()))]
    async fn create_many(&self, favorites: &[NewFavorite]) -> RepoResult<Vec<Favorite>> {
        let mut created = Vec::with_capacity(favorites.len());
        for favorite in favorites {
            let row = self.write(|state| {
                if url_taken(state, favorite.owner_id, &favorite.url, None) {
                    return Ok(None);
                }
                append(state, favorite).map(Some)
            })?;
            created.extend(row);
        }
        Ok(created)
    }

    async fn update(
        &self,
        owner_id: UserId,
        id: FavoriteId,
        changes: &FavoriteChanges,
        updated_at: DateTime<Utc>,
    ) -> RepoResult<Option<Favorite>> {
        self.write(|state| {
            if state.owned_favorite_mut(owner_id, id).is_none() {
                return Ok(None);
            }
            if url_taken(state, owner_id, &changes.url, Some(id)) {
                return Err(DomainError::DuplicateUrl);
            }

            let Some(favorite) = state.owned_favorite_mut(owner_id, id) else {
                return Ok(None);
            };
            favorite.title.clone_from(&changes.title);
            favorite.url.clone_from(&changes.url);
            favorite.icon.clone_from(&changes.icon);
            favorite.description.clone_from(&changes.description);
            favorite.category.clone_from(&changes.category);
            favorite.updated_at = updated_at;
            Ok(Some(favorite.clone()))
        })
    }

    async fn delete(&self, owner_id: UserId, id: FavoriteId) -> RepoResult<Option<String>> {
        self.write(|state| {
            if state.owned_favorite_mut(owner_id, id).is_none() {
                return Ok(None);
            }
            let removed = state.favorites.remove(&id);
            for items in state.share_items.values_mut() {
                items.retain(|(favorite_id, _)| *favorite_id != id);
            }
            Ok(removed.map(|f| f.title))
        })
    }

    #[instrument(skip(self, assignments), fields(assignments = assignments.len()))]
    async fn reorder(
        &self,
        owner_id: UserId,
        assignments: &[OrderAssignment],
        updated_at: DateTime<Utc>,
    ) -> RepoResult<u64> {
        self.transaction(|state| {
            let mut moved = 0;
            for assignment in assignments {
                if let Some(favorite) = state.owned_favorite_mut(owner_id, assignment.favorite_id) {
                    favorite.sort_order = assignment.sort_order;
                    favorite.updated_at = updated_at;
                    moved += 1;
                }
            }

            let mut seen = HashSet::new();
            let clash = state
                .favorites
                .values()
                .filter(|f| f.owner_id == owner_id)
                .any(|f| !seen.insert(f.sort_order));
            if clash {
                return Err(DomainError::DuplicateSortOrder);
            }
            Ok(moved)
        })
    }

    async fn assign_group(
        &self,
        owner_id: UserId,
        id: FavoriteId,
        group_id: Option<GroupId>,
        updated_at: DateTime<Utc>,
    ) -> RepoResult<Option<Favorite>> {
        self.write(|state| {
            if let Some(group_id) = group_id {
                if state.owned_group(owner_id, group_id).is_none() {
                    return Err(DomainError::InvalidTargetGroup(group_id));
                }
            }
            Ok(state.owned_favorite_mut(owner_id, id).map(|favorite| {
                favorite.group_id = group_id;
                favorite.updated_at = updated_at;
                favorite.clone()
            }))
        })
    }

    async fn categories(&self, owner_id: UserId) -> RepoResult<Vec<CategoryCount>> {
        let counts: BTreeMap<String, i64> = self.read(|state| {
            let mut counts = BTreeMap::new();
            for category in state
                .favorites
                .values()
                .filter(|f| f.owner_id == owner_id)
                .filter_map(|f| f.category.as_deref())
                .filter(|c| !c.is_empty())
            {
                *counts.entry(category.to_string()).or_insert(0) += 1;
            }
            counts
        });

        let mut list: Vec<CategoryCount> = counts
            .into_iter()
            .map(|(category, count)| CategoryCount { category, count })
            .collect();
        // Stable sort keeps the BTreeMap's name order among equal counts
        list.sort_by(|a, b| b.count.cmp(&a.count));
        Ok(list)
    }
}
