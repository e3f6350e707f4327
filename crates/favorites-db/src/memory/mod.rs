//! In-process implementation of every repository port
//!
//! All state sits behind one `parking_lot::Mutex`. Mutations that check
//! first and write last run in place through `write`. Mutations that can fail
//! after writing (reorder, group deletion) go through `transaction`, which
//! works on a clone and swaps it in only when every step succeeded.
//! Profiles are optional here: owners need no `users` row.

mod favorites;
mod groups;
mod shares;
mod users;

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

use favorites_core::entities::{next_sort_order, Favorite, Group, Share, UserProfile};
use favorites_core::traits::RepoResult;
use favorites_core::value_objects::{FavoriteId, GroupId, ShareId, UserId};

#[derive(Debug, Clone, Default)]
struct MemoryState {
    users: HashMap<UserId, UserProfile>,
    favorites: HashMap<FavoriteId, Favorite>,
    groups: HashMap<GroupId, Group>,
    shares: HashMap<ShareId, Share>,
    /// `(favorite, position)` pairs per share, in position order
    share_items: HashMap<ShareId, Vec<(FavoriteId, i32)>>,
}

impl MemoryState {
    fn owned_favorite_mut(&mut self, owner_id: UserId, id: FavoriteId) -> Option<&mut Favorite> {
        self.favorites
            .get_mut(&id)
            .filter(|favorite| favorite.owner_id == owner_id)
    }

    fn owned_group(&self, owner_id: UserId, id: GroupId) -> Option<&Group> {
        self.groups.get(&id).filter(|group| group.owner_id == owner_id)
    }

    fn owned_share(&self, owner_id: UserId, id: ShareId) -> Option<&Share> {
        self.shares.get(&id).filter(|share| share.owner_id == owner_id)
    }

    fn next_favorite_order(&self, owner_id: UserId) -> RepoResult<i32> {
        next_sort_order(
            self.favorites
                .values()
                .filter(|favorite| favorite.owner_id == owner_id)
                .map(|favorite| favorite.sort_order)
                .max(),
        )
    }

    fn next_group_order(&self, owner_id: UserId) -> RepoResult<i32> {
        next_sort_order(
            self.groups
                .values()
                .filter(|group| group.owner_id == owner_id)
                .map(|group| group.sort_order)
                .max(),
        )
    }
}

/// Repository backend that keeps everything in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read<T>(&self, f: impl FnOnce(&MemoryState) -> T) -> T {
        f(&self.state.lock())
    }

    /// Run `f` directly on the live state
    ///
    /// `f` must return every error before its first write.
    fn write<T>(&self, f: impl FnOnce(&mut MemoryState) -> RepoResult<T>) -> RepoResult<T> {
        f(&mut self.state.lock())
    }

    /// Run `f` against a scratch copy and keep the result only on success
    fn transaction<T>(&self, f: impl FnOnce(&mut MemoryState) -> RepoResult<T>) -> RepoResult<T> {
        let mut state = self.state.lock();
        let mut scratch = state.clone();
        let value = f(&mut scratch)?;
        *state = scratch;
        Ok(value)
    }
}
