//! UserRepository over the in-memory state

use async_trait::async_trait;

use favorites_core::entities::UserProfile;
use favorites_core::traits::{RepoResult, UserRepository};
use favorites_core::value_objects::UserId;

use super::MemoryStore;

#[async_trait]
impl UserRepository for MemoryStore {
    async fn upsert(&self, profile: &UserProfile) -> RepoResult<()> {
        self.write(|state| {
            state.users.insert(profile.id, profile.clone());
            Ok(())
        })
    }

    async fn display_name(&self, id: UserId) -> RepoResult<Option<String>> {
        Ok(self.read(|state| {
            state
                .users
                .get(&id)
                .map(|profile| profile.display_name.clone())
                .filter(|name| !name.is_empty())
        }))
    }
}
