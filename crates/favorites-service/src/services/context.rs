//! Service context - dependency container for services
//!
//! Holds the repositories, the clock and the favorites settings needed by services.

use chrono::{DateTime, Utc};
use std::sync::Arc;

use favorites_common::FavoritesConfig;
use favorites_core::traits::{
    FavoriteRepository, GroupRepository, ShareRepository, UserRepository,
};
use favorites_core::{Clock, SystemClock};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// Repositories are trait objects so the same services run over PostgreSQL
/// or the in-memory store.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    favorite_repo: Arc<dyn FavoriteRepository>,
    group_repo: Arc<dyn GroupRepository>,
    share_repo: Arc<dyn ShareRepository>,
    user_repo: Arc<dyn UserRepository>,

    clock: Arc<dyn Clock>,
    settings: Arc<FavoritesConfig>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        favorite_repo: Arc<dyn FavoriteRepository>,
        group_repo: Arc<dyn GroupRepository>,
        share_repo: Arc<dyn ShareRepository>,
        user_repo: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
        settings: FavoritesConfig,
    ) -> Self {
        Self {
            favorite_repo,
            group_repo,
            share_repo,
            user_repo,
            clock,
            settings: Arc::new(settings),
        }
    }

    // === Repositories ===

    /// Get the favorite repository
    pub fn favorite_repo(&self) -> &dyn FavoriteRepository {
        self.favorite_repo.as_ref()
    }

    /// Get the group repository
    pub fn group_repo(&self) -> &dyn GroupRepository {
        self.group_repo.as_ref()
    }

    /// Get the share repository
    pub fn share_repo(&self) -> &dyn ShareRepository {
        self.share_repo.as_ref()
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    // === Clock & Settings ===

    /// Current instant according to the configured clock
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Favorites settings (default group, share links)
    pub fn settings(&self) -> &FavoritesConfig {
        &self.settings
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("settings", &self.settings)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    favorite_repo: Option<Arc<dyn FavoriteRepository>>,
    group_repo: Option<Arc<dyn GroupRepository>>,
    share_repo: Option<Arc<dyn ShareRepository>>,
    user_repo: Option<Arc<dyn UserRepository>>,
    clock: Option<Arc<dyn Clock>>,
    settings: Option<FavoritesConfig>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            favorite_repo: None,
            group_repo: None,
            share_repo: None,
            user_repo: None,
            clock: None,
            settings: None,
        }
    }

    pub fn favorite_repo(mut self, repo: Arc<dyn FavoriteRepository>) -> Self {
        self.favorite_repo = Some(repo);
        self
    }

    pub fn group_repo(mut self, repo: Arc<dyn GroupRepository>) -> Self {
        self.group_repo = Some(repo);
        self
    }

    pub fn share_repo(mut self, repo: Arc<dyn ShareRepository>) -> Self {
        self.share_repo = Some(repo);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    /// Defaults to the system clock
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Defaults to `FavoritesConfig::default()`
    pub fn settings(mut self, settings: FavoritesConfig) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any repository is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.favorite_repo
                .ok_or_else(|| ServiceError::validation("favorite_repo is required"))?,
            self.group_repo
                .ok_or_else(|| ServiceError::validation("group_repo is required"))?,
            self.share_repo
                .ok_or_else(|| ServiceError::validation("share_repo is required"))?,
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            self.settings.unwrap_or_default(),
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
