//! Share service
//!
//! Publishes read-only snapshots of favorites behind an access key and serves
//! them publicly, enforcing visibility, expiry and the optional password.

use chrono::Duration;
use std::collections::HashSet;
use tracing::{debug, info, instrument, warn};

use favorites_core::entities::{NewShare, PublicShare};
use favorites_core::{AccessKey, DomainError, ShareId, UserId};

use crate::dto::requests::non_blank;
use crate::dto::{
    CreateShareRequest, PublicShareResponse, SetShareVisibilityRequest, ShareResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Fresh keys tried after a collision before giving up
const KEY_REGENERATIONS: usize = 3;

/// Share service
pub struct ShareService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ShareService<'a> {
    /// Create a new ShareService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Publish a share of some of the owner's favorites
    #[instrument(skip(self, request), fields(items = request.favorite_ids.len()))]
    pub async fn create(
        &self,
        owner_id: UserId,
        request: CreateShareRequest,
    ) -> ServiceResult<ShareResponse> {
        let title = request.title.trim();
        if title.is_empty() {
            return Err(DomainError::validation("share title is required").into());
        }
        if request.favorite_ids.is_empty() {
            return Err(DomainError::validation("at least one favorite must be selected").into());
        }
        let mut seen = HashSet::new();
        if !request.favorite_ids.iter().all(|id| seen.insert(*id)) {
            return Err(DomainError::validation("favorite ids must be distinct").into());
        }

        let now = self.ctx.now();
        let expires_at = match request.expires_in_days.filter(|days| *days > 0) {
            Some(days) => Some(
                Duration::try_days(days)
                    .and_then(|ttl| now.checked_add_signed(ttl))
                    .ok_or_else(|| DomainError::validation("expiry is out of range"))?,
            ),
            None => None,
        };

        let mut draft = NewShare {
            id: ShareId::new(),
            owner_id,
            access_key: self.generate_key(),
            title: title.to_string(),
            description: non_blank(request.description),
            // Stored verbatim; only the empty string means "no password"
            password: request.password.filter(|p| !p.is_empty()),
            expires_at,
            favorite_ids: request.favorite_ids,
            created_at: now,
        };

        let mut regenerations = 0;
        let share = loop {
            match self.ctx.share_repo().create(&draft).await {
                Ok(share) => break share,
                Err(DomainError::AccessKeyCollision) if regenerations < KEY_REGENERATIONS => {
                    regenerations += 1;
                    warn!(owner_id = %owner_id, attempt = regenerations, "Access key collision, regenerating");
                    draft.access_key = self.generate_key();
                }
                Err(e) => return Err(e.into()),
            }
        };

        info!(
            owner_id = %owner_id,
            share_id = %share.id,
            items = draft.favorite_ids.len(),
            expires_at = ?share.expires_at,
            "Share created"
        );

        Ok(ShareResponse::new(
            &share,
            draft.favorite_ids.len() as i64,
            &self.ctx.settings().share_base_url,
            now,
        ))
    }

    /// List the owner's shares, newest first
    #[instrument(skip(self))]
    pub async fn list(&self, owner_id: UserId) -> ServiceResult<Vec<ShareResponse>> {
        let now = self.ctx.now();
        let base_url = &self.ctx.settings().share_base_url;
        let summaries = self.ctx.share_repo().list_for_owner(owner_id).await?;

        Ok(summaries
            .iter()
            .map(|summary| ShareResponse::new(&summary.share, summary.item_count, base_url, now))
            .collect())
    }

    /// Fetch a share by its access key, counting the view
    ///
    /// Checks run in order: existence and visibility, expiry, password. The
    /// view counter moves only after all of them pass.
    #[instrument(skip(self, access_key, password))]
    pub async fn fetch_public(
        &self,
        access_key: &str,
        password: Option<&str>,
    ) -> ServiceResult<PublicShareResponse> {
        let key = AccessKey::from_string(access_key);
        let Some(mut share) = self.ctx.share_repo().find_public(&key).await? else {
            debug!("Public share lookup missed");
            return Err(DomainError::UnknownAccessKey.into());
        };

        if share.is_expired_at(self.ctx.now()) {
            debug!(share_id = %share.id, "Expired share requested");
            return Err(DomainError::ShareExpired.into());
        }

        if !share.password_matches(password) {
            warn!(share_id = %share.id, supplied = password.is_some(), "Share password rejected");
            return Err(DomainError::IncorrectSharePassword.into());
        }

        let items = self.ctx.share_repo().items(share.id).await?;
        let owner_name = self.ctx.user_repo().display_name(share.owner_id).await?;

        // A share deleted since the lookup no longer exists for this caller
        share.view_count = self
            .ctx
            .share_repo()
            .record_view(share.id)
            .await?
            .ok_or(DomainError::UnknownAccessKey)?;

        info!(share_id = %share.id, view_count = share.view_count, "Share viewed");

        Ok(PublicShareResponse::from(PublicShare {
            share,
            owner_name,
            items,
        }))
    }

    /// Delete a share and its items
    #[instrument(skip(self))]
    pub async fn delete(&self, owner_id: UserId, share_id: ShareId) -> ServiceResult<()> {
        if !self.ctx.share_repo().delete(owner_id, share_id).await? {
            return Err(DomainError::ShareNotFound(share_id).into());
        }

        info!(owner_id = %owner_id, share_id = %share_id, "Share deleted");
        Ok(())
    }

    /// Show or hide a share from the public endpoint
    #[instrument(skip(self, request))]
    pub async fn set_visibility(
        &self,
        owner_id: UserId,
        share_id: ShareId,
        request: SetShareVisibilityRequest,
    ) -> ServiceResult<ShareResponse> {
        let now = self.ctx.now();
        let share = self
            .ctx
            .share_repo()
            .set_visibility(owner_id, share_id, request.is_public, now)
            .await?
            .ok_or(DomainError::ShareNotFound(share_id))?;
        let item_count = self.ctx.share_repo().items(share_id).await?.len() as i64;

        info!(
            owner_id = %owner_id,
            share_id = %share_id,
            is_public = share.is_public,
            "Share visibility changed"
        );

        Ok(ShareResponse::new(
            &share,
            item_count,
            &self.ctx.settings().share_base_url,
            now,
        ))
    }

    fn generate_key(&self) -> AccessKey {
        AccessKey::generate(self.ctx.settings().share_key_length)
    }
}
