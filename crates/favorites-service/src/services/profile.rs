//! Profile service
//!
//! Keeps the local projection of identity-provider users current. Only the
//! display name is kept; it labels the owner of public shares.

use tracing::{info, instrument};

use favorites_core::entities::UserProfile;
use favorites_core::{DomainError, UserId};

use crate::dto::{ProfileResponse, UpdateProfileRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Profile service
pub struct ProfileService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProfileService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Insert or refresh the caller's profile
    #[instrument(skip(self, request))]
    pub async fn upsert(
        &self,
        user_id: UserId,
        request: UpdateProfileRequest,
    ) -> ServiceResult<ProfileResponse> {
        let display_name = request.display_name.trim();
        if display_name.is_empty() {
            return Err(DomainError::validation("display name is required").into());
        }

        let profile = UserProfile {
            id: user_id,
            display_name: display_name.to_string(),
            updated_at: self.ctx.now(),
        };
        self.ctx.user_repo().upsert(&profile).await?;

        info!(user_id = %user_id, "Profile updated");

        Ok(ProfileResponse::from(profile))
    }
}
