//! Authentication extractor
//!
//! Extracts and validates JWT tokens from the Authorization header.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use favorites_core::UserId;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user extracted from JWT token
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// User ID from the token subject
    pub user_id: UserId,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);

        let claims = app_state
            .jwt_service()
            .validate_access_token(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Rejected access token");
                ApiError::App(e)
            })?;

        let user_id = claims.user_id().map_err(|e| {
            tracing::warn!(error = %e, "Invalid user ID in token");
            ApiError::App(e)
        })?;

        Ok(AuthUser { user_id })
    }
}
