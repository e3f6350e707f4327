//! Profile handlers

use axum::{extract::State, Json};
use favorites_service::dto::{ProfileResponse, UpdateProfileRequest};
use favorites_service::ProfileService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Record the caller's profile so their favorites can be stored
///
/// PUT /profile
pub async fn upsert_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Json<ProfileResponse>> {
    let service = ProfileService::new(state.service_context());
    let response = service.upsert(auth.user_id, request).await?;
    Ok(Json(response))
}
