//! Share handlers
//!
//! Endpoints the owner uses to publish and manage shares.

use axum::{extract::State, Json};
use favorites_core::ShareId;
use favorites_service::dto::{CreateShareRequest, SetShareVisibilityRequest, ShareResponse};
use favorites_service::ShareService;

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List the caller's shares, newest first
///
/// GET /shares
pub async fn list_shares(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<ShareResponse>>> {
    let service = ShareService::new(state.service_context());
    let response = service.list(auth.user_id).await?;
    Ok(Json(response))
}

/// Publish a share of some favorites
///
/// POST /shares
pub async fn create_share(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateShareRequest>,
) -> ApiResult<Created<Json<ShareResponse>>> {
    let service = ShareService::new(state.service_context());
    let response = service.create(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Delete a share
///
/// DELETE /shares/{share_id}
pub async fn delete_share(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(share_id): IdPath<ShareId>,
) -> ApiResult<NoContent> {
    let service = ShareService::new(state.service_context());
    service.delete(auth.user_id, share_id).await?;
    Ok(NoContent)
}

/// Show or hide a share
///
/// PUT /shares/{share_id}/visibility
pub async fn set_share_visibility(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(share_id): IdPath<ShareId>,
    ValidatedJson(request): ValidatedJson<SetShareVisibilityRequest>,
) -> ApiResult<Json<ShareResponse>> {
    let service = ShareService::new(state.service_context());
    let response = service
        .set_visibility(auth.user_id, share_id, request)
        .await?;
    Ok(Json(response))
}
