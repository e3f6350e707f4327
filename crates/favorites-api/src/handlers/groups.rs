//! Group handlers

use axum::{extract::State, Json};
use favorites_core::GroupId;
use favorites_service::dto::{
    CreateGroupRequest, DeleteGroupQuery, DeletedGroupResponse, GroupResponse, UpdateGroupRequest,
};
use favorites_service::GroupService;

use crate::extractors::{AuthUser, IdPath, QueryParams, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List groups with member counts
///
/// GET /groups
pub async fn list_groups(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<GroupResponse>>> {
    let service = GroupService::new(state.service_context());
    let response = service.list(auth.user_id).await?;
    Ok(Json(response))
}

/// Create a group
///
/// POST /groups
pub async fn create_group(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateGroupRequest>,
) -> ApiResult<Created<Json<GroupResponse>>> {
    let service = GroupService::new(state.service_context());
    let response = service.create(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Rename or restyle a group
///
/// PUT /groups/{group_id}
pub async fn update_group(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(group_id): IdPath<GroupId>,
    ValidatedJson(request): ValidatedJson<UpdateGroupRequest>,
) -> ApiResult<Json<GroupResponse>> {
    let service = GroupService::new(state.service_context());
    let response = service.update(auth.user_id, group_id, request).await?;
    Ok(Json(response))
}

/// Delete a group, rehoming its members
///
/// DELETE /groups/{group_id}?move_to=
pub async fn delete_group(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(group_id): IdPath<GroupId>,
    QueryParams(query): QueryParams<DeleteGroupQuery>,
) -> ApiResult<Json<DeletedGroupResponse>> {
    let service = GroupService::new(state.service_context());
    let response = service
        .delete(auth.user_id, group_id, query.move_to)
        .await?;
    Ok(Json(response))
}
