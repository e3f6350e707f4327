//! Favorite handlers
//!
//! Endpoints for the caller's ordered favorites.

use axum::{extract::State, Json};
use favorites_core::FavoriteId;
use favorites_service::dto::{
    AssignGroupRequest, BatchAddFavoritesRequest, BatchAddResponse, CategoryResponse,
    CheckFavoriteQuery, CheckFavoriteResponse, CreateFavoriteRequest, DeletedFavoriteResponse,
    FavoriteResponse, ReorderFavoritesRequest, ReorderResponse, SetFavoriteOrderRequest,
    UpdateFavoriteRequest,
};
use favorites_service::{CategoryService, FavoriteService};

use crate::extractors::{AuthUser, IdPath, QueryParams, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List favorites in display order
///
/// GET /favorites
pub async fn list_favorites(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<FavoriteResponse>>> {
    let service = FavoriteService::new(state.service_context());
    let response = service.list(auth.user_id).await?;
    Ok(Json(response))
}

/// Add a favorite at the end of the list
///
/// POST /favorites
pub async fn add_favorite(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateFavoriteRequest>,
) -> ApiResult<Created<Json<FavoriteResponse>>> {
    let service = FavoriteService::new(state.service_context());
    let response = service.add(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Add many favorites at once, skipping known URLs
///
/// POST /favorites/batch
pub async fn batch_add_favorites(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<BatchAddFavoritesRequest>,
) -> ApiResult<Created<Json<BatchAddResponse>>> {
    let service = FavoriteService::new(state.service_context());
    let response = service.batch_add(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Move favorites to explicit positions
///
/// PUT /favorites/reorder
pub async fn reorder_favorites(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<ReorderFavoritesRequest>,
) -> ApiResult<Json<ReorderResponse>> {
    let service = FavoriteService::new(state.service_context());
    let response = service.reorder(auth.user_id, request).await?;
    Ok(Json(response))
}

/// Put the listed favorites first, in the given order
///
/// PUT /favorites/order
pub async fn set_favorite_order(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<SetFavoriteOrderRequest>,
) -> ApiResult<Json<ReorderResponse>> {
    let service = FavoriteService::new(state.service_context());
    let response = service.set_order(auth.user_id, request).await?;
    Ok(Json(response))
}

/// Whether a URL is already a favorite
///
/// GET /favorites/check?url=
pub async fn check_favorite(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(query): QueryParams<CheckFavoriteQuery>,
) -> ApiResult<Json<CheckFavoriteResponse>> {
    let service = FavoriteService::new(state.service_context());
    let response = service.check_by_url(auth.user_id, &query.url).await?;
    Ok(Json(response))
}

/// Categories in use, most used first
///
/// GET /favorites/categories
pub async fn list_categories(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<CategoryResponse>>> {
    let service = CategoryService::new(state.service_context());
    let response = service.list(auth.user_id).await?;
    Ok(Json(response))
}

/// Replace a favorite's fields
///
/// PUT /favorites/{favorite_id}
pub async fn update_favorite(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(favorite_id): IdPath<FavoriteId>,
    ValidatedJson(request): ValidatedJson<UpdateFavoriteRequest>,
) -> ApiResult<Json<FavoriteResponse>> {
    let service = FavoriteService::new(state.service_context());
    let response = service.update(auth.user_id, favorite_id, request).await?;
    Ok(Json(response))
}

/// Delete a favorite
///
/// DELETE /favorites/{favorite_id}
pub async fn delete_favorite(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(favorite_id): IdPath<FavoriteId>,
) -> ApiResult<Json<DeletedFavoriteResponse>> {
    let service = FavoriteService::new(state.service_context());
    let response = service.delete(auth.user_id, favorite_id).await?;
    Ok(Json(response))
}

/// Move a favorite into a group, or out of any
///
/// PUT /favorites/{favorite_id}/group
pub async fn assign_favorite_group(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(favorite_id): IdPath<FavoriteId>,
    ValidatedJson(request): ValidatedJson<AssignGroupRequest>,
) -> ApiResult<Json<FavoriteResponse>> {
    let service = FavoriteService::new(state.service_context());
    let response = service
        .assign_group(auth.user_id, favorite_id, request)
        .await?;
    Ok(Json(response))
}
