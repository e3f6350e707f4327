//! Public share endpoint
//!
//! The only route reachable without a token.

use axum::{
    extract::{Path, State},
    Json,
};
use favorites_service::dto::{PublicShareQuery, PublicShareResponse};
use favorites_service::ShareService;

use crate::extractors::QueryParams;
use crate::response::ApiResult;
use crate::state::AppState;

/// Read a share by its access key
///
/// GET /public/shares/{access_key}?password=
pub async fn get_public_share(
    State(state): State<AppState>,
    Path(access_key): Path<String>,
    QueryParams(query): QueryParams<PublicShareQuery>,
) -> ApiResult<Json<PublicShareResponse>> {
    let service = ShareService::new(state.service_context());
    let response = service
        .fetch_public(&access_key, query.password.as_deref())
        .await?;
    Ok(Json(response))
}
