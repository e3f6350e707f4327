//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{favorites, groups, health, profile, public, shares};
use crate::state::AppState;

/// Create the main API router (health routes are separate to skip rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(favorite_routes())
        .merge(group_routes())
        .merge(share_routes())
        .merge(public_routes())
        .route("/profile", put(profile::upsert_profile))
}

/// Favorite routes
///
/// Static segments are registered next to `:favorite_id`; axum prefers the
/// static match.
fn favorite_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/favorites",
            get(favorites::list_favorites).post(favorites::add_favorite),
        )
        .route("/favorites/batch", post(favorites::batch_add_favorites))
        .route("/favorites/reorder", put(favorites::reorder_favorites))
        .route("/favorites/order", put(favorites::set_favorite_order))
        .route("/favorites/check", get(favorites::check_favorite))
        .route("/favorites/categories", get(favorites::list_categories))
        .route(
            "/favorites/:favorite_id",
            put(favorites::update_favorite).delete(favorites::delete_favorite),
        )
        .route(
            "/favorites/:favorite_id/group",
            put(favorites::assign_favorite_group),
        )
}

/// Group routes
fn group_routes() -> Router<AppState> {
    Router::new()
        .route("/groups", get(groups::list_groups).post(groups::create_group))
        .route(
            "/groups/:group_id",
            put(groups::update_group).delete(groups::delete_group),
        )
}

/// Share routes
fn share_routes() -> Router<AppState> {
    Router::new()
        .route("/shares", get(shares::list_shares).post(shares::create_share))
        .route("/shares/:share_id", delete(shares::delete_share))
        .route(
            "/shares/:share_id/visibility",
            put(shares::set_share_visibility),
        )
}

/// Public routes (no authentication)
fn public_routes() -> Router<AppState> {
    Router::new().route("/public/shares/:access_key", get(public::get_public_share))
}
