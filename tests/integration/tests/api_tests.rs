//! API Integration Tests
//!
//! Each test spawns its own server on the in-memory backend, so no external
//! services are needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_error, assert_json, assert_status, fixtures::*, TestServer, TEST_SHARE_BASE_URL,
};
use reqwest::StatusCode;
use serde_json::json;

async fn add(server: &TestServer, token: &str, request: &CreateFavoriteRequest) -> FavoriteResponse {
    let response = server.post_auth("/api/v1/favorites", token, request).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn list(server: &TestServer, token: &str) -> Vec<FavoriteResponse> {
    let response = server.get_auth("/api/v1/favorites", token).await.unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

async fn create_group(server: &TestServer, token: &str, name: &str) -> GroupResponse {
    let response = server
        .post_auth("/api/v1/groups", token, &json!({ "name": name }))
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["storage"], "memory");
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_favorites_require_token() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/v1/favorites").await.unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "MISSING_AUTHORIZATION");
}

#[tokio::test]
async fn test_garbage_token_rejected() {
    let server = TestServer::start().await.unwrap();
    let response = server.get_auth("/api/v1/favorites", "not-a-jwt").await.unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "INVALID_TOKEN");
}

// ============================================================================
// Favorite Tests
// ============================================================================

#[tokio::test]
async fn test_add_and_list_favorites_in_order() {
    let server = TestServer::start().await.unwrap();
    let user = server.sign_up("alice").await.unwrap();

    let first = add(&server, &user.token, &CreateFavoriteRequest::unique()).await;
    let second = add(&server, &user.token, &CreateFavoriteRequest::unique()).await;
    assert_eq!(first.sort_order, 1);
    assert_eq!(second.sort_order, 2);

    let favorites = list(&server, &user.token).await;
    let ids: Vec<&str> = favorites.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec![first.id.as_str(), second.id.as_str()]);
}

#[tokio::test]
async fn test_favorites_are_private_to_owner() {
    let server = TestServer::start().await.unwrap();
    let alice = server.sign_up("alice").await.unwrap();
    let bob = server.sign_up("bob").await.unwrap();

    let favorite = add(&server, &alice.token, &CreateFavoriteRequest::unique()).await;

    assert!(list(&server, &bob.token).await.is_empty());

    let response = server
        .delete_auth(&format!("/api/v1/favorites/{}", favorite.id), &bob.token)
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_FAVORITE");
}

#[tokio::test]
async fn test_duplicate_url_conflicts() {
    let server = TestServer::start().await.unwrap();
    let user = server.sign_up("alice").await.unwrap();
    let request = CreateFavoriteRequest::unique();

    add(&server, &user.token, &request).await;
    let response = server
        .post_auth("/api/v1/favorites", &user.token, &request)
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "DUPLICATE_URL");
}

#[tokio::test]
async fn test_blank_title_is_bad_request() {
    let server = TestServer::start().await.unwrap();
    let user = server.sign_up("alice").await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/favorites",
            &user.token,
            &CreateFavoriteRequest::new("   ", "https://a.example"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let server = TestServer::start().await.unwrap();
    let user = server.sign_up("alice").await.unwrap();

    let response = server
        .client
        .post(format!("{}/api/v1/favorites", server.base_url()))
        .header("Authorization", format!("Bearer {}", user.token))
        .header("Content-Type", "application/json")
        .body("{\"title\":")
        .send()
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_BODY");
}

#[tokio::test]
async fn test_malformed_id_is_bad_request() {
    let server = TestServer::start().await.unwrap();
    let user = server.sign_up("alice").await.unwrap();

    let response = server
        .delete_auth("/api/v1/favorites/not-a-uuid", &user.token)
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_PATH_PARAMETER");
}

#[tokio::test]
async fn test_batch_add_skips_known_urls() {
    let server = TestServer::start().await.unwrap();
    let user = server.sign_up("alice").await.unwrap();
    let existing = CreateFavoriteRequest::unique();
    add(&server, &user.token, &existing).await;

    let fresh = CreateFavoriteRequest::unique();
    let response = server
        .post_auth(
            "/api/v1/favorites/batch",
            &user.token,
            &json!({ "favorites": [&existing, &fresh] }),
        )
        .await
        .unwrap();
    let batch: BatchAddResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(batch.added_count, 1);
    assert_eq!(batch.favorites[0].url, fresh.url);
    assert_eq!(batch.favorites[0].sort_order, 2);
}

#[tokio::test]
async fn test_update_and_delete_favorite() {
    let server = TestServer::start().await.unwrap();
    let user = server.sign_up("alice").await.unwrap();
    let favorite = add(&server, &user.token, &CreateFavoriteRequest::unique()).await;

    let response = server
        .put_auth(
            &format!("/api/v1/favorites/{}", favorite.id),
            &user.token,
            &CreateFavoriteRequest::new("Renamed", "https://renamed.example").in_category("docs"),
        )
        .await
        .unwrap();
    let updated: FavoriteResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.category.as_deref(), Some("docs"));
    assert_eq!(updated.sort_order, favorite.sort_order);

    let response = server
        .delete_auth(&format!("/api/v1/favorites/{}", favorite.id), &user.token)
        .await
        .unwrap();
    let deleted: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(deleted["title"], "Renamed");
    assert!(list(&server, &user.token).await.is_empty());
}

#[tokio::test]
async fn test_check_by_url() {
    let server = TestServer::start().await.unwrap();
    let user = server.sign_up("alice").await.unwrap();
    let favorite = add(
        &server,
        &user.token,
        &CreateFavoriteRequest::new("Docs", "https://docs.example/a?b=c"),
    )
    .await;

    let response = server
        .client
        .get(format!("{}/api/v1/favorites/check", server.base_url()))
        .query(&[("url", "https://docs.example/a?b=c")])
        .header("Authorization", format!("Bearer {}", user.token))
        .send()
        .await
        .unwrap();
    let check: CheckFavoriteResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(check.is_favorited);
    assert_eq!(check.favorite_id.as_deref(), Some(favorite.id.as_str()));

    let response = server
        .get_auth("/api/v1/favorites/check?url=https://other.example", &user.token)
        .await
        .unwrap();
    let check: CheckFavoriteResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!check.is_favorited);
    assert!(check.favorite_id.is_none());
}

#[tokio::test]
async fn test_reorder_swaps_positions() {
    let server = TestServer::start().await.unwrap();
    let user = server.sign_up("alice").await.unwrap();
    let a = add(&server, &user.token, &CreateFavoriteRequest::unique()).await;
    let b = add(&server, &user.token, &CreateFavoriteRequest::unique()).await;

    let response = server
        .put_auth(
            "/api/v1/favorites/reorder",
            &user.token,
            &json!({ "orders": [{ "id": &a.id, "order": 2 }, { "id": &b.id, "order": 1 }] }),
        )
        .await
        .unwrap();
    let result: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(result["updated"], 2);

    let ids: Vec<String> = list(&server, &user.token).await.into_iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![b.id, a.id]);
}

#[tokio::test]
async fn test_reorder_clash_is_rejected() {
    let server = TestServer::start().await.unwrap();
    let user = server.sign_up("alice").await.unwrap();
    let a = add(&server, &user.token, &CreateFavoriteRequest::unique()).await;
    add(&server, &user.token, &CreateFavoriteRequest::unique()).await;

    let response = server
        .put_auth(
            "/api/v1/favorites/reorder",
            &user.token,
            &json!({ "orders": [{ "id": &a.id, "order": 2 }] }),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "DUPLICATE_SORT_ORDER");

    let favorites = list(&server, &user.token).await;
    assert_eq!(favorites[0].id, a.id);
    assert_eq!(favorites[0].sort_order, 1);
}

#[tokio::test]
async fn test_reorder_positions_stay_in_range() {
    let server = TestServer::start().await.unwrap();
    let user = server.sign_up("alice").await.unwrap();
    let a = add(&server, &user.token, &CreateFavoriteRequest::unique()).await;

    let response = server
        .put_auth(
            "/api/v1/favorites/reorder",
            &user.token,
            &json!({ "orders": [{ "id": &a.id, "order": i32::MAX }] }),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "VALIDATION_ERROR");

    let response = server
        .put_auth(
            "/api/v1/favorites/reorder",
            &user.token,
            &json!({ "orders": [{ "id": &a.id, "order": 1_000_000_000 }] }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let b = add(&server, &user.token, &CreateFavoriteRequest::unique()).await;
    assert_eq!(b.sort_order, 1_000_000_001);

    let ids: Vec<String> = list(&server, &user.token).await.into_iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![a.id, b.id]);
}

#[tokio::test]
async fn test_set_order_moves_listed_first() {
    let server = TestServer::start().await.unwrap();
    let user = server.sign_up("alice").await.unwrap();
    let a = add(&server, &user.token, &CreateFavoriteRequest::unique()).await;
    let b = add(&server, &user.token, &CreateFavoriteRequest::unique()).await;
    let c = add(&server, &user.token, &CreateFavoriteRequest::unique()).await;

    let response = server
        .put_auth(
            "/api/v1/favorites/order",
            &user.token,
            &json!({ "favorite_ids": [&c.id] }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let favorites = list(&server, &user.token).await;
    let ids: Vec<&str> = favorites.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec![c.id.as_str(), a.id.as_str(), b.id.as_str()]);
    let orders: Vec<i32> = favorites.iter().map(|f| f.sort_order).collect();
    assert_eq!(orders, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_categories_most_used_first() {
    let server = TestServer::start().await.unwrap();
    let user = server.sign_up("alice").await.unwrap();
    for category in ["docs", "tools", "tools"] {
        add(&server, &user.token, &CreateFavoriteRequest::unique().in_category(category)).await;
    }
    add(&server, &user.token, &CreateFavoriteRequest::unique()).await;

    let response = server
        .get_auth("/api/v1/favorites/categories", &user.token)
        .await
        .unwrap();
    let categories: Vec<CategoryResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    let summary: Vec<(String, i64)> = categories
        .into_iter()
        .map(|c| (c.category, c.count))
        .collect();
    assert_eq!(
        summary,
        vec![("tools".to_string(), 2), ("docs".to_string(), 1)]
    );
}

// ============================================================================
// Group Tests
// ============================================================================

#[tokio::test]
async fn test_assign_group_and_counts() {
    let server = TestServer::start().await.unwrap();
    let user = server.sign_up("alice").await.unwrap();
    let group = create_group(&server, &user.token, "Reading").await;
    let favorite = add(&server, &user.token, &CreateFavoriteRequest::unique()).await;

    let response = server
        .put_auth(
            &format!("/api/v1/favorites/{}/group", favorite.id),
            &user.token,
            &json!({ "group_id": &group.id }),
        )
        .await
        .unwrap();
    let assigned: FavoriteResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(assigned.group_id.as_deref(), Some(group.id.as_str()));

    let response = server.get_auth("/api/v1/groups", &user.token).await.unwrap();
    let groups: Vec<GroupResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].favorite_count, 1);

    let response = server
        .put_auth(
            &format!("/api/v1/favorites/{}/group", favorite.id),
            &user.token,
            &json!({ "group_id": null }),
        )
        .await
        .unwrap();
    let ungrouped: FavoriteResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(ungrouped.group_id.is_none());
}

#[tokio::test]
async fn test_duplicate_group_name_conflicts() {
    let server = TestServer::start().await.unwrap();
    let user = server.sign_up("alice").await.unwrap();
    create_group(&server, &user.token, "Work").await;

    let response = server
        .post_auth("/api/v1/groups", &user.token, &json!({ "name": " Work " }))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "DUPLICATE_NAME");
}

#[tokio::test]
async fn test_rename_group() {
    let server = TestServer::start().await.unwrap();
    let user = server.sign_up("alice").await.unwrap();
    let group = create_group(&server, &user.token, "Wrok").await;

    let response = server
        .put_auth(
            &format!("/api/v1/groups/{}", group.id),
            &user.token,
            &json!({ "name": "Work", "color": "#336699" }),
        )
        .await
        .unwrap();
    let renamed: GroupResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(renamed.name, "Work");
    assert_eq!(renamed.sort_order, group.sort_order);
}

#[tokio::test]
async fn test_delete_group_moves_members() {
    let server = TestServer::start().await.unwrap();
    let user = server.sign_up("alice").await.unwrap();
    let doomed = create_group(&server, &user.token, "Old").await;
    let target = create_group(&server, &user.token, "New").await;
    let favorite = add(&server, &user.token, &CreateFavoriteRequest::unique()).await;
    server
        .put_auth(
            &format!("/api/v1/favorites/{}/group", favorite.id),
            &user.token,
            &json!({ "group_id": &doomed.id }),
        )
        .await
        .unwrap();

    let response = server
        .delete_auth(
            &format!("/api/v1/groups/{}?move_to={}", doomed.id, target.id),
            &user.token,
        )
        .await
        .unwrap();
    let deleted: DeletedGroupResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(deleted.id, doomed.id);
    assert_eq!(deleted.moved_to.as_deref(), Some(target.id.as_str()));
    assert_eq!(deleted.members_moved, 1);

    let favorites = list(&server, &user.token).await;
    assert_eq!(favorites[0].group_id.as_deref(), Some(target.id.as_str()));
}

#[tokio::test]
async fn test_delete_group_into_itself_is_rejected() {
    let server = TestServer::start().await.unwrap();
    let user = server.sign_up("alice").await.unwrap();
    let group = create_group(&server, &user.token, "Loop").await;

    let response = server
        .delete_auth(
            &format!("/api/v1/groups/{}?move_to={}", group.id, group.id),
            &user.token,
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
    assert_eq!(code, "INVALID_TARGET_GROUP");
}

#[tokio::test]
async fn test_delete_group_falls_back_to_default_group() {
    let server = TestServer::start().await.unwrap();
    let user = server.sign_up("alice").await.unwrap();
    let default = create_group(&server, &user.token, "Default").await;
    let doomed = create_group(&server, &user.token, "Temp").await;
    let favorite = add(&server, &user.token, &CreateFavoriteRequest::unique()).await;
    server
        .put_auth(
            &format!("/api/v1/favorites/{}/group", favorite.id),
            &user.token,
            &json!({ "group_id": &doomed.id }),
        )
        .await
        .unwrap();

    let response = server
        .delete_auth(&format!("/api/v1/groups/{}", doomed.id), &user.token)
        .await
        .unwrap();
    let deleted: DeletedGroupResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(deleted.moved_to.as_deref(), Some(default.id.as_str()));
}

// ============================================================================
// Share Tests
// ============================================================================

#[tokio::test]
async fn test_share_round_trip_through_public_endpoint() {
    let server = TestServer::start().await.unwrap();
    let user = server.sign_up("Alice").await.unwrap();
    let a = add(&server, &user.token, &CreateFavoriteRequest::new("A", "https://a.example")).await;
    let b = add(&server, &user.token, &CreateFavoriteRequest::new("B", "https://b.example")).await;

    let response = server
        .post_auth(
            "/api/v1/shares",
            &user.token,
            &json!({ "title": "Picks", "favorite_ids": [&b.id, &a.id] }),
        )
        .await
        .unwrap();
    let share: ShareResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(share.access_key.len(), 16);
    assert_eq!(
        share.share_url,
        format!("{}/{}", TEST_SHARE_BASE_URL, share.access_key)
    );
    assert!(share.is_public);
    assert!(!share.has_password);
    assert_eq!(share.item_count, 2);

    // No token needed
    let response = server
        .get(&format!("/api/v1/public/shares/{}", share.access_key))
        .await
        .unwrap();
    let public: PublicShareResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(public.title, "Picks");
    assert_eq!(public.owner_name.as_deref(), Some("Alice"));
    assert_eq!(public.view_count, 1);
    let titles: Vec<&str> = public.items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["B", "A"]);
    assert_eq!(public.items[0].position, 1);

    let response = server.get_auth("/api/v1/shares", &user.token).await.unwrap();
    let shares: Vec<ShareResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(shares.len(), 1);
    assert_eq!(shares[0].view_count, 1);
}

#[tokio::test]
async fn test_share_of_foreign_favorite_is_forbidden() {
    let server = TestServer::start().await.unwrap();
    let alice = server.sign_up("alice").await.unwrap();
    let bob = server.sign_up("bob").await.unwrap();
    let foreign = add(&server, &bob.token, &CreateFavoriteRequest::unique()).await;

    let response = server
        .post_auth(
            "/api/v1/shares",
            &alice.token,
            &json!({ "title": "Stolen", "favorite_ids": [&foreign.id] }),
        )
        .await
        .unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(body["error"]["code"], "FORBIDDEN_FAVORITES");
    assert_eq!(body["error"]["details"]["favorite_ids"][0], foreign.id.as_str());
}

#[tokio::test]
async fn test_password_protected_share() {
    let server = TestServer::start().await.unwrap();
    let user = server.sign_up("alice").await.unwrap();
    let favorite = add(&server, &user.token, &CreateFavoriteRequest::unique()).await;

    let response = server
        .post_auth(
            "/api/v1/shares",
            &user.token,
            &json!({ "title": "Secret", "favorite_ids": [&favorite.id], "password": "hunter2" }),
        )
        .await
        .unwrap();
    let share: ShareResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(share.has_password);

    let path = format!("/api/v1/public/shares/{}", share.access_key);
    let code = assert_error(server.get(&path).await.unwrap(), StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
    assert_eq!(code, "INVALID_SHARE_PASSWORD");

    let wrong = server.get(&format!("{path}?password=guess")).await.unwrap();
    assert_status(wrong, StatusCode::UNAUTHORIZED).await.unwrap();

    let right = server.get(&format!("{path}?password=hunter2")).await.unwrap();
    let public: PublicShareResponse = assert_json(right, StatusCode::OK).await.unwrap();
    assert_eq!(public.view_count, 1);
}

#[tokio::test]
async fn test_hidden_share_reads_as_missing() {
    let server = TestServer::start().await.unwrap();
    let user = server.sign_up("alice").await.unwrap();
    let favorite = add(&server, &user.token, &CreateFavoriteRequest::unique()).await;
    let response = server
        .post_auth(
            "/api/v1/shares",
            &user.token,
            &json!({ "title": "Soon", "favorite_ids": [&favorite.id] }),
        )
        .await
        .unwrap();
    let share: ShareResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .put_auth(
            &format!("/api/v1/shares/{}/visibility", share.id),
            &user.token,
            &json!({ "is_public": false }),
        )
        .await
        .unwrap();
    let hidden: ShareResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!hidden.is_public);

    let path = format!("/api/v1/public/shares/{}", share.access_key);
    let code = assert_error(server.get(&path).await.unwrap(), StatusCode::NOT_FOUND)
        .await
        .unwrap();
    assert_eq!(code, "UNKNOWN_SHARE");

    let unknown = server.get("/api/v1/public/shares/NoSuchKey1234567").await.unwrap();
    assert_status(unknown, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_delete_share() {
    let server = TestServer::start().await.unwrap();
    let user = server.sign_up("alice").await.unwrap();
    let favorite = add(&server, &user.token, &CreateFavoriteRequest::unique()).await;
    let response = server
        .post_auth(
            "/api/v1/shares",
            &user.token,
            &json!({ "title": "Gone soon", "favorite_ids": [&favorite.id] }),
        )
        .await
        .unwrap();
    let share: ShareResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let path = format!("/api/v1/shares/{}", share.id);
    let response = server.delete_auth(&path, &user.token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let again = server.delete_auth(&path, &user.token).await.unwrap();
    let code = assert_error(again, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_SHARE");

    let public = server
        .get(&format!("/api/v1/public/shares/{}", share.access_key))
        .await
        .unwrap();
    assert_status(public, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_share_validation_failures() {
    let server = TestServer::start().await.unwrap();
    let user = server.sign_up("alice").await.unwrap();

    let empty = server
        .post_auth(
            "/api/v1/shares",
            &user.token,
            &json!({ "title": "Nothing", "favorite_ids": [] }),
        )
        .await
        .unwrap();
    assert_status(empty, StatusCode::BAD_REQUEST).await.unwrap();

    let favorite = add(&server, &user.token, &CreateFavoriteRequest::unique()).await;
    let untitled = server
        .post_auth(
            "/api/v1/shares",
            &user.token,
            &json!({ "title": "  ", "favorite_ids": [&favorite.id] }),
        )
        .await
        .unwrap();
    assert_status(untitled, StatusCode::BAD_REQUEST).await.unwrap();
}
