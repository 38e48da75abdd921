//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, create_entries, create_post, test_pool,
    EnvelopeBody, StatsBody, TestServer, TestUser,
};
use reqwest::StatusCode;
use serde_json::{json, Value};

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["database"], "healthy");
}

// ============================================================================
// Interaction Tests
// ============================================================================

#[tokio::test]
async fn test_like_flow_across_users() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = test_pool().await.unwrap();
    let u1 = TestUser::create(&pool).await.unwrap();
    let u2 = TestUser::create(&pool).await.unwrap();
    let post = create_post(&pool, &u1).await.unwrap();
    let path = format!("/posts/{post}/like");

    let response = server.post_auth(&path, &u1.token).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, json!({ "success": true, "data": { "liked": true, "count": 1 } }));

    let response = server.post_auth(&path, &u2.token).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["data"], json!({ "liked": true, "count": 2 }));

    let response = server.delete_auth(&path, &u1.token).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["data"], json!({ "liked": false, "count": 1 }));

    u2.cleanup(&pool).await.unwrap();
    u1.cleanup(&pool).await.unwrap();
}

#[tokio::test]
async fn test_burn_toggle_is_idempotent() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = test_pool().await.unwrap();
    let user = TestUser::create(&pool).await.unwrap();
    let post = create_post(&pool, &user).await.unwrap();
    let path = format!("/posts/{post}/burn");

    let first: Value = assert_json(server.post_auth(&path, &user.token).await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    let second: Value = assert_json(server.post_auth(&path, &user.token).await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(first, second);
    assert_eq!(second["data"], json!({ "burned": true, "count": 1 }));

    // Off, then on again restores the same count
    let off: Value = assert_json(server.delete_auth(&path, &user.token).await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(off["data"], json!({ "burned": false, "count": 0 }));

    let again: Value = assert_json(server.post_auth(&path, &user.token).await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(again, first);

    user.cleanup(&pool).await.unwrap();
}

#[tokio::test]
async fn test_cookie_token_is_accepted() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = test_pool().await.unwrap();
    let user = TestUser::create(&pool).await.unwrap();
    let post = create_post(&pool, &user).await.unwrap();

    let response = server
        .post_cookie(&format!("/posts/{post}/like"), &user.token)
        .await
        .unwrap();
    let body: EnvelopeBody<Value> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.success);
    assert_eq!(body.data.unwrap()["liked"], true);

    user.cleanup(&pool).await.unwrap();
}

#[tokio::test]
async fn test_unauthenticated_like_is_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = test_pool().await.unwrap();
    let user = TestUser::create(&pool).await.unwrap();
    let post = create_post(&pool, &user).await.unwrap();

    let response = server.post(&format!("/posts/{post}/like")).await.unwrap();
    let body: EnvelopeBody<Value> = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert!(!body.success);
    assert_eq!(body.error.as_deref(), Some("Unauthorized"));

    // Nothing was recorded
    let stats: EnvelopeBody<StatsBody> = assert_json(
        server.get(&format!("/posts/{post}/stats")).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(stats.data.unwrap().likes, 0);

    user.cleanup(&pool).await.unwrap();
}

#[tokio::test]
async fn test_like_unknown_post_is_server_error() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = test_pool().await.unwrap();
    let user = TestUser::create(&pool).await.unwrap();

    // The foreign key rejects the insert; the cause stays server-side
    let response = server
        .post_auth("/posts/does-not-exist/like", &user.token)
        .await
        .unwrap();
    let body: EnvelopeBody<Value> = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();
    assert_eq!(body.error.as_deref(), Some("Failed to like post"));

    user.cleanup(&pool).await.unwrap();
}

// ============================================================================
// Stats Tests
// ============================================================================

#[tokio::test]
async fn test_post_stats() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = test_pool().await.unwrap();
    let creator = TestUser::create(&pool).await.unwrap();
    let post = create_post(&pool, &creator).await.unwrap();

    let mut users = Vec::new();
    for _ in 0..3 {
        users.push(TestUser::create(&pool).await.unwrap());
    }
    for user in &users {
        server
            .post_auth(&format!("/posts/{post}/like"), &user.token)
            .await
            .unwrap();
    }
    server
        .post_auth(&format!("/posts/{post}/burn"), &users[0].token)
        .await
        .unwrap();
    create_entries(&pool, &post, &creator, 2).await.unwrap();

    let response = server.get(&format!("/posts/{post}/stats")).await.unwrap();
    let body: EnvelopeBody<StatsBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(
        body.data.unwrap(),
        StatsBody {
            likes: 3,
            burns: 1,
            entries: 2
        }
    );

    for user in &users {
        user.cleanup(&pool).await.unwrap();
    }
    creator.cleanup(&pool).await.unwrap();
}

#[tokio::test]
async fn test_stats_for_unknown_post() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/posts/no-such-post/stats").await.unwrap();
    let body: EnvelopeBody<StatsBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(
        body.data.unwrap(),
        StatsBody {
            likes: 0,
            burns: 0,
            entries: 0
        }
    );
}
