// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Social feed, comment, and leaderboard route tests.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use fishlog::models::{CatchLocation, CatchRecord};
use tower::ServiceExt;

mod common;

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Sign up over HTTP so authored actions have a profile behind them.
async fn sign_up(app: &axum::Router) {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/auth/signup",
            serde_json::json!({
                "email": "joe@example.com",
                "username": "fisherman_joe",
                "password": "hunter2",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

/// Put a saved catch in the store for posts to reference.
async fn seed_saved_catch(state: &fishlog::AppState, id: &str) {
    state
        .db
        .insert_catch(CatchRecord {
            id: id.to_string(),
            fish_id: None,
            fish_name: Some("Walleye".to_string()),
            location: CatchLocation::unknown(),
            date: "2025-06-11T09:15:00Z".to_string(),
            image_uri: "file:///photos/walleye.jpg".to_string(),
            notes: String::new(),
            confidence: Some(88),
            improvement_tips: None,
        })
        .await
        .expect("seed catch");
}

#[tokio::test]
async fn test_feed_is_seeded_and_newest_first() {
    let (app, _state) = common::create_test_app(common::UNREACHABLE_RECOGNITION_URL);

    let response = app.oneshot(get_request("/api/feed")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    let posts = body["posts"].as_array().expect("posts");
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0]["id"], "post-2");

    let dates: Vec<&str> = posts
        .iter()
        .map(|p| p["created_at"].as_str().unwrap())
        .collect();
    assert!(dates.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn test_create_post_requires_profile() {
    let (app, _state) = common::create_test_app(common::UNREACHABLE_RECOGNITION_URL);

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/posts",
            serde_json::json!({
                "catch_id": "catch-1",
                "caption": "Look at this one",
                "image_url": "https://images.example.com/c.jpg",
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_create_post_requires_saved_catch() {
    let (app, _state) = common::create_test_app(common::UNREACHABLE_RECOGNITION_URL);
    sign_up(&app).await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/posts",
            serde_json::json!({
                "catch_id": "never-saved",
                "caption": "Look at this one",
                "image_url": "https://images.example.com/c.jpg",
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_post_lands_at_top_of_feed() {
    let (app, state) = common::create_test_app(common::UNREACHABLE_RECOGNITION_URL);
    sign_up(&app).await;
    seed_saved_catch(&state, "catch-77").await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/posts",
            serde_json::json!({
                "catch_id": "catch-77",
                "caption": "Personal best walleye!",
                "image_url": "https://images.example.com/walleye.jpg",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let post = common::body_json(response).await;
    assert_eq!(post["catch_id"], "catch-77");
    assert_eq!(post["likes"], 0);

    let response = app.oneshot(get_request("/api/feed")).await.unwrap();
    let body = common::body_json(response).await;
    assert_eq!(body["posts"][0]["id"], post["id"]);
}

#[tokio::test]
async fn test_like_and_unlike_post() {
    let (app, _state) = common::create_test_app(common::UNREACHABLE_RECOGNITION_URL);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/posts/post-1/like",
            serde_json::json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["likes"], 43);
    assert_eq!(body["is_liked"], true);

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/posts/post-1/like")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = common::body_json(response).await;
    assert_eq!(body["likes"], 42);
    assert_eq!(body["is_liked"], false);
}

#[tokio::test]
async fn test_missing_post_is_not_found() {
    let (app, _state) = common::create_test_app(common::UNREACHABLE_RECOGNITION_URL);

    let response = app
        .clone()
        .oneshot(get_request("/api/posts/no-such-post"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(get_request("/api/posts/no-such-post/comments"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_comments_flow() {
    let (app, _state) = common::create_test_app(common::UNREACHABLE_RECOGNITION_URL);
    sign_up(&app).await;

    let response = app
        .clone()
        .oneshot(get_request("/api/posts/post-1/comments"))
        .await
        .unwrap();
    let body = common::body_json(response).await;
    assert_eq!(body["comments"].as_array().unwrap().len(), 2);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/posts/post-1/comments",
            serde_json::json!({ "text": "What a catch!" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let comment = common::body_json(response).await;
    assert_eq!(comment["text"], "What a catch!");
    assert_eq!(comment["user_display_name"], "fisherman_joe");

    let response = app
        .clone()
        .oneshot(get_request("/api/posts/post-1/comments"))
        .await
        .unwrap();
    let body = common::body_json(response).await;
    assert_eq!(body["comments"].as_array().unwrap().len(), 3);

    // Empty comments are rejected.
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/posts/post-1/comments",
            serde_json::json!({ "text": "   " }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_cannot_delete_someone_elses_post() {
    let (app, _state) = common::create_test_app(common::UNREACHABLE_RECOGNITION_URL);
    sign_up(&app).await;

    // post-1 belongs to a demo user, not the signed-in profile.
    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/posts/post-1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_delete_own_post() {
    let (app, state) = common::create_test_app(common::UNREACHABLE_RECOGNITION_URL);
    sign_up(&app).await;
    seed_saved_catch(&state, "catch-9").await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/posts",
            serde_json::json!({
                "catch_id": "catch-9",
                "caption": "mine",
                "image_url": "https://images.example.com/mine.jpg",
            }),
        ))
        .await
        .unwrap();
    let post = common::body_json(response).await;
    let post_id = post["id"].as_str().unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(&format!("/api/posts/{}", post_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(get_request(&format!("/api/posts/{}", post_id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_leaderboard_is_ranked() {
    let (app, _state) = common::create_test_app(common::UNREACHABLE_RECOGNITION_URL);

    let response = app.oneshot(get_request("/api/leaderboard")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    let entries = body["entries"].as_array().expect("entries");
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0]["rank"], 1);
    assert_eq!(entries[0]["username"], "FishMaster2024");

    let scores: Vec<u64> = entries
        .iter()
        .map(|e| e["score"].as_u64().unwrap())
        .collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
}
