// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Social feed, comments, and leaderboard routes.

use crate::error::{AppError, Result};
use crate::models::user::UserProfile;
use crate::models::{Comment, LeaderboardEntry, Post};
use crate::services::social::NewPost;
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const MAX_CAPTION_LEN: usize = 500;
const MAX_COMMENT_LEN: usize = 500;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/feed", get(get_feed))
        .route("/api/posts", post(create_post))
        .route("/api/posts/{id}", get(get_post))
        .route("/api/posts/{id}", delete(delete_post))
        .route("/api/posts/{id}/like", post(like_post))
        .route("/api/posts/{id}/like", delete(unlike_post))
        .route("/api/posts/{id}/comments", get(get_comments))
        .route("/api/posts/{id}/comments", post(add_comment))
        .route("/api/leaderboard", get(get_leaderboard))
}

/// The signed-in profile, required for any action that authors content.
async fn require_profile(state: &AppState) -> Result<UserProfile> {
    state
        .db
        .get_profile()
        .await
        .ok_or_else(|| AppError::PermissionDenied("Not signed in".to_string()))
}

#[derive(Serialize)]
pub struct FeedResponse {
    pub posts: Vec<Post>,
}

/// The feed, newest first.
async fn get_feed(State(state): State<Arc<AppState>>) -> Json<FeedResponse> {
    Json(FeedResponse {
        posts: state.social.feed().await,
    })
}

#[derive(Deserialize)]
struct CreatePostRequest {
    catch_id: String,
    caption: String,
    image_url: String,
}

/// Share a saved catch to the feed.
async fn create_post(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreatePostRequest>,
) -> Result<Json<Post>> {
    let profile = require_profile(&state).await?;

    if request.caption.len() > MAX_CAPTION_LEN {
        return Err(AppError::BadRequest(format!(
            "Caption longer than {} characters",
            MAX_CAPTION_LEN
        )));
    }
    // A post shows off a saved catch; staged ones can still be discarded.
    if state.db.get_catch(&request.catch_id).await.is_none() {
        return Err(AppError::BadRequest(format!(
            "Catch {} is not in the saved collection",
            request.catch_id
        )));
    }

    let post = state
        .social
        .create_post(
            &profile,
            NewPost {
                catch_id: request.catch_id,
                caption: request.caption,
                image_url: request.image_url,
            },
        )
        .await;

    Ok(Json(post))
}

/// One post.
async fn get_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Post>> {
    Ok(Json(state.social.get_post(&id).await?))
}

#[derive(Serialize)]
pub struct DeletedResponse {
    pub success: bool,
}

/// Delete one of your own posts.
async fn delete_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponse>> {
    let profile = require_profile(&state).await?;
    let post = state.social.get_post(&id).await?;
    if post.user_id != profile.id {
        return Err(AppError::PermissionDenied(
            "Cannot delete someone else's post".to_string(),
        ));
    }

    state.social.delete_post(&id).await?;
    Ok(Json(DeletedResponse { success: true }))
}

/// Like a post.
async fn like_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Post>> {
    Ok(Json(state.social.like_post(&id).await?))
}

/// Remove a like.
async fn unlike_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Post>> {
    Ok(Json(state.social.unlike_post(&id).await?))
}

#[derive(Serialize)]
pub struct CommentsResponse {
    pub comments: Vec<Comment>,
}

/// Comments on a post, oldest first.
async fn get_comments(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<CommentsResponse>> {
    // Surface a 404 for a missing post rather than an empty list.
    state.social.get_post(&id).await?;
    Ok(Json(CommentsResponse {
        comments: state.social.comments_for(&id).await,
    }))
}

#[derive(Deserialize)]
struct AddCommentRequest {
    text: String,
}

/// Comment on a post.
async fn add_comment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(request): Json<AddCommentRequest>,
) -> Result<Json<Comment>> {
    let profile = require_profile(&state).await?;

    if request.text.trim().is_empty() {
        return Err(AppError::BadRequest("Comment text is empty".to_string()));
    }
    if request.text.len() > MAX_COMMENT_LEN {
        return Err(AppError::BadRequest(format!(
            "Comment longer than {} characters",
            MAX_COMMENT_LEN
        )));
    }

    Ok(Json(
        state.social.add_comment(&profile, &id, request.text).await?,
    ))
}

#[derive(Serialize)]
pub struct LeaderboardResponse {
    pub entries: Vec<LeaderboardEntry>,
}

/// The monthly leaderboard.
async fn get_leaderboard(State(state): State<Arc<AppState>>) -> Json<LeaderboardResponse> {
    Json(LeaderboardResponse {
        entries: state.social.leaderboard().await,
    })
}
