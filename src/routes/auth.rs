// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Simulated sign-in and profile routes.
//!
//! There is no real authentication behind these: the app is single-user
//! and the profile lives in the local store. Sign-up creates it, sign-in
//! returns it, sign-out clears it. Passwords are accepted and ignored.

use crate::error::{AppError, Result};
use crate::ids::generate_unique_id;
use crate::models::user::{ProfileUpdate, UserProfile};
use crate::time_utils::now_rfc3339;
use crate::AppState;
use axum::{
    extract::State,
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const MIN_USERNAME_LEN: usize = 3;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/signup", post(sign_up))
        .route("/auth/signin", post(sign_in))
        .route("/auth/signout", post(sign_out))
        .route("/api/profile", get(get_profile))
        .route("/api/profile", put(update_profile))
}

#[derive(Deserialize)]
struct SignUpRequest {
    email: String,
    username: String,
    #[allow(dead_code)]
    password: String,
}

/// Create and persist a fresh profile.
async fn sign_up(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SignUpRequest>,
) -> Result<Json<UserProfile>> {
    if !request.email.contains('@') {
        return Err(AppError::BadRequest("Invalid email address".to_string()));
    }
    if request.username.len() < MIN_USERNAME_LEN {
        return Err(AppError::BadRequest(format!(
            "Username must be at least {} characters",
            MIN_USERNAME_LEN
        )));
    }

    let profile = UserProfile {
        id: generate_unique_id(),
        username: request.username.clone(),
        email: request.email,
        display_name: request.username,
        bio: String::new(),
        profile_image_url: None,
        followers: 0,
        following: 0,
        created_at: now_rfc3339(),
    };

    state.db.set_profile(profile.clone()).await?;
    tracing::info!(username = %profile.username, "Account created");
    Ok(Json(profile))
}

#[derive(Deserialize)]
struct SignInRequest {
    #[allow(dead_code)]
    email: String,
    #[allow(dead_code)]
    password: String,
}

/// Return the stored profile.
async fn sign_in(
    State(state): State<Arc<AppState>>,
    Json(_request): Json<SignInRequest>,
) -> Result<Json<UserProfile>> {
    state
        .db
        .get_profile()
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No account on this device; sign up first".to_string()))
}

#[derive(Serialize)]
pub struct SignOutResponse {
    pub success: bool,
}

/// Clear the stored profile.
async fn sign_out(State(state): State<Arc<AppState>>) -> Result<Json<SignOutResponse>> {
    state.db.clear_profile().await?;
    Ok(Json(SignOutResponse { success: true }))
}

/// The signed-in user's profile.
async fn get_profile(State(state): State<Arc<AppState>>) -> Result<Json<UserProfile>> {
    state
        .db
        .get_profile()
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No profile stored".to_string()))
}

/// Partially update the signed-in user's profile.
async fn update_profile(
    State(state): State<Arc<AppState>>,
    Json(update): Json<ProfileUpdate>,
) -> Result<Json<UserProfile>> {
    let mut profile = state
        .db
        .get_profile()
        .await
        .ok_or_else(|| AppError::PermissionDenied("Not signed in".to_string()))?;

    if let Some(display_name) = update.display_name {
        profile.display_name = display_name;
    }
    if let Some(bio) = update.bio {
        profile.bio = bio;
    }
    if let Some(profile_image_url) = update.profile_image_url {
        profile.profile_image_url = Some(profile_image_url);
    }

    state.db.set_profile(profile.clone()).await?;
    Ok(Json(profile))
}
