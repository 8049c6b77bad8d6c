// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Catch log routes: the temporary staging area and the saved collection.

use crate::error::{AppError, Result};
use crate::models::{CatchRecord, CatchUpdate};
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/catches", get(list_catches))
        .route("/api/catches/{id}", get(get_catch))
        .route("/api/catches/{id}", put(update_catch))
        .route("/api/catches/{id}", delete(delete_catch))
        .route("/api/catches/temp/{id}", get(get_temp_catch))
        .route("/api/catches/temp/{id}", delete(discard_temp_catch))
        .route("/api/catches/temp/{id}/save", post(save_catch))
}

#[derive(Serialize)]
pub struct CatchesResponse {
    pub catches: Vec<CatchRecord>,
    pub total: u32,
}

/// All saved catches, newest first.
async fn list_catches(State(state): State<Arc<AppState>>) -> Json<CatchesResponse> {
    let catches = state.catches.list_catches().await;
    Json(CatchesResponse {
        total: catches.len() as u32,
        catches,
    })
}

/// One saved catch.
async fn get_catch(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<CatchRecord>> {
    Ok(Json(state.catches.get_catch(&id).await?))
}

/// Partially update a saved catch.
async fn update_catch(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(update): Json<CatchUpdate>,
) -> Result<Json<CatchRecord>> {
    Ok(Json(state.catches.update_catch(&id, update).await?))
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// Delete a saved catch.
async fn delete_catch(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>> {
    state.catches.delete_catch(&id).await?;
    Ok(Json(DeleteResponse { success: true }))
}

/// A catch still awaiting a save decision.
async fn get_temp_catch(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<CatchRecord>> {
    state
        .catches
        .get_temp_catch(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Temp catch {} not found", id)))
}

/// Keep a staged catch: move it into the saved collection.
async fn save_catch(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<CatchRecord>> {
    Ok(Json(state.catches.save_catch(&id).await?))
}

/// Discard a staged catch.
async fn discard_temp_catch(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>> {
    if !state.catches.discard_temp_catch(&id) {
        return Err(AppError::NotFound(format!("Temp catch {} not found", id)));
    }
    Ok(Json(DeleteResponse { success: true }))
}
