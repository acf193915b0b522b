// src/handlers/meta.rs

use axum::{Json, http::Uri, response::IntoResponse};
use serde_json::json;

use crate::error::AppError;

pub async fn root() -> impl IntoResponse {
    Json(json!({
        "message": "Welcome to the CommentHub API",
        "api": "/api",
    }))
}

pub async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "healthy" }))
}

/// Unknown routes answer with the same JSON error body as the API.
pub async fn fallback(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}
