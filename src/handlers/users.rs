// src/handlers/users.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use validator::Validate;

use crate::{
    error::AppError,
    extract::{Json, Path},
    models::user::CreateUserRequest,
    services::UserService,
};

/// Create a new user.
pub async fn create_user(
    State(users): State<UserService>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let user = users.create_user(&payload.username).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// List all users in creation order.
pub async fn list_users(State(users): State<UserService>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(users.list_users().await?))
}

/// Get a single user by ID.
pub async fn get_user(
    State(users): State<UserService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(users.get_user(id).await?))
}
