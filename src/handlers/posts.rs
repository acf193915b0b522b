// src/handlers/posts.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use validator::Validate;

use crate::{
    error::AppError,
    extract::{Json, Path, Query},
    models::post::{AuthorParams, CreatePostRequest},
    services::PostService,
};

/// Create a new post.
/// The author is named by the `username` query parameter and must exist.
pub async fn create_post(
    State(posts): State<PostService>,
    Query(params): Query<AuthorParams>,
    Json(payload): Json<CreatePostRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let post = posts
        .create_post(&params.username, &payload.title, &payload.content)
        .await?;

    Ok((StatusCode::CREATED, Json(post)))
}

/// List all posts, oldest first.
pub async fn list_posts(State(posts): State<PostService>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(posts.list_posts().await?))
}

/// Get a single post by ID.
pub async fn get_post(
    State(posts): State<PostService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(posts.get_post(id).await?))
}

/// List the posts of one author.
pub async fn list_posts_by_author(
    State(posts): State<PostService>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(posts.posts_by_author(&username).await?))
}
