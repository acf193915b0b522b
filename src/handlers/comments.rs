// src/handlers/comments.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    error::AppError,
    extract::{Json, Path, Query},
    models::{comment::CreateCommentRequest, post::AuthorParams},
    services::CommentService,
};

/// Create a root comment on a post.
pub async fn create_comment(
    State(comments): State<CommentService>,
    Path(post_id): Path<i64>,
    Query(params): Query<AuthorParams>,
    Json(payload): Json<CreateCommentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let comment = comments
        .add_comment_to_post(post_id, &params.username, &payload.text)
        .await?;

    Ok((StatusCode::CREATED, Json(comment)))
}

/// Reply to an existing comment.
pub async fn reply_to_comment(
    State(comments): State<CommentService>,
    Path(comment_id): Path<i64>,
    Query(params): Query<AuthorParams>,
    Json(payload): Json<CreateCommentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let reply = comments
        .reply_to_comment(comment_id, &params.username, &payload.text)
        .await?;

    Ok((StatusCode::CREATED, Json(reply)))
}

/// List the comment tree of a post.
/// Only root comments are returned at the top level; replies are nested.
pub async fn list_comments(
    State(comments): State<CommentService>,
    Path(post_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let tree = comments.get_comments_for_post(post_id).await?;

    Ok(Json(tree))
}

/// Get a single comment by ID, without its replies.
pub async fn get_comment(
    State(comments): State<CommentService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(comments.get_comment(id).await?))
}
