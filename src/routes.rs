// src/routes.rs

use axum::{
    Router,
    http::{Method, header},
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{comments, meta, posts, users},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Merges all sub-routers (users, posts, comments) under `/api`.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (services over the database pool).
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let user_routes = Router::new()
        .route("/", get(users::list_users).post(users::create_user))
        .route("/{id}", get(users::get_user));

    let post_routes = Router::new()
        .route("/", get(posts::list_posts).post(posts::create_post))
        .route("/{id}", get(posts::get_post))
        .route("/author/{username}", get(posts::list_posts_by_author));

    let comment_routes = Router::new()
        .route(
            "/post/{post_id}",
            get(comments::list_comments).post(comments::create_comment),
        )
        .route("/{comment_id}", get(comments::get_comment))
        .route("/{comment_id}/reply", post(comments::reply_to_comment));

    Router::new()
        .route("/", get(meta::root))
        .route("/health", get(meta::health_check))
        .nest("/api/users", user_routes)
        .nest("/api/posts", post_routes)
        .nest("/api/comments", comment_routes)
        .fallback(meta::fallback)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
