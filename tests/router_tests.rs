// tests/router_tests.rs

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use commenthub::{create_router, db, state::AppState};
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

async fn app() -> Router {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory SQLite");
    db::migrate(&pool).await.expect("Failed to migrate database");

    create_router(AppState::new(pool))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn unknown_path_is_404() {
    let response = app()
        .await
        .oneshot(
            Request::builder()
                .uri("/random_path_that_does_not_exist")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("/random_path_that_does_not_exist"));
}

#[tokio::test]
async fn root_describes_the_api() {
    let response = app()
        .await
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["api"], "/api");
}

#[tokio::test]
async fn empty_comment_listing_is_an_empty_array() {
    let app = app().await;

    let create_user = Request::builder()
        .method("POST")
        .uri("/api/users")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"username":"alice"}"#))
        .unwrap();
    let response = app.clone().oneshot(create_user).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let create_post = Request::builder()
        .method("POST")
        .uri("/api/posts?username=alice")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"title":"Quiet","content":"Nobody replies"}"#))
        .unwrap();
    let response = app.clone().oneshot(create_post).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let post_id = body_json(response).await["id"].as_i64().unwrap();

    let listing = Request::builder()
        .uri(format!("/api/comments/post/{post_id}"))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(listing).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

#[tokio::test]
async fn missing_username_query_is_rejected() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/posts")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"title":"T","content":"C"}"#))
        .unwrap();

    let response = app().await.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["error"].is_string());
}

#[tokio::test]
async fn non_integer_id_is_rejected_as_json() {
    let response = app()
        .await
        .oneshot(Request::builder().uri("/api/users/abc").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    assert!(body_json(response).await["error"].is_string());
}

#[tokio::test]
async fn malformed_json_body_is_rejected_as_json() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/users")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"username": "#))
        .unwrap();

    let response = app().await.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["error"].is_string());
}

#[tokio::test]
async fn missing_content_type_is_rejected_as_json() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/users")
        .body(Body::from(r#"{"username":"alice"}"#))
        .unwrap();

    let response = app().await.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(body_json(response).await["error"].is_string());
}
