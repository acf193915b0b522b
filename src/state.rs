// src/state.rs

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::{
    repository::Repositories,
    services::{CommentService, PostService, UserService},
};

#[derive(Clone)]
pub struct AppState {
    pub users: UserService,
    pub posts: PostService,
    pub comments: CommentService,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        let repositories = Repositories::new(pool);
        Self {
            users: UserService::new(repositories.clone()),
            posts: PostService::new(repositories.clone()),
            comments: CommentService::new(repositories),
        }
    }
}

impl FromRef<AppState> for UserService {
    fn from_ref(state: &AppState) -> Self {
        state.users.clone()
    }
}

impl FromRef<AppState> for PostService {
    fn from_ref(state: &AppState) -> Self {
        state.posts.clone()
    }
}

impl FromRef<AppState> for CommentService {
    fn from_ref(state: &AppState) -> Self {
        state.comments.clone()
    }
}
