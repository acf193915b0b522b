// src/repository/mod.rs

pub mod comments;
pub mod posts;
pub mod records;
pub mod users;

use sqlx::SqlitePool;
use thiserror::Error;

use crate::models::{comment_tree::CommentTreeError, validation::ValidationError};

pub use comments::CommentRepository;
pub use posts::PostRepository;
pub use users::UserRepository;

pub type Result<T, E = RepositoryError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
    #[error("A stored row was invalid: {0}")]
    Data(#[from] ValidationError),
    #[error("Stored comments do not form a tree: {0}")]
    Tree(#[from] CommentTreeError),
    #[error("Comment {comment_id} references missing author {author_id}")]
    MissingAuthor { comment_id: i64, author_id: i64 },
}

/// All repositories over one shared pool.
#[derive(Debug, Clone)]
pub struct Repositories {
    pub users: UserRepository,
    pub posts: PostRepository,
    pub comments: CommentRepository,
}

impl Repositories {
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            posts: PostRepository::new(pool.clone()),
            comments: CommentRepository::new(pool),
        }
    }
}
