// src/models/post.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{
    user::User,
    validation::{ValidationError, non_empty},
};

/// A persisted post with its author attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    id: i64,
    title: String,
    content: String,
    author: User,
    created_at: DateTime<Utc>,
}

impl Post {
    pub(crate) fn from_parts(
        id: i64,
        title: String,
        content: String,
        author: User,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            title: non_empty("title", title)?,
            content: non_empty("content", content)?,
            author,
            created_at,
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn author(&self) -> &User {
        &self.author
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// A validated post that has not been saved yet.
/// The author is borrowed from an already persisted user, so it always exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    title: String,
    content: String,
    author: User,
    created_at: DateTime<Utc>,
}

impl NewPost {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: &User,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            title: non_empty("title", title)?,
            content: non_empty("content", content)?,
            author: author.clone(),
            created_at: Utc::now(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn author(&self) -> &User {
        &self.author
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// DTO for creating a new post.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(max = 255, message = "Title must be at most 255 characters"))]
    pub title: String,

    pub content: String,
}

/// Query parameters naming the acting user.
#[derive(Debug, Deserialize)]
pub struct AuthorParams {
    pub username: String,
}
