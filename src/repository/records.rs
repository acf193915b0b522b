// src/repository/records.rs

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::models::{
    comment::Comment,
    post::Post,
    user::User,
    validation::ValidationError,
};

/// A row of the 'users' table.
#[derive(Debug, Clone, FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub created_date: DateTime<Utc>,
}

/// A row of the 'posts' table joined with its author.
#[derive(Debug, Clone, FromRow)]
pub struct PostRecord {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub author_id: i64,
    pub author_username: String,
    pub author_created_date: DateTime<Utc>,
}

/// A row of the 'comments' table. The author is resolved separately.
#[derive(Debug, Clone, FromRow)]
pub struct CommentRecord {
    pub id: i64,
    pub post_id: i64,
    pub author_id: i64,
    pub parent_id: Option<i64>,
    pub depth: u32,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<UserRecord> for User {
    type Error = ValidationError;

    fn try_from(value: UserRecord) -> Result<Self, Self::Error> {
        User::from_parts(value.id, value.username, value.created_date)
    }
}

impl TryFrom<PostRecord> for Post {
    type Error = ValidationError;

    fn try_from(value: PostRecord) -> Result<Self, Self::Error> {
        let author = User::from_parts(value.author_id, value.author_username, value.author_created_date)?;
        Post::from_parts(value.id, value.title, value.content, author, value.created_at)
    }
}

impl CommentRecord {
    pub fn into_comment(self, author: User) -> Result<Comment, ValidationError> {
        Comment::from_parts(
            self.id,
            self.post_id,
            author,
            self.parent_id,
            self.depth,
            self.text,
            self.created_at,
        )
    }
}
