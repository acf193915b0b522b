// src/repository/posts.rs

use sqlx::SqlitePool;

use super::{RepositoryError, Result, records::PostRecord};
use crate::models::post::{NewPost, Post};

/// Columns of a post joined with its author, in `PostRecord` order.
const POST_COLUMNS: &str = r#"
    p.id, p.title, p.content, p.created_at,
    u.id AS author_id, u.username AS author_username, u.created_date AS author_created_date
"#;

#[derive(Debug, Clone)]
pub struct PostRepository {
    pool: SqlitePool,
}

impl PostRepository {
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn save(&self, post: &NewPost) -> Result<Post> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO posts (title, content, author_id, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(post.title())
        .bind(post.content())
        .bind(post.author().id())
        .bind(post.created_at())
        .fetch_one(&self.pool)
        .await?;

        Ok(Post::from_parts(
            id,
            post.title().to_owned(),
            post.content().to_owned(),
            post.author().clone(),
            post.created_at(),
        )?)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Post>> {
        let record = sqlx::query_as::<_, PostRecord>(&format!(
            "SELECT {POST_COLUMNS} FROM posts p JOIN users u ON p.author_id = u.id WHERE p.id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record.map(Post::try_from).transpose()?)
    }

    pub async fn find_all(&self) -> Result<Vec<Post>> {
        let records = sqlx::query_as::<_, PostRecord>(&format!(
            "SELECT {POST_COLUMNS} FROM posts p JOIN users u ON p.author_id = u.id ORDER BY p.id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        into_posts(records)
    }

    pub async fn find_by_author(&self, author_id: i64) -> Result<Vec<Post>> {
        let records = sqlx::query_as::<_, PostRecord>(&format!(
            "SELECT {POST_COLUMNS} FROM posts p JOIN users u ON p.author_id = u.id \
             WHERE p.author_id = ? ORDER BY p.id ASC"
        ))
        .bind(author_id)
        .fetch_all(&self.pool)
        .await?;

        into_posts(records)
    }
}

fn into_posts(records: Vec<PostRecord>) -> Result<Vec<Post>> {
    records
        .into_iter()
        .map(|record| Post::try_from(record).map_err(RepositoryError::from))
        .collect()
}
