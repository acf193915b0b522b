// src/repository/comments.rs

use std::collections::{BTreeSet, HashMap};

use sqlx::SqlitePool;

use super::{RepositoryError, Result, UserRepository, records::CommentRecord};
use crate::models::{
    comment::{Comment, NewComment},
    comment_tree::CommentTree,
    user::User,
};

#[derive(Debug, Clone)]
pub struct CommentRepository {
    pool: SqlitePool,
    users: UserRepository,
}

impl CommentRepository {
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        let users = UserRepository::new(pool.clone());
        Self { pool, users }
    }

    pub async fn save(&self, comment: &NewComment) -> Result<Comment> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO comments (post_id, author_id, parent_id, depth, text, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(comment.post_id())
        .bind(comment.author().id())
        .bind(comment.parent_id())
        .bind(comment.depth())
        .bind(comment.text())
        .bind(comment.created_at())
        .fetch_one(&self.pool)
        .await?;

        Ok(Comment::from_parts(
            id,
            comment.post_id(),
            comment.author().clone(),
            comment.parent_id(),
            comment.depth(),
            comment.text().to_owned(),
            comment.created_at(),
        )?)
    }

    /// A single comment without its replies.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Comment>> {
        let Some(record) = sqlx::query_as::<_, CommentRecord>(
            r#"
            SELECT id, post_id, author_id, parent_id, depth, text, created_at
            FROM comments
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        else {
            return Ok(None);
        };

        let author = self
            .users
            .find_by_id(record.author_id)
            .await?
            .ok_or(RepositoryError::MissingAuthor {
                comment_id: record.id,
                author_id: record.author_id,
            })?;

        Ok(Some(record.into_comment(author)?))
    }

    /// Reconstructs the reply tree of a post.
    ///
    /// Rows come back in id order, which is creation order, so every parent
    /// is seen before its replies. Authors are fetched in one batch.
    pub async fn find_by_post(&self, post_id: i64) -> Result<CommentTree> {
        let records = sqlx::query_as::<_, CommentRecord>(
            r#"
            SELECT id, post_id, author_id, parent_id, depth, text, created_at
            FROM comments
            WHERE post_id = ?
            ORDER BY id ASC
            "#,
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await?;

        if records.is_empty() {
            return Ok(CommentTree::default());
        }

        let author_ids: Vec<i64> = records
            .iter()
            .map(|record| record.author_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let authors: HashMap<i64, User> = self.users.find_by_ids(&author_ids).await?;

        let comments = records
            .into_iter()
            .map(|record| -> Result<Comment> {
                let author = authors
                    .get(&record.author_id)
                    .cloned()
                    .ok_or(RepositoryError::MissingAuthor {
                        comment_id: record.id,
                        author_id: record.author_id,
                    })?;
                Ok(record.into_comment(author)?)
            })
            .collect::<Result<Vec<_>>>()?;

        let tree = CommentTree::from_ordered(comments)?;
        tracing::debug!(
            post_id,
            comments = tree.len(),
            roots = tree.roots().len(),
            "Rebuilt comment tree"
        );

        Ok(tree)
    }
}
