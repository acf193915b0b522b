// src/services/comment_service.rs

use crate::{
    error::AppError,
    models::{
        comment::{Comment, NewComment},
        comment_tree::CommentTree,
    },
    repository::Repositories,
};

use super::{PostService, UserService};

#[derive(Debug, Clone)]
pub struct CommentService {
    repositories: Repositories,
    users: UserService,
    posts: PostService,
}

impl CommentService {
    #[must_use]
    pub fn new(repositories: Repositories) -> Self {
        let users = UserService::new(repositories.clone());
        let posts = PostService::new(repositories.clone());
        Self {
            repositories,
            users,
            posts,
        }
    }

    /// Adds a root comment to a post.
    pub async fn add_comment_to_post(&self, post_id: i64, username: &str, text: &str) -> Result<Comment, AppError> {
        let post = self.posts.get_post(post_id).await?;
        let author = self.users.require_by_username(username).await?;
        let comment = NewComment::for_post(&post, &author, text)?;
        let comment = self.repositories.comments.save(&comment).await?;
        tracing::info!(comment_id = comment.id(), post_id, "Created comment");
        Ok(comment)
    }

    /// Replies to an existing comment. The reply lands on the parent's post.
    pub async fn reply_to_comment(&self, comment_id: i64, username: &str, text: &str) -> Result<Comment, AppError> {
        let parent = self.get_comment(comment_id).await?;
        let author = self.users.require_by_username(username).await?;
        let reply = NewComment::reply_to(&parent, &author, text)?;
        let reply = self.repositories.comments.save(&reply).await?;
        tracing::info!(
            comment_id = reply.id(),
            parent_id = comment_id,
            post_id = reply.post_id(),
            "Created reply"
        );
        Ok(reply)
    }

    pub async fn get_comments_for_post(&self, post_id: i64) -> Result<CommentTree, AppError> {
        let post = self.posts.get_post(post_id).await?;
        Ok(self.repositories.comments.find_by_post(post.id()).await?)
    }

    pub async fn get_comment(&self, id: i64) -> Result<Comment, AppError> {
        self.repositories
            .comments
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Comment {id} not found")))
    }
}
