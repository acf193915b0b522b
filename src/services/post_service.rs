// src/services/post_service.rs

use crate::{
    error::AppError,
    models::post::{NewPost, Post},
    repository::Repositories,
};

use super::UserService;

#[derive(Debug, Clone)]
pub struct PostService {
    repositories: Repositories,
    users: UserService,
}

impl PostService {
    #[must_use]
    pub fn new(repositories: Repositories) -> Self {
        let users = UserService::new(repositories.clone());
        Self { repositories, users }
    }

    /// Publishes a post on behalf of an existing user.
    /// Nothing is stored when the author is unknown or a field is empty.
    pub async fn create_post(&self, username: &str, title: &str, content: &str) -> Result<Post, AppError> {
        let author = self.users.require_by_username(username).await?;
        let post = NewPost::new(title, content, &author)?;
        let post = self.repositories.posts.save(&post).await?;
        tracing::info!(post_id = post.id(), author_id = author.id(), "Created post");
        Ok(post)
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, AppError> {
        Ok(self.repositories.posts.find_all().await?)
    }

    pub async fn get_post(&self, id: i64) -> Result<Post, AppError> {
        tracing::debug!(post_id = id, "Looking up post");
        self.repositories
            .posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Post {id} not found")))
    }

    pub async fn posts_by_author(&self, username: &str) -> Result<Vec<Post>, AppError> {
        let author = self.users.require_by_username(username).await?;
        Ok(self.repositories.posts.find_by_author(author.id()).await?)
    }
}
