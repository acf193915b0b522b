// src/services/user_service.rs

use crate::{
    error::AppError,
    models::user::{NewUser, User},
    repository::Repositories,
};

#[derive(Debug, Clone)]
pub struct UserService {
    repositories: Repositories,
}

impl UserService {
    #[must_use]
    pub fn new(repositories: Repositories) -> Self {
        Self { repositories }
    }

    /// Validates and stores a new user.
    pub async fn create_user(&self, username: &str) -> Result<User, AppError> {
        let user = NewUser::new(username)?;
        let user = self.repositories.users.save(&user).await?;
        tracing::info!(user_id = user.id(), username = user.username(), "Created user");
        Ok(user)
    }

    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        Ok(self.repositories.users.find_all().await?)
    }

    pub async fn get_user(&self, id: i64) -> Result<User, AppError> {
        tracing::debug!(user_id = id, "Looking up user");
        self.repositories
            .users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {id} not found")))
    }

    /// Resolves a username, treating absence as an error.
    pub async fn require_by_username(&self, username: &str) -> Result<User, AppError> {
        self.repositories
            .users
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::user_not_found(username))
    }
}
