// src/models/user.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validation::{ValidationError, non_empty};

/// A persisted forum user.
/// Only obtainable from the repository, so every instance has a storage id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    id: i64,

    /// Not unique: two users may share a name.
    username: String,

    created_date: DateTime<Utc>,
}

impl User {
    pub(crate) fn from_parts(
        id: i64,
        username: String,
        created_date: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            username: non_empty("username", username)?,
            created_date,
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn created_date(&self) -> DateTime<Utc> {
        self.created_date
    }
}

/// A validated user that has not been saved yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    username: String,
    created_date: DateTime<Utc>,
}

impl NewUser {
    pub fn new(username: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            username: non_empty("username", username)?,
            created_date: Utc::now(),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn created_date(&self) -> DateTime<Utc> {
        self.created_date
    }
}

/// DTO for creating a new user.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(max = 255, message = "Username must be at most 255 characters"))]
    pub username: String,
}
