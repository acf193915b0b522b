// src/repository/users.rs

use std::collections::HashMap;

use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use super::{RepositoryError, Result, records::UserRecord};
use crate::models::user::{NewUser, User};

/// Stays well below SQLite's limit on bound parameters per statement.
const IDS_PER_QUERY: usize = 500;

#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserts a new row; the database assigns the id.
    pub async fn save(&self, user: &NewUser) -> Result<User> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (username, created_date)
            VALUES (?, ?)
            RETURNING id, username, created_date
            "#,
        )
        .bind(user.username())
        .bind(user.created_date())
        .fetch_one(&self.pool)
        .await?;

        Ok(User::try_from(record)?)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        let record = sqlx::query_as::<_, UserRecord>(
            "SELECT id, username, created_date FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record.map(User::try_from).transpose()?)
    }

    /// Usernames are not unique; the earliest matching user wins.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, username, created_date
            FROM users
            WHERE username = ?
            ORDER BY id ASC
            LIMIT 1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record.map(User::try_from).transpose()?)
    }

    pub async fn find_all(&self) -> Result<Vec<User>> {
        let records = sqlx::query_as::<_, UserRecord>(
            "SELECT id, username, created_date FROM users ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        records
            .into_iter()
            .map(|record| User::try_from(record).map_err(RepositoryError::from))
            .collect()
    }

    /// Loads several users, binding at most `IDS_PER_QUERY` ids per query.
    pub async fn find_by_ids(&self, ids: &[i64]) -> Result<HashMap<i64, User>> {
        let mut users = HashMap::with_capacity(ids.len());

        for chunk in ids.chunks(IDS_PER_QUERY) {
            let mut builder: QueryBuilder<Sqlite> =
                QueryBuilder::new("SELECT id, username, created_date FROM users WHERE id IN (");
            let mut separated = builder.separated(", ");
            for id in chunk {
                separated.push_bind(*id);
            }
            separated.push_unseparated(")");

            let records = builder
                .build_query_as::<UserRecord>()
                .fetch_all(&self.pool)
                .await?;

            for record in records {
                let user = User::try_from(record)?;
                users.insert(user.id(), user);
            }
        }

        Ok(users)
    }
}
