//! PostgreSQL implementation of the user repositories.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::user::DEFAULT_ROLE;
use crate::domain::entities::{NewUser, User, UserPatch};
use crate::domain::repositories::{Repository, UserRepository};
use crate::error::AppError;

/// PostgreSQL repository for accounts.
///
/// Implements both the generic CRUD contract and the name lookup used by login.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

const USER_COLUMNS: &str = "id, name, password, email, role, created_at";

#[async_trait]
impl Repository<User> for PgUserRepository {
    async fn list(&self) -> Result<Vec<User>, AppError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users ORDER BY id");
        let rows = sqlx::query_as::<_, User>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        let row = sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row)
    }

    async fn create(&self, new: NewUser) -> Result<User, AppError> {
        let sql = format!(
            r#"
            INSERT INTO users (name, password, email, role)
            VALUES ($1, $2, $3, $4)
            RETURNING {USER_COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, User>(&sql)
            .bind(new.name)
            .bind(new.password)
            .bind(new.email)
            .bind(new.role.unwrap_or_else(|| DEFAULT_ROLE.to_string()))
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row)
    }

    async fn update(&self, id: i64, patch: UserPatch) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE users SET
                name     = COALESCE($2, name),
                password = COALESCE($3, password),
                email    = COALESCE($4, email),
                role     = COALESCE($5, role)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(patch.name)
        .bind(patch.password)
        .bind(patch.email)
        .bind(patch.role)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<User>, AppError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE name = $1");
        let row = sqlx::query_as::<_, User>(&sql)
            .bind(name)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row)
    }
}
