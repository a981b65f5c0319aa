//! PostgreSQL implementation of the supplier repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewSupplier, Supplier, SupplierPatch};
use crate::domain::repositories::Repository;
use crate::error::AppError;

/// PostgreSQL repository for suppliers.
pub struct PgSupplierRepository {
    pool: Arc<PgPool>,
}

impl PgSupplierRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Supplier> for PgSupplierRepository {
    async fn list(&self) -> Result<Vec<Supplier>, AppError> {
        let rows = sqlx::query_as::<_, Supplier>(
            "SELECT id, name, description, phone FROM suppliers ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Supplier>, AppError> {
        let row = sqlx::query_as::<_, Supplier>(
            "SELECT id, name, description, phone FROM suppliers WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn create(&self, new: NewSupplier) -> Result<Supplier, AppError> {
        let row = sqlx::query_as::<_, Supplier>(
            r#"
            INSERT INTO suppliers (name, description, phone)
            VALUES ($1, $2, $3)
            RETURNING id, name, description, phone
            "#,
        )
        .bind(new.name)
        .bind(new.description)
        .bind(new.phone)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn update(&self, id: i64, patch: SupplierPatch) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE suppliers SET
                name        = COALESCE($2, name),
                description = COALESCE($3, description),
                phone       = COALESCE($4, phone)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(patch.name)
        .bind(patch.description)
        .bind(patch.phone)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM suppliers WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }
}
