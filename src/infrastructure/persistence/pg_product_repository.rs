//! PostgreSQL implementation of the product repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewProduct, Product, ProductPatch};
use crate::domain::repositories::Repository;
use crate::error::AppError;

/// PostgreSQL repository for products.
///
/// `category_id` and `supplier_id` are foreign keys with `ON DELETE RESTRICT`;
/// a violation surfaces as [`AppError::Conflict`].
pub struct PgProductRepository {
    pool: Arc<PgPool>,
}

impl PgProductRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

const PRODUCT_COLUMNS: &str = "id, name, description, price, stock, category_id, supplier_id";

#[async_trait]
impl Repository<Product> for PgProductRepository {
    async fn list(&self) -> Result<Vec<Product>, AppError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id");
        let rows = sqlx::query_as::<_, Product>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row)
    }

    async fn create(&self, new: NewProduct) -> Result<Product, AppError> {
        let sql = format!(
            r#"
            INSERT INTO products (name, description, price, stock, category_id, supplier_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {PRODUCT_COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(new.name)
            .bind(new.description)
            .bind(new.price)
            .bind(new.stock)
            .bind(new.category_id)
            .bind(new.supplier_id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row)
    }

    async fn update(&self, id: i64, patch: ProductPatch) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE products SET
                name        = COALESCE($2, name),
                description = COALESCE($3, description),
                price       = COALESCE($4, price),
                stock       = COALESCE($5, stock),
                category_id = COALESCE($6, category_id),
                supplier_id = COALESCE($7, supplier_id)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(patch.name)
        .bind(patch.description)
        .bind(patch.price)
        .bind(patch.stock)
        .bind(patch.category_id)
        .bind(patch.supplier_id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }
}
