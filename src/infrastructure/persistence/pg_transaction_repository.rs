//! PostgreSQL implementation of the transaction repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewTransaction, Transaction, TransactionPatch};
use crate::domain::repositories::Repository;
use crate::error::AppError;

/// PostgreSQL repository for sales transactions.
pub struct PgTransactionRepository {
    pool: Arc<PgPool>,
}

impl PgTransactionRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

const TRANSACTION_COLUMNS: &str = "id, user_id, product_id, quantity, total_price, date";

#[async_trait]
impl Repository<Transaction> for PgTransactionRepository {
    async fn list(&self) -> Result<Vec<Transaction>, AppError> {
        let sql = format!("SELECT {TRANSACTION_COLUMNS} FROM transactions ORDER BY id");
        let rows = sqlx::query_as::<_, Transaction>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Transaction>, AppError> {
        let sql = format!("SELECT {TRANSACTION_COLUMNS} FROM transactions WHERE id = $1");
        let row = sqlx::query_as::<_, Transaction>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row)
    }

    async fn create(&self, new: NewTransaction) -> Result<Transaction, AppError> {
        let sql = format!(
            r#"
            INSERT INTO transactions (user_id, product_id, quantity, total_price, date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {TRANSACTION_COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, Transaction>(&sql)
            .bind(new.user_id)
            .bind(new.product_id)
            .bind(new.quantity)
            .bind(new.total_price)
            .bind(new.date)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row)
    }

    async fn update(&self, id: i64, patch: TransactionPatch) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE transactions SET
                user_id     = COALESCE($2, user_id),
                product_id  = COALESCE($3, product_id),
                quantity    = COALESCE($4, quantity),
                total_price = COALESCE($5, total_price),
                date        = COALESCE($6, date)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(patch.user_id)
        .bind(patch.product_id)
        .bind(patch.quantity)
        .bind(patch.total_price)
        .bind(patch.date)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM transactions WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }
}
