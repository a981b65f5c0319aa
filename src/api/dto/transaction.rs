//! DTOs for transaction endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionItem {
    pub id: i64,
    pub user_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    pub total_price: f64,
    pub date: DateTime<Utc>,
}

/// Request to record a sale. `date` is an RFC 3339 timestamp.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateTransactionRequest {
    pub user_id: i64,
    pub product_id: i64,
    #[validate(range(min = 1, message = "quantity must be positive"))]
    pub quantity: i32,
    #[validate(range(min = 0.0, message = "totalPrice must not be negative"))]
    pub total_price: f64,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateTransactionRequest {
    pub user_id: Option<i64>,
    pub product_id: Option<i64>,
    #[validate(range(min = 1, message = "quantity must be positive"))]
    pub quantity: Option<i32>,
    #[validate(range(min = 0.0, message = "totalPrice must not be negative"))]
    pub total_price: Option<f64>,
    pub date: Option<DateTime<Utc>>,
}
