//! Domain entity representing a sale.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Entity;

/// A sale of `quantity` units of a product, recorded by a user.
///
/// `quantity` is always positive. `total_price` is supplied by the client and
/// stored as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Transaction {
    pub id: i64,
    pub user_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    pub total_price: f64,
    pub date: DateTime<Utc>,
}

/// Input data for recording a new transaction.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub user_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    pub total_price: f64,
    pub date: DateTime<Utc>,
}

/// Partial update for a transaction.
#[derive(Debug, Clone, Default)]
pub struct TransactionPatch {
    pub user_id: Option<i64>,
    pub product_id: Option<i64>,
    pub quantity: Option<i32>,
    pub total_price: Option<f64>,
    pub date: Option<DateTime<Utc>>,
}

impl Entity for Transaction {
    type Id = i64;
    type New = NewTransaction;
    type Patch = TransactionPatch;

    const NAME: &'static str = "transaction";
    const COLLECTION: &'static str = "transactions";

    fn id(&self) -> i64 {
        self.id
    }
}
