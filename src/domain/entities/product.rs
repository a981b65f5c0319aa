//! Domain entity representing a stocked product.

use serde::{Deserialize, Serialize};

use super::Entity;

/// A product held in inventory.
///
/// Belongs to exactly one [`super::Category`] and one [`super::Supplier`],
/// referenced by id. `price` and `stock` are never negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i32,
    pub category_id: i64,
    pub supplier_id: i64,
}

/// Input data for creating a new product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i32,
    pub category_id: i64,
    pub supplier_id: i64,
}

/// Partial update for a product.
///
/// A supplied `category_id` or `supplier_id` is resolved against the store
/// before the write.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i32>,
    pub category_id: Option<i64>,
    pub supplier_id: Option<i64>,
}

impl Entity for Product {
    type Id = i64;
    type New = NewProduct;
    type Patch = ProductPatch;

    const NAME: &'static str = "product";
    const COLLECTION: &'static str = "products";

    fn id(&self) -> i64 {
        self.id
    }
}
