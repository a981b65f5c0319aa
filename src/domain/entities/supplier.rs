//! Domain entity representing a supplier.

use serde::{Deserialize, Serialize};

use super::Entity;

/// A vendor that products are sourced from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub phone: String,
}

/// Input data for creating a new supplier.
#[derive(Debug, Clone)]
pub struct NewSupplier {
    pub name: String,
    pub description: String,
    pub phone: String,
}

/// Partial update for a supplier.
#[derive(Debug, Clone, Default)]
pub struct SupplierPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub phone: Option<String>,
}

impl Entity for Supplier {
    type Id = i64;
    type New = NewSupplier;
    type Patch = SupplierPatch;

    const NAME: &'static str = "supplier";
    const COLLECTION: &'static str = "suppliers";

    fn id(&self) -> i64 {
        self.id
    }
}
