//! Domain entity representing a product category.

use serde::{Deserialize, Serialize};

use super::Entity;

/// A grouping of products (e.g. "Tools", "Paint").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl Category {
    pub fn new(id: i64, name: String, description: String) -> Self {
        Self {
            id,
            name,
            description,
        }
    }
}

/// Input data for creating a new category.
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub description: String,
}

/// Partial update for a category. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl Entity for Category {
    type Id = i64;
    type New = NewCategory;
    type Patch = CategoryPatch;

    const NAME: &'static str = "category";
    const COLLECTION: &'static str = "categories";

    fn id(&self) -> i64 {
        self.id
    }
}
