//! Core domain entities representing the inventory data model.
//!
//! # Entity Types
//!
//! - [`User`] - An account that can log in and record transactions
//! - [`Category`] - A product grouping
//! - [`Supplier`] - A vendor products are sourced from
//! - [`Product`] - A stocked item, belonging to one category and one supplier
//! - [`Transaction`] - A sale of a product quantity by a user
//!
//! # Design Pattern
//!
//! Every entity comes with a `New*` struct for creation and a `*Patch` struct
//! for partial updates, where `None` leaves the stored value unchanged.
//!
//! All entities implement [`Entity`], which names their cache keys and ties the
//! three shapes together for the generic repository and cache-aside service.

pub mod category;
pub mod product;
pub mod supplier;
pub mod transaction;
pub mod user;

pub use category::{Category, CategoryPatch, NewCategory};
pub use product::{NewProduct, Product, ProductPatch};
pub use supplier::{NewSupplier, Supplier, SupplierPatch};
pub use transaction::{NewTransaction, Transaction, TransactionPatch};
pub use user::{NewUser, User, UserPatch};

use serde::{Serialize, de::DeserializeOwned};
use std::fmt::Display;

/// A persisted record that can be listed, fetched, created, patched and deleted.
///
/// Cache keys are derived from the two names:
///
/// - collection key: `all_<COLLECTION>` (e.g. `all_categories`)
/// - item key: `<NAME>_<id>` (e.g. `category_7`)
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Store-generated identifier.
    type Id: Copy + Display + Send + Sync + 'static;
    /// Input for [`crate::domain::repositories::Repository::create`].
    type New: Send + Sync + 'static;
    /// Input for [`crate::domain::repositories::Repository::update`].
    type Patch: Send + Sync + 'static;

    /// Singular name, used for item keys and messages.
    const NAME: &'static str;
    /// Plural name, used for the collection key.
    const COLLECTION: &'static str;

    fn id(&self) -> Self::Id;

    fn collection_key() -> String {
        format!("all_{}", Self::COLLECTION)
    }

    fn item_key(id: Self::Id) -> String {
        format!("{}_{}", Self::NAME, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_keys() {
        assert_eq!(Category::collection_key(), "all_categories");
        assert_eq!(Category::item_key(7), "category_7");
        assert_eq!(User::collection_key(), "all_users");
        assert_eq!(User::item_key(1), "user_1");
        assert_eq!(Supplier::collection_key(), "all_suppliers");
        assert_eq!(Product::item_key(42), "product_42");
        assert_eq!(Transaction::collection_key(), "all_transactions");
    }
}
