//! Foreign key existence checks run before product and transaction writes.

use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

use crate::domain::entities::{
    Category, Entity, NewProduct, NewTransaction, Product, ProductPatch, Supplier, Transaction,
    TransactionPatch, User,
};
use crate::domain::repositories::Repository;
use crate::error::AppError;

/// Validates that the records a write points at exist.
///
/// Lookups go to the store, not the cache, so a freshly deleted parent is
/// never accepted.
#[async_trait]
pub trait ReferenceCheck<E: Entity>: Send + Sync {
    async fn check_new(&self, _new: &E::New) -> Result<(), AppError> {
        Ok(())
    }

    async fn check_patch(&self, _patch: &E::Patch) -> Result<(), AppError> {
        Ok(())
    }
}

/// For entities without outgoing references.
pub struct NoReferences;

impl<E: Entity> ReferenceCheck<E> for NoReferences {}

async fn require<R>(repository: &dyn Repository<R>, field: &str, id: i64) -> Result<(), AppError>
where
    R: Entity<Id = i64>,
{
    if repository.find_by_id(id).await?.is_some() {
        return Ok(());
    }

    Err(AppError::bad_request(
        format!("{} references a missing {}", field, R::NAME),
        json!({"field": field, "id": id}),
    ))
}

/// A product must point at an existing category and supplier.
pub struct ProductReferences {
    pub categories: Arc<dyn Repository<Category>>,
    pub suppliers: Arc<dyn Repository<Supplier>>,
}

#[async_trait]
impl ReferenceCheck<Product> for ProductReferences {
    async fn check_new(&self, new: &NewProduct) -> Result<(), AppError> {
        require(self.categories.as_ref(), "categoryId", new.category_id).await?;
        require(self.suppliers.as_ref(), "supplierId", new.supplier_id).await
    }

    async fn check_patch(&self, patch: &ProductPatch) -> Result<(), AppError> {
        if let Some(category_id) = patch.category_id {
            require(self.categories.as_ref(), "categoryId", category_id).await?;
        }
        if let Some(supplier_id) = patch.supplier_id {
            require(self.suppliers.as_ref(), "supplierId", supplier_id).await?;
        }
        Ok(())
    }
}

/// A transaction must point at an existing user and product.
pub struct TransactionReferences {
    pub users: Arc<dyn Repository<User>>,
    pub products: Arc<dyn Repository<Product>>,
}

#[async_trait]
impl ReferenceCheck<Transaction> for TransactionReferences {
    async fn check_new(&self, new: &NewTransaction) -> Result<(), AppError> {
        require(self.users.as_ref(), "userId", new.user_id).await?;
        require(self.products.as_ref(), "productId", new.product_id).await
    }

    async fn check_patch(&self, patch: &TransactionPatch) -> Result<(), AppError> {
        if let Some(user_id) = patch.user_id {
            require(self.users.as_ref(), "userId", user_id).await?;
        }
        if let Some(product_id) = patch.product_id {
            require(self.products.as_ref(), "productId", product_id).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::mocks::{
        MockCategoryRepository, MockProductRepository, MockSupplierRepository, MockUserStore,
    };
    use chrono::Utc;

    fn new_product(category_id: i64, supplier_id: i64) -> NewProduct {
        NewProduct {
            name: "Hammer".to_string(),
            description: "Claw hammer".to_string(),
            price: 12.5,
            stock: 10,
            category_id,
            supplier_id,
        }
    }

    fn references(
        categories: MockCategoryRepository,
        suppliers: MockSupplierRepository,
    ) -> ProductReferences {
        ProductReferences {
            categories: Arc::new(categories),
            suppliers: Arc::new(suppliers),
        }
    }

    #[tokio::test]
    async fn test_product_with_existing_references_passes() {
        let mut categories = MockCategoryRepository::new();
        categories
            .expect_find_by_id()
            .withf(|id| *id == 1)
            .times(1)
            .returning(|id| Ok(Some(Category::new(id, "Tools".into(), "".into()))));
        let mut suppliers = MockSupplierRepository::new();
        suppliers
            .expect_find_by_id()
            .withf(|id| *id == 2)
            .times(1)
            .returning(|id| {
                Ok(Some(Supplier {
                    id,
                    name: "Acme".into(),
                    description: "".into(),
                    phone: "555-0100".into(),
                }))
            });

        let result = references(categories, suppliers)
            .check_new(&new_product(1, 2))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_product_with_missing_category_is_rejected() {
        let mut categories = MockCategoryRepository::new();
        categories.expect_find_by_id().returning(|_| Ok(None));
        let mut suppliers = MockSupplierRepository::new();
        suppliers.expect_find_by_id().never();

        let result = references(categories, suppliers)
            .check_new(&new_product(99, 2))
            .await;

        match result {
            Err(AppError::Validation { details, .. }) => {
                assert_eq!(details["field"], "categoryId");
                assert_eq!(details["id"], 99);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_patch_without_references_skips_lookups() {
        let mut categories = MockCategoryRepository::new();
        categories.expect_find_by_id().never();
        let mut suppliers = MockSupplierRepository::new();
        suppliers.expect_find_by_id().never();

        let patch = ProductPatch {
            price: Some(3.0),
            ..Default::default()
        };

        assert!(
            references(categories, suppliers)
                .check_patch(&patch)
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_transaction_with_missing_product_is_rejected() {
        let mut users = MockUserStore::new();
        users.expect_find_by_id().returning(|id| {
            Ok(Some(User::new(
                id,
                "alice".into(),
                "x".into(),
                "alice@example.com".into(),
                "user".into(),
                Utc::now(),
            )))
        });
        let mut products = MockProductRepository::new();
        products
            .expect_find_by_id()
            .withf(|id| *id == 5)
            .times(1)
            .returning(|_| Ok(None));

        let references = TransactionReferences {
            users: Arc::new(users),
            products: Arc::new(products),
        };

        let result = references
            .check_new(&NewTransaction {
                user_id: 1,
                product_id: 5,
                quantity: 1,
                total_price: 9.99,
                date: Utc::now(),
            })
            .await;

        match result {
            Err(AppError::Validation { details, .. }) => assert_eq!(details["field"], "productId"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_transaction_patch_checks_only_given_references() {
        let mut users = MockUserStore::new();
        users.expect_find_by_id().never();
        let mut products = MockProductRepository::new();
        products.expect_find_by_id().never();

        let references = TransactionReferences {
            users: Arc::new(users),
            products: Arc::new(products),
        };

        let patch = TransactionPatch {
            quantity: Some(4),
            ..Default::default()
        };

        assert!(references.check_patch(&patch).await.is_ok());
    }
}
