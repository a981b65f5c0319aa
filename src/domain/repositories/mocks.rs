//! `mockall` doubles for the generic repository, one per entity.

use async_trait::async_trait;
use mockall::mock;

use super::Repository;
use crate::domain::entities::{
    Category, CategoryPatch, NewCategory, NewProduct, NewSupplier, NewUser, Product,
    ProductPatch, Supplier, SupplierPatch, User, UserPatch,
};
use crate::error::AppError;

mock! {
    pub CategoryRepository {}

    #[async_trait]
    impl Repository<Category> for CategoryRepository {
        async fn list(&self) -> Result<Vec<Category>, AppError>;
        async fn find_by_id(&self, id: i64) -> Result<Option<Category>, AppError>;
        async fn create(&self, new: NewCategory) -> Result<Category, AppError>;
        async fn update(&self, id: i64, patch: CategoryPatch) -> Result<u64, AppError>;
        async fn delete(&self, id: i64) -> Result<u64, AppError>;
    }
}

mock! {
    pub SupplierRepository {}

    #[async_trait]
    impl Repository<Supplier> for SupplierRepository {
        async fn list(&self) -> Result<Vec<Supplier>, AppError>;
        async fn find_by_id(&self, id: i64) -> Result<Option<Supplier>, AppError>;
        async fn create(&self, new: NewSupplier) -> Result<Supplier, AppError>;
        async fn update(&self, id: i64, patch: SupplierPatch) -> Result<u64, AppError>;
        async fn delete(&self, id: i64) -> Result<u64, AppError>;
    }
}

mock! {
    pub ProductRepository {}

    #[async_trait]
    impl Repository<Product> for ProductRepository {
        async fn list(&self) -> Result<Vec<Product>, AppError>;
        async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError>;
        async fn create(&self, new: NewProduct) -> Result<Product, AppError>;
        async fn update(&self, id: i64, patch: ProductPatch) -> Result<u64, AppError>;
        async fn delete(&self, id: i64) -> Result<u64, AppError>;
    }
}

mock! {
    pub UserStore {}

    #[async_trait]
    impl Repository<User> for UserStore {
        async fn list(&self) -> Result<Vec<User>, AppError>;
        async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;
        async fn create(&self, new: NewUser) -> Result<User, AppError>;
        async fn update(&self, id: i64, patch: UserPatch) -> Result<u64, AppError>;
        async fn delete(&self, id: i64) -> Result<u64, AppError>;
    }
}
