//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx
//! runtime queries mapped through `sqlx::FromRow`.
//!
//! # Repositories
//!
//! - [`PgCategoryRepository`], [`PgSupplierRepository`], [`PgProductRepository`],
//!   [`PgTransactionRepository`] - Entity storage
//! - [`PgUserRepository`] - Account storage and login lookup
//! - [`PgHealthRepository`] - Connectivity probe
//!
//! [`Repositories::postgres`] wires them all against one pool.

pub mod pg_category_repository;
pub mod pg_health_repository;
pub mod pg_product_repository;
pub mod pg_supplier_repository;
pub mod pg_transaction_repository;
pub mod pg_user_repository;

pub use pg_category_repository::PgCategoryRepository;
pub use pg_health_repository::PgHealthRepository;
pub use pg_product_repository::PgProductRepository;
pub use pg_supplier_repository::PgSupplierRepository;
pub use pg_transaction_repository::PgTransactionRepository;
pub use pg_user_repository::PgUserRepository;

use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Category, Product, Supplier, Transaction, User};
use crate::domain::repositories::{HealthRepository, Repository, UserRepository};

/// Every repository the application needs, behind trait objects.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn Repository<User>>,
    pub user_lookup: Arc<dyn UserRepository>,
    pub categories: Arc<dyn Repository<Category>>,
    pub suppliers: Arc<dyn Repository<Supplier>>,
    pub products: Arc<dyn Repository<Product>>,
    pub transactions: Arc<dyn Repository<Transaction>>,
    pub health: Arc<dyn HealthRepository>,
}

impl Repositories {
    /// Builds the PostgreSQL-backed set sharing a single pool.
    pub fn postgres(pool: Arc<PgPool>) -> Self {
        let users = Arc::new(PgUserRepository::new(pool.clone()));

        Self {
            users: users.clone(),
            user_lookup: users,
            categories: Arc::new(PgCategoryRepository::new(pool.clone())),
            suppliers: Arc::new(PgSupplierRepository::new(pool.clone())),
            products: Arc::new(PgProductRepository::new(pool.clone())),
            transactions: Arc::new(PgTransactionRepository::new(pool.clone())),
            health: Arc::new(PgHealthRepository::new(pool)),
        }
    }
}
