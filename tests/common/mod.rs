#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::Utc;
use inventory_api::domain::entities::{
    Category, CategoryPatch, Entity, NewCategory, NewProduct, NewSupplier, NewTransaction,
    NewUser, Product, ProductPatch, Supplier, SupplierPatch, Transaction, TransactionPatch, User,
    UserPatch, user::DEFAULT_ROLE,
};
use inventory_api::domain::repositories::{HealthRepository, Repository, UserRepository};
use inventory_api::error::AppError;
use inventory_api::infrastructure::auth::PasswordScheme;
use inventory_api::infrastructure::cache::{CacheService, MemoryCache};
use inventory_api::infrastructure::persistence::Repositories;
use inventory_api::routes::api_router;
use inventory_api::state::{AppState, ServiceSettings};
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub const JWT_SECRET: &str = "test-signing-secret";

/// How an in-memory row is built from its create input and patched.
pub trait Record: Entity<Id = i64> {
    fn build(id: i64, new: Self::New) -> Self;
    fn apply(&mut self, patch: Self::Patch);
}

impl Record for Category {
    fn build(id: i64, new: NewCategory) -> Self {
        Category {
            id,
            name: new.name,
            description: new.description,
        }
    }

    fn apply(&mut self, patch: CategoryPatch) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.description {
            self.description = v;
        }
    }
}

impl Record for Supplier {
    fn build(id: i64, new: NewSupplier) -> Self {
        Supplier {
            id,
            name: new.name,
            description: new.description,
            phone: new.phone,
        }
    }

    fn apply(&mut self, patch: SupplierPatch) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.description {
            self.description = v;
        }
        if let Some(v) = patch.phone {
            self.phone = v;
        }
    }
}

impl Record for Product {
    fn build(id: i64, new: NewProduct) -> Self {
        Product {
            id,
            name: new.name,
            description: new.description,
            price: new.price,
            stock: new.stock,
            category_id: new.category_id,
            supplier_id: new.supplier_id,
        }
    }

    fn apply(&mut self, patch: ProductPatch) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.description {
            self.description = v;
        }
        if let Some(v) = patch.price {
            self.price = v;
        }
        if let Some(v) = patch.stock {
            self.stock = v;
        }
        if let Some(v) = patch.category_id {
            self.category_id = v;
        }
        if let Some(v) = patch.supplier_id {
            self.supplier_id = v;
        }
    }
}

impl Record for Transaction {
    fn build(id: i64, new: NewTransaction) -> Self {
        Transaction {
            id,
            user_id: new.user_id,
            product_id: new.product_id,
            quantity: new.quantity,
            total_price: new.total_price,
            date: new.date,
        }
    }

    fn apply(&mut self, patch: TransactionPatch) {
        if let Some(v) = patch.user_id {
            self.user_id = v;
        }
        if let Some(v) = patch.product_id {
            self.product_id = v;
        }
        if let Some(v) = patch.quantity {
            self.quantity = v;
        }
        if let Some(v) = patch.total_price {
            self.total_price = v;
        }
        if let Some(v) = patch.date {
            self.date = v;
        }
    }
}

impl Record for User {
    fn build(id: i64, new: NewUser) -> Self {
        User::new(
            id,
            new.name,
            new.password,
            new.email,
            new.role.unwrap_or_else(|| DEFAULT_ROLE.to_string()),
            Utc::now(),
        )
    }

    fn apply(&mut self, patch: UserPatch) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.password {
            self.password = v;
        }
        if let Some(v) = patch.email {
            self.email = v;
        }
        if let Some(v) = patch.role {
            self.role = v;
        }
    }
}

/// A table kept in a `BTreeMap`, counting how often it is read.
pub struct InMemoryRepository<E> {
    rows: Mutex<BTreeMap<i64, E>>,
    next_id: AtomicUsize,
    reads: AtomicUsize,
}

impl<E: Record> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(BTreeMap::new()),
            next_id: AtomicUsize::new(1),
            reads: AtomicUsize::new(0),
        }
    }

    /// Number of `list` and `find_by_id` calls served so far.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    /// Edits a row behind the cache's back.
    pub fn overwrite(&self, id: i64, patch: E::Patch) {
        if let Some(row) = self.rows.lock().unwrap().get_mut(&id) {
            row.apply(patch);
        }
    }
}

#[async_trait]
impl<E: Record> Repository<E> for InMemoryRepository<E> {
    async fn list(&self) -> Result<Vec<E>, AppError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<E>, AppError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn create(&self, new: E::New) -> Result<E, AppError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i64;
        let row = E::build(id, new);
        self.rows.lock().unwrap().insert(id, row.clone());
        Ok(row)
    }

    async fn update(&self, id: i64, patch: E::Patch) -> Result<u64, AppError> {
        match self.rows.lock().unwrap().get_mut(&id) {
            Some(row) => {
                row.apply(patch);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> Result<u64, AppError> {
        Ok(self.rows.lock().unwrap().remove(&id).map_or(0, |_| 1))
    }
}

#[async_trait]
impl UserRepository for InMemoryRepository<User> {
    async fn find_by_name(&self, name: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .find(|u| u.name == name)
            .cloned())
    }
}

/// Health probe with a switchable outcome.
pub struct StubHealth {
    pub up: bool,
}

#[async_trait]
impl HealthRepository for StubHealth {
    async fn ping(&self) -> Result<(), AppError> {
        if self.up {
            Ok(())
        } else {
            Err(AppError::internal("connection refused", json!({})))
        }
    }
}

/// The in-memory stores behind a test [`AppState`], kept for inspection.
pub struct Stores {
    pub users: Arc<InMemoryRepository<User>>,
    pub categories: Arc<InMemoryRepository<Category>>,
    pub suppliers: Arc<InMemoryRepository<Supplier>>,
    pub products: Arc<InMemoryRepository<Product>>,
    pub transactions: Arc<InMemoryRepository<Transaction>>,
    pub cache: Arc<MemoryCache>,
}

pub fn settings() -> ServiceSettings {
    ServiceSettings {
        cache_ttl: Duration::from_secs(300),
        invalidate_item_keys: false,
        jwt_secret: JWT_SECRET.to_string(),
        jwt_ttl: Duration::from_secs(3600),
        password_scheme: PasswordScheme::Plaintext,
        memory_limit_bytes: u64::MAX,
    }
}

pub fn create_test_state_with(settings: ServiceSettings, database_up: bool) -> (AppState, Stores) {
    let stores = Stores {
        users: Arc::new(InMemoryRepository::new()),
        categories: Arc::new(InMemoryRepository::new()),
        suppliers: Arc::new(InMemoryRepository::new()),
        products: Arc::new(InMemoryRepository::new()),
        transactions: Arc::new(InMemoryRepository::new()),
        cache: Arc::new(MemoryCache::new(1_000, Duration::from_secs(300))),
    };

    let repos = Repositories {
        users: stores.users.clone(),
        user_lookup: stores.users.clone(),
        categories: stores.categories.clone(),
        suppliers: stores.suppliers.clone(),
        products: stores.products.clone(),
        transactions: stores.transactions.clone(),
        health: Arc::new(StubHealth { up: database_up }),
    };

    let cache: Arc<dyn CacheService> = stores.cache.clone();
    let state = AppState::new(repos, cache, settings);

    (state, stores)
}

pub fn create_test_state() -> (AppState, Stores) {
    create_test_state_with(settings(), true)
}

/// Test server over the full router, with the stores behind it.
pub fn make_server() -> (TestServer, Stores) {
    let (state, stores) = create_test_state();
    (TestServer::new(api_router(state)).unwrap(), stores)
}

/// Registers `name` with password `secret` and returns a bearer token for it.
pub async fn login(server: &TestServer, name: &str) -> String {
    server
        .post("/auth/register")
        .json(&json!({
            "name": name,
            "password": "secret",
            "email": format!("{}@example.com", name),
        }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let response = server
        .post("/auth/login")
        .json(&json!({"name": name, "password": "secret"}))
        .await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    format!("Bearer {}", body["access_token"].as_str().unwrap())
}

/// Creates a category and a supplier, returning their ids.
pub async fn seed_parents(server: &TestServer, token: &str) -> (i64, i64) {
    let category = server
        .post("/categorys")
        .add_header("Authorization", token)
        .json(&json!({"name": "Tools", "description": "Hand tools"}))
        .await
        .json::<serde_json::Value>();

    let supplier = server
        .post("/suppliers")
        .add_header("Authorization", token)
        .json(&json!({"name": "Acme", "description": "Wholesale", "phone": "555-0100"}))
        .await
        .json::<serde_json::Value>();

    (
        category["id"].as_i64().unwrap(),
        supplier["id"].as_i64().unwrap(),
    )
}
