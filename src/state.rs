//! Shared application state handed to every handler.

use std::sync::Arc;
use std::time::Duration;

use crate::application::services::{
    AuthService, EntityService, InvalidationPolicy, NoReferences, ProductReferences,
    TransactionReferences,
};
use crate::domain::entities::{Category, Product, Supplier, Transaction, User};
use crate::domain::repositories::HealthRepository;
use crate::infrastructure::auth::{PasswordScheme, TokenIssuer};
use crate::infrastructure::cache::CacheService;
use crate::infrastructure::persistence::Repositories;

/// Tunables that shape the services built by [`AppState::new`].
#[derive(Debug, Clone)]
pub struct ServiceSettings {
    pub cache_ttl: Duration,
    /// Drop `<entity>_<id>` on update/delete for every entity, not only users.
    pub invalidate_item_keys: bool,
    pub jwt_secret: String,
    pub jwt_ttl: Duration,
    pub password_scheme: PasswordScheme,
    pub memory_limit_bytes: u64,
}

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub users: Arc<EntityService<User>>,
    pub categories: Arc<EntityService<Category>>,
    pub suppliers: Arc<EntityService<Supplier>>,
    pub products: Arc<EntityService<Product>>,
    pub transactions: Arc<EntityService<Transaction>>,
    pub cache: Arc<dyn CacheService>,
    pub health: Arc<dyn HealthRepository>,
    pub memory_limit_bytes: u64,
}

impl AppState {
    /// Wires one cache-aside service per entity over the given repositories.
    pub fn new(
        repos: Repositories,
        cache: Arc<dyn CacheService>,
        settings: ServiceSettings,
    ) -> Self {
        let ttl = settings.cache_ttl;
        let policy = if settings.invalidate_item_keys {
            InvalidationPolicy::CollectionAndItem
        } else {
            InvalidationPolicy::CollectionOnly
        };

        // Users always drop their item key
        let users = Arc::new(EntityService::new(
            repos.users.clone(),
            cache.clone(),
            Arc::new(NoReferences),
            ttl,
            InvalidationPolicy::CollectionAndItem,
        ));
        let categories = Arc::new(EntityService::new(
            repos.categories.clone(),
            cache.clone(),
            Arc::new(NoReferences),
            ttl,
            policy,
        ));
        let suppliers = Arc::new(EntityService::new(
            repos.suppliers.clone(),
            cache.clone(),
            Arc::new(NoReferences),
            ttl,
            policy,
        ));
        let products = Arc::new(EntityService::new(
            repos.products.clone(),
            cache.clone(),
            Arc::new(ProductReferences {
                categories: repos.categories.clone(),
                suppliers: repos.suppliers.clone(),
            }),
            ttl,
            policy,
        ));
        let transactions = Arc::new(EntityService::new(
            repos.transactions.clone(),
            cache.clone(),
            Arc::new(TransactionReferences {
                users: repos.users.clone(),
                products: repos.products.clone(),
            }),
            ttl,
            policy,
        ));

        let auth_service = Arc::new(AuthService::new(
            repos.user_lookup.clone(),
            users.clone(),
            TokenIssuer::new(&settings.jwt_secret, settings.jwt_ttl),
            settings.password_scheme,
        ));

        Self {
            auth_service,
            users,
            categories,
            suppliers,
            products,
            transactions,
            cache,
            health: repos.health,
            memory_limit_bytes: settings.memory_limit_bytes,
        }
    }
}
