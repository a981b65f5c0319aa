//! API route configuration.
//!
//! Routes are split by whether they need a bearer token. The caller attaches
//! [`crate::api::middleware::auth`] to [`protected_routes`] only.

use crate::api::handlers::{
    create_category_handler, create_product_handler, create_supplier_handler,
    create_transaction_handler, create_user_handler, database_health_handler,
    delete_category_handler, delete_product_handler, delete_supplier_handler,
    delete_transaction_handler, delete_user_handler, get_category_handler, get_product_handler,
    get_supplier_handler, get_transaction_handler, get_user_handler, health_handler,
    list_categories_handler, list_products_handler, list_suppliers_handler,
    list_transactions_handler, list_users_handler, login_handler, memory_health_handler,
    profile_handler, register_handler, update_category_handler, update_product_handler,
    update_supplier_handler, update_transaction_handler, update_user_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

/// Routes reachable without a token.
///
/// # Endpoints
///
/// - `POST /auth/login`        - Exchange credentials for a token
/// - `POST /auth/register`     - Create an account
/// - `GET  /users`             - List accounts
/// - `GET  /users/{id}`        - Fetch one account
/// - `POST /users`             - Create an account directly
/// - `GET  /health`            - Database, cache and memory checks
/// - `GET  /health/database`   - Database check only
/// - `GET  /health/memory`     - Memory check only
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login_handler))
        .route("/auth/register", post(register_handler))
        .route("/users", get(list_users_handler).post(create_user_handler))
        .route("/users/{id}", get(get_user_handler))
        .route("/health", get(health_handler))
        .route("/health/database", get(database_health_handler))
        .route("/health/memory", get(memory_health_handler))
}

/// Routes that require Bearer token authentication.
///
/// # Endpoints
///
/// - `GET  /auth/profile` - Identity of the token holder
/// - `GET|POST /categorys`, `GET|PUT|DELETE /categorys/{id}`
/// - `GET|POST /suppliers`, `GET|PUT|DELETE /suppliers/{id}`
/// - `GET|POST /products`, `GET|PUT|DELETE /products/{id}`
/// - `GET|POST /transactions`, `GET|PUT|DELETE /transactions/{id}`
/// - `PUT|DELETE /users/{id}`
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/profile", get(profile_handler))
        .route(
            "/categorys",
            get(list_categories_handler).post(create_category_handler),
        )
        .route(
            "/categorys/{id}",
            get(get_category_handler)
                .put(update_category_handler)
                .delete(delete_category_handler),
        )
        .route(
            "/suppliers",
            get(list_suppliers_handler).post(create_supplier_handler),
        )
        .route(
            "/suppliers/{id}",
            get(get_supplier_handler)
                .put(update_supplier_handler)
                .delete(delete_supplier_handler),
        )
        .route(
            "/products",
            get(list_products_handler).post(create_product_handler),
        )
        .route(
            "/products/{id}",
            get(get_product_handler)
                .put(update_product_handler)
                .delete(delete_product_handler),
        )
        .route(
            "/transactions",
            get(list_transactions_handler).post(create_transaction_handler),
        )
        .route(
            "/transactions/{id}",
            get(get_transaction_handler)
                .put(update_transaction_handler)
                .delete(delete_transaction_handler),
        )
        .route(
            "/users/{id}",
            put(update_user_handler).delete(delete_user_handler),
        )
}
