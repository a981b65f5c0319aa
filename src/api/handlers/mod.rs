//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one resource.

pub mod auth;
pub mod categories;
pub mod health;
pub mod products;
pub mod suppliers;
pub mod transactions;
pub mod users;

use serde_json::json;

use crate::error::AppError;

pub use auth::{login_handler, profile_handler, register_handler};
pub use categories::{
    create_category_handler, delete_category_handler, get_category_handler,
    list_categories_handler, update_category_handler,
};
pub use health::{database_health_handler, health_handler, memory_health_handler};
pub use products::{
    create_product_handler, delete_product_handler, get_product_handler, list_products_handler,
    update_product_handler,
};
pub use suppliers::{
    create_supplier_handler, delete_supplier_handler, get_supplier_handler,
    list_suppliers_handler, update_supplier_handler,
};
pub use transactions::{
    create_transaction_handler, delete_transaction_handler, get_transaction_handler,
    list_transactions_handler, update_transaction_handler,
};
pub use users::{
    create_user_handler, delete_user_handler, get_user_handler, list_users_handler,
    update_user_handler,
};

/// 404 for a `GET /{entity}/{id}` that found nothing.
pub(crate) fn not_found(entity: &str, id: i64) -> AppError {
    AppError::not_found(
        format!("{} {} not found", entity, id),
        json!({"entity": entity, "id": id.to_string()}),
    )
}
