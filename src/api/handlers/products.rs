//! Handlers for product endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::product::{CreateProductRequest, ProductItem, UpdateProductRequest};
use crate::api::extract::ValidatedJson;
use crate::api::handlers::not_found;
use crate::domain::entities::{NewProduct, Product, ProductPatch};
use crate::error::AppError;
use crate::state::AppState;

fn product_to_item(p: Product) -> ProductItem {
    ProductItem {
        id: p.id,
        name: p.name,
        description: p.description,
        price: p.price,
        stock: p.stock,
        category_id: p.category_id,
        supplier_id: p.supplier_id,
    }
}

/// Lists all products.
///
/// # Endpoint
///
/// `GET /products`
pub async fn list_products_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductItem>>, AppError> {
    let all = state.products.get_all().await?;
    Ok(Json(all.into_iter().map(product_to_item).collect()))
}

/// Fetches one product.
///
/// # Endpoint
///
/// `GET /products/{id}`
///
/// # Errors
///
/// Returns 404 if the product does not exist.
pub async fn get_product_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<ProductItem>, AppError> {
    let product = state
        .products
        .get_one(id)
        .await?
        .ok_or_else(|| not_found("product", id))?;

    Ok(Json(product_to_item(product)))
}

/// Creates a product.
///
/// # Endpoint
///
/// `POST /products`
///
/// # Errors
///
/// Returns 400 if the body is invalid or `categoryId`/`supplierId` do not exist.
pub async fn create_product_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductItem>), AppError> {
    let product = state
        .products
        .create(NewProduct {
            name: payload.name,
            description: payload.description,
            price: payload.price,
            stock: payload.stock,
            category_id: payload.category_id,
            supplier_id: payload.supplier_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(product_to_item(product))))
}

/// Partially updates a product.
///
/// # Endpoint
///
/// `PUT /products/{id}`
///
/// # Errors
///
/// Returns 400 if a supplied reference does not exist.
/// Returns 404 if the product does not exist.
pub async fn update_product_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateProductRequest>,
) -> Result<Json<ProductItem>, AppError> {
    let patch = ProductPatch {
        name: payload.name,
        description: payload.description,
        price: payload.price,
        stock: payload.stock,
        category_id: payload.category_id,
        supplier_id: payload.supplier_id,
    };

    let product = state.products.update(id, patch).await?;

    Ok(Json(product_to_item(product)))
}

/// Deletes a product.
///
/// # Endpoint
///
/// `DELETE /products/{id}`
///
/// # Errors
///
/// Returns 404 if the product does not exist.
/// Returns 409 if transactions still reference it.
pub async fn delete_product_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.products.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
