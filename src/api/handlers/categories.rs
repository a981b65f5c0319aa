//! Handlers for category endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::category::{CategoryItem, CreateCategoryRequest, UpdateCategoryRequest};
use crate::api::extract::ValidatedJson;
use crate::api::handlers::not_found;
use crate::domain::entities::{Category, CategoryPatch, NewCategory};
use crate::error::AppError;
use crate::state::AppState;

fn category_to_item(c: Category) -> CategoryItem {
    CategoryItem {
        id: c.id,
        name: c.name,
        description: c.description,
    }
}

/// `GET /categorys`
pub async fn list_categories_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryItem>>, AppError> {
    let all = state.categories.get_all().await?;
    Ok(Json(all.into_iter().map(category_to_item).collect()))
}

/// `GET /categorys/{id}`
pub async fn get_category_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<CategoryItem>, AppError> {
    let category = state
        .categories
        .get_one(id)
        .await?
        .ok_or_else(|| not_found("category", id))?;

    Ok(Json(category_to_item(category)))
}

/// `POST /categorys`
pub async fn create_category_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<CategoryItem>), AppError> {
    let category = state
        .categories
        .create(NewCategory {
            name: payload.name,
            description: payload.description,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(category_to_item(category))))
}

/// `PUT /categorys/{id}`
///
/// # Errors
///
/// Returns 404 if the category does not exist.
pub async fn update_category_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateCategoryRequest>,
) -> Result<Json<CategoryItem>, AppError> {
    let patch = CategoryPatch {
        name: payload.name,
        description: payload.description,
    };

    let category = state.categories.update(id, patch).await?;

    Ok(Json(category_to_item(category)))
}

/// `DELETE /categorys/{id}`
///
/// # Errors
///
/// Returns 404 if the category does not exist.
/// Returns 409 if products still belong to it.
pub async fn delete_category_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.categories.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
