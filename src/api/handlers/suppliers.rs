//! Handlers for supplier endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::supplier::{CreateSupplierRequest, SupplierItem, UpdateSupplierRequest};
use crate::api::extract::ValidatedJson;
use crate::api::handlers::not_found;
use crate::domain::entities::{NewSupplier, Supplier, SupplierPatch};
use crate::error::AppError;
use crate::state::AppState;

fn supplier_to_item(s: Supplier) -> SupplierItem {
    SupplierItem {
        id: s.id,
        name: s.name,
        description: s.description,
        phone: s.phone,
    }
}

pub async fn list_suppliers_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<SupplierItem>>, AppError> {
    let all = state.suppliers.get_all().await?;
    Ok(Json(all.into_iter().map(supplier_to_item).collect()))
}

pub async fn get_supplier_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<SupplierItem>, AppError> {
    let supplier = state
        .suppliers
        .get_one(id)
        .await?
        .ok_or_else(|| not_found("supplier", id))?;

    Ok(Json(supplier_to_item(supplier)))
}

pub async fn create_supplier_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateSupplierRequest>,
) -> Result<(StatusCode, Json<SupplierItem>), AppError> {
    let supplier = state
        .suppliers
        .create(NewSupplier {
            name: payload.name,
            description: payload.description,
            phone: payload.phone,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(supplier_to_item(supplier))))
}

pub async fn update_supplier_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateSupplierRequest>,
) -> Result<Json<SupplierItem>, AppError> {
    let patch = SupplierPatch {
        name: payload.name,
        description: payload.description,
        phone: payload.phone,
    };

    let supplier = state.suppliers.update(id, patch).await?;

    Ok(Json(supplier_to_item(supplier)))
}

pub async fn delete_supplier_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.suppliers.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
