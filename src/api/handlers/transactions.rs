//! Handlers for transaction endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::transaction::{
    CreateTransactionRequest, TransactionItem, UpdateTransactionRequest,
};
use crate::api::extract::ValidatedJson;
use crate::api::handlers::not_found;
use crate::domain::entities::{NewTransaction, Transaction, TransactionPatch};
use crate::error::AppError;
use crate::state::AppState;

fn transaction_to_item(t: Transaction) -> TransactionItem {
    TransactionItem {
        id: t.id,
        user_id: t.user_id,
        product_id: t.product_id,
        quantity: t.quantity,
        total_price: t.total_price,
        date: t.date,
    }
}

pub async fn list_transactions_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<TransactionItem>>, AppError> {
    let all = state.transactions.get_all().await?;
    Ok(Json(all.into_iter().map(transaction_to_item).collect()))
}

pub async fn get_transaction_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<TransactionItem>, AppError> {
    let transaction = state
        .transactions
        .get_one(id)
        .await?
        .ok_or_else(|| not_found("transaction", id))?;

    Ok(Json(transaction_to_item(transaction)))
}

/// Records a sale.
///
/// # Errors
///
/// Returns 400 if `quantity` is not positive or `userId`/`productId` do not exist.
pub async fn create_transaction_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<TransactionItem>), AppError> {
    let transaction = state
        .transactions
        .create(NewTransaction {
            user_id: payload.user_id,
            product_id: payload.product_id,
            quantity: payload.quantity,
            total_price: payload.total_price,
            date: payload.date,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(transaction_to_item(transaction))))
}

pub async fn update_transaction_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateTransactionRequest>,
) -> Result<Json<TransactionItem>, AppError> {
    let patch = TransactionPatch {
        user_id: payload.user_id,
        product_id: payload.product_id,
        quantity: payload.quantity,
        total_price: payload.total_price,
        date: payload.date,
    };

    let transaction = state.transactions.update(id, patch).await?;

    Ok(Json(transaction_to_item(transaction)))
}

pub async fn delete_transaction_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.transactions.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
