//! Handlers for user endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::user::{CreateUserRequest, UpdateUserRequest, UserItem};
use crate::api::extract::ValidatedJson;
use crate::api::handlers::not_found;
use crate::domain::entities::{NewUser, User, UserPatch};
use crate::error::AppError;
use crate::state::AppState;

pub(crate) fn user_to_item(u: User) -> UserItem {
    UserItem {
        id: u.id,
        name: u.name,
        email: u.email,
        role: u.role,
        created_at: u.created_at,
    }
}

/// Lists all accounts.
///
/// # Endpoint
///
/// `GET /users` (public)
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserItem>>, AppError> {
    let all = state.users.get_all().await?;
    Ok(Json(all.into_iter().map(user_to_item).collect()))
}

/// Fetches one account.
///
/// # Endpoint
///
/// `GET /users/{id}` (public)
pub async fn get_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<UserItem>, AppError> {
    let user = state
        .users
        .get_one(id)
        .await?
        .ok_or_else(|| not_found("user", id))?;

    Ok(Json(user_to_item(user)))
}

/// Creates an account directly, without the name pre-check done by
/// `/auth/register`.
///
/// # Endpoint
///
/// `POST /users` (public)
///
/// # Errors
///
/// Returns 409 if the name is already taken.
pub async fn create_user_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserItem>), AppError> {
    let password = state.auth_service.hash_password(&payload.password)?;

    let user = state
        .users
        .create(NewUser {
            name: payload.name,
            password,
            email: payload.email,
            role: payload.role,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(user_to_item(user))))
}

/// Partially updates an account. A supplied password is re-encoded.
///
/// # Endpoint
///
/// `PUT /users/{id}`
pub async fn update_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> Result<Json<UserItem>, AppError> {
    let password = payload
        .password
        .as_deref()
        .map(|raw| state.auth_service.hash_password(raw))
        .transpose()?;

    let patch = UserPatch {
        name: payload.name,
        password,
        email: payload.email,
        role: payload.role,
    };

    let user = state.users.update(id, patch).await?;

    Ok(Json(user_to_item(user)))
}

/// Deletes an account.
///
/// # Endpoint
///
/// `DELETE /users/{id}`
///
/// # Errors
///
/// Returns 404 if the account does not exist.
/// Returns 409 if transactions still reference it.
pub async fn delete_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.users.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
