//! Handlers for authentication endpoints.

use axum::{Extension, Json, extract::State, http::StatusCode};

use crate::api::dto::auth::{LoginRequest, LoginResponse, ProfileResponse, RegisterRequest};
use crate::api::dto::user::UserItem;
use crate::api::extract::ValidatedJson;
use crate::api::handlers::users::user_to_item;
use crate::domain::entities::NewUser;
use crate::error::AppError;
use crate::infrastructure::auth::AuthenticatedUser;
use crate::state::AppState;

/// Exchanges credentials for a bearer token.
///
/// # Endpoint
///
/// `POST /auth/login`
///
/// # Errors
///
/// Returns 401 if the name is unknown or the password is wrong.
pub async fn login_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let access_token = state
        .auth_service
        .login(&payload.name, &payload.password)
        .await?;

    Ok(Json(LoginResponse { access_token }))
}

/// Registers a new account with the default role.
///
/// # Endpoint
///
/// `POST /auth/register`
///
/// # Errors
///
/// Returns 400 if the name is taken or the body is invalid.
pub async fn register_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<UserItem>), AppError> {
    let user = state
        .auth_service
        .register(NewUser {
            name: payload.name,
            password: payload.password,
            email: payload.email,
            role: None,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(user_to_item(user))))
}

/// Returns the identity carried by the request's bearer token.
///
/// # Endpoint
///
/// `GET /auth/profile`
pub async fn profile_handler(
    Extension(identity): Extension<AuthenticatedUser>,
) -> Json<ProfileResponse> {
    Json(ProfileResponse {
        user_id: identity.user_id,
        name: identity.name,
    })
}
