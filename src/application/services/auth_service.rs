//! Login, token verification and account registration.

use serde_json::json;
use std::sync::Arc;
use tracing::info;

use super::EntityService;
use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::infrastructure::auth::{AuthenticatedUser, PasswordScheme, TokenIssuer};

/// Service for authenticating users and issuing bearer tokens.
///
/// Credential lookups bypass the cache. Registration goes through the user
/// [`EntityService`] so the `all_users` key is dropped like any other create.
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    accounts: Arc<EntityService<User>>,
    issuer: TokenIssuer,
    passwords: PasswordScheme,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        accounts: Arc<EntityService<User>>,
        issuer: TokenIssuer,
        passwords: PasswordScheme,
    ) -> Self {
        Self {
            users,
            accounts,
            issuer,
            passwords,
        }
    }

    /// Checks credentials and returns a signed access token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the name is unknown or the
    /// password does not match. Both cases produce the same response.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn login(&self, name: &str, password: &str) -> Result<String, AppError> {
        let user = self.users.find_by_name(name).await?;

        let user = match user {
            Some(user) if self.passwords.verify(password, &user.password) => user,
            _ => {
                return Err(AppError::unauthorized(
                    "Invalid credentials",
                    json!({"reason": "Unknown user or wrong password"}),
                ));
            }
        };

        info!(user_id = user.id, "User logged in");
        self.issuer.issue(&user)
    }

    /// Verifies a bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is invalid or expired.
    pub fn verify(&self, token: &str) -> Result<AuthenticatedUser, AppError> {
        self.issuer.verify(token)
    }

    /// Creates an account after checking that the name is free.
    ///
    /// `new.password` is the raw secret; it is encoded with the configured
    /// scheme before storage.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name is already taken.
    /// Returns [`AppError::Conflict`] if a concurrent registration wins the race.
    pub async fn register(&self, mut new: NewUser) -> Result<User, AppError> {
        if self.users.find_by_name(&new.name).await?.is_some() {
            return Err(AppError::bad_request(
                "User name is already taken",
                json!({"field": "name"}),
            ));
        }

        new.password = self.hash_password(&new.password)?;
        let user = self.accounts.create(new).await?;

        info!(user_id = user.id, "User registered");
        Ok(user)
    }

    /// Encodes a raw password with the configured scheme.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if hashing fails.
    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        self.passwords.hash(password)
    }
}
