//! Domain entity representing an account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Entity;

/// Role assigned to accounts created without an explicit role.
pub const DEFAULT_ROLE: &str = "user";

/// An account that can authenticate and record transactions.
///
/// `password` holds whatever the configured
/// [`crate::infrastructure::auth::PasswordScheme`] produced: the raw secret
/// under `plaintext`, a PHC string under `argon2`. It is never exposed through
/// the HTTP API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub password: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let user = User::new(
    ///     1,
    ///     "alice".to_string(),
    ///     "secret".to_string(),
    ///     "alice@example.com".to_string(),
    ///     "admin".to_string(),
    ///     Utc::now(),
    /// );
    /// ```
    pub fn new(
        id: i64,
        name: String,
        password: String,
        email: String,
        role: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            password,
            email,
            role,
            created_at,
        }
    }
}

/// Input data for registering a user.
///
/// `password` must already be encoded by the password scheme.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub password: String,
    pub email: String,
    pub role: Option<String>,
}

/// Partial update for a user.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl Entity for User {
    type Id = i64;
    type New = NewUser;
    type Patch = UserPatch;

    const NAME: &'static str = "user";
    const COLLECTION: &'static str = "users";

    fn id(&self) -> i64 {
        self.id
    }
}
