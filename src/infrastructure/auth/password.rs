//! Password storage schemes.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use serde_json::json;
use std::str::FromStr;

use crate::error::AppError;

/// How account passwords are stored and compared.
///
/// `Plaintext` keeps compatibility with databases populated by earlier
/// deployments, which stored the raw secret. `Argon2` stores PHC strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasswordScheme {
    #[default]
    Plaintext,
    Argon2,
}

impl PasswordScheme {
    /// Encodes a password for storage.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if hashing fails.
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        match self {
            Self::Plaintext => Ok(password.to_string()),
            Self::Argon2 => {
                let salt = SaltString::generate(&mut OsRng);
                Argon2::default()
                    .hash_password(password.as_bytes(), &salt)
                    .map(|hash| hash.to_string())
                    .map_err(|e| {
                        AppError::internal(
                            "Failed to hash password",
                            json!({"reason": e.to_string()}),
                        )
                    })
            }
        }
    }

    /// Checks `password` against a stored value. Unparseable hashes never match.
    pub fn verify(&self, password: &str, stored: &str) -> bool {
        match self {
            Self::Plaintext => password == stored,
            Self::Argon2 => match PasswordHash::new(stored) {
                Ok(parsed) => Argon2::default()
                    .verify_password(password.as_bytes(), &parsed)
                    .is_ok(),
                Err(_) => false,
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plaintext => "plaintext",
            Self::Argon2 => "argon2",
        }
    }
}

impl FromStr for PasswordScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plaintext" => Ok(Self::Plaintext),
            "argon2" => Ok(Self::Argon2),
            other => Err(format!(
                "unknown password scheme '{}', expected 'plaintext' or 'argon2'",
                other
            )),
        }
    }
}
