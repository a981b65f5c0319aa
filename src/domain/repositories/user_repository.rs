//! Repository trait for credential lookups.

use async_trait::async_trait;

use crate::domain::entities::User;
use crate::error::AppError;

/// Lookup of accounts by login name.
///
/// Kept apart from the generic [`super::Repository`] because login reads
/// always go to the store and never through the cache.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds the account with exactly this name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_name(&self, name: &str) -> Result<Option<User>, AppError>;
}
