//! Generic persistence contract shared by every inventory entity.

use async_trait::async_trait;

use crate::domain::entities::Entity;
use crate::error::AppError;

/// Repository interface for a single entity type.
///
/// One implementation exists per table. The cache-aside layer in
/// [`crate::application::services::EntityService`] is written against this
/// trait only, so a new entity needs a repository and nothing else.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCategoryRepository`] and its
///   siblings - PostgreSQL implementations
/// - `tests/common/mod.rs` - in-memory implementation for handler tests
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Returns every row, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<E>, AppError>;

    /// Finds a row by its primary key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: E::Id) -> Result<Option<E>, AppError>;

    /// Inserts a row and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] on unique or foreign key violations.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new: E::New) -> Result<E, AppError>;

    /// Applies a partial update and returns the number of rows affected.
    ///
    /// Returns `Ok(0)` when no row has the given id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] on unique or foreign key violations.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: E::Id, patch: E::Patch) -> Result<u64, AppError>;

    /// Deletes a row and returns the number of rows affected.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if other rows still reference it.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: E::Id) -> Result<u64, AppError>;
}
