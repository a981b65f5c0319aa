//! Repository trait for storage liveness probes.

use async_trait::async_trait;

use crate::error::AppError;

/// Connectivity probe for the backing database.
#[async_trait]
pub trait HealthRepository: Send + Sync {
    /// Issues a trivial round trip to the database.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the database cannot be reached.
    async fn ping(&self) -> Result<(), AppError>;
}
