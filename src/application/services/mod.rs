//! Business logic services for the application layer.

pub mod auth_service;
pub mod entity_service;
pub mod references;

pub use auth_service::AuthService;
pub use entity_service::{EntityService, InvalidationPolicy};
pub use references::{NoReferences, ProductReferences, ReferenceCheck, TransactionReferences};
