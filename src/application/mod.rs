//! Application layer services implementing business logic.
//!
//! Services consume repository traits and the cache, and give HTTP handlers a
//! small API that already speaks in domain errors.
//!
//! # Available Services
//!
//! - [`services::entity_service::EntityService`] - Cache-aside CRUD for any entity
//! - [`services::references`] - Foreign key checks before product and transaction writes
//! - [`services::auth_service::AuthService`] - Login, token verification and registration

pub mod services;
