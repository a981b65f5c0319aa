//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence, caching and credentials.
//!
//! # Modules
//!
//! - [`auth`] - JWT issuing and password schemes
//! - [`cache`] - Caching abstractions (Redis, moka and no-op implementations)
//! - [`persistence`] - PostgreSQL repository implementations

pub mod auth;
pub mod cache;
pub mod persistence;
