//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access behind the Repository pattern. Concrete
//! implementations live in `crate::infrastructure::persistence`.
//!
//! # Available Repositories
//!
//! - [`Repository`] - Generic CRUD over any [`crate::domain::entities::Entity`]
//! - [`UserRepository`] - Account lookup by name for login
//! - [`HealthRepository`] - Database liveness probe
//!
//! # Testing
//!
//! `UserRepository` has a `mockall` mock under `cfg(test)`. Per-entity `Repository<E>` doubles live in `mocks`.

pub mod health_repository;
#[cfg(test)]
pub mod mocks;
pub mod repository;
pub mod user_repository;

pub use health_repository::HealthRepository;
pub use repository::Repository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use user_repository::MockUserRepository;
