//! Data Transfer Objects for API requests and responses.
//!
//! Request bodies use camelCase names, reject unknown fields and carry
//! `validator` rules checked by [`crate::api::extract::ValidatedJson`].

pub mod auth;
pub mod category;
pub mod health;
pub mod product;
pub mod supplier;
pub mod transaction;
pub mod user;
