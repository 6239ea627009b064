//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Sanitizing input, generating slugs, toggling likes
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Auditing**: Recording every administrative and authoring mutation

pub mod admin;
pub mod audit;
pub mod auth;
pub mod comment;
pub mod like;
pub mod post;
pub mod user;


use sea_orm::{DbErr, SqlErr};

/// Whether a database error was caused by a unique index.
pub(crate) fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
