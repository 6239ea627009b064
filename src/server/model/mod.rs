//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.

pub mod admin;
pub mod audit;
pub mod comment;
pub mod like;
pub mod post;
pub mod user;

/// Number of pages needed to show `total` items `per_page` at a time.
pub fn page_count(total: u64, per_page: u64) -> u64 {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}
