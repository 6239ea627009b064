//! HTTP handlers.
//!
//! Handlers authorize through `AuthGuard`, call a service and convert domain models to
//! DTOs. JSON bodies arrive through `ValidatedJson` so invalid input never reaches a
//! service.

pub mod admin;
pub mod auth;
pub mod comment;
pub mod like;
pub mod page;
pub mod post;
pub mod user;

#[cfg(test)]
mod test;

use crate::server::error::AppError;

/// Page size used when a listing request omits `entries`.
pub const DEFAULT_ENTRIES: u64 = 10;

/// Largest accepted page size.
pub const MAX_ENTRIES: u64 = 100;

/// Largest accepted page number. Keeps the row offset `(page - 1) * MAX_ENTRIES`
/// within SQLite's signed 64-bit integers.
pub const MAX_PAGE: u64 = i64::MAX as u64 / MAX_ENTRIES;

pub fn default_entries() -> u64 {
    DEFAULT_ENTRIES
}

pub fn default_page() -> u64 {
    1
}

/// Checks a one-based page number from a query string.
///
/// # Returns
/// - `Ok(page)` - Page within `1..=MAX_PAGE`
/// - `Err(AppError::BadRequest)` - Page 0 or beyond `MAX_PAGE`
pub fn page_number(page: u64) -> Result<u64, AppError> {
    if (1..=MAX_PAGE).contains(&page) {
        Ok(page)
    } else {
        Err(AppError::BadRequest(format!(
            "Page must be between 1 and {}",
            MAX_PAGE
        )))
    }
}

/// Keeps a requested page size within `1..=MAX_ENTRIES`.
pub fn clamp_entries(entries: u64) -> u64 {
    entries.clamp(1, MAX_ENTRIES)
}

/// Turns an empty or whitespace-only query value into `None`.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
