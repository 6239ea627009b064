//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Text searches run against lowercased `*_search` columns kept next to the original
//! text. SQLite's `LIKE` only folds ASCII letters, so both sides are folded here with
//! [`str::to_lowercase`] instead.

use sea_orm::sea_query::LikeExpr;

pub mod audit;
pub mod comment;
pub mod like;
pub mod post;
pub mod tag;
pub mod user;

#[cfg(test)]
mod test;

const LIKE_ESCAPE: char = '\\';

/// SeaORM's zero-based page index for a one-based page number.
pub fn page_index(page: u64) -> u64 {
    page.saturating_sub(1)
}

/// Value stored in a `*_search` column for `text`.
pub fn search_key(text: &str) -> String {
    text.to_lowercase()
}

/// `LIKE` pattern matching `term` anywhere in a `*_search` column.
///
/// `%`, `_` and the escape character in `term` match literally.
pub fn contains_pattern(term: &str) -> LikeExpr {
    let folded = search_key(term);
    let mut pattern = String::with_capacity(folded.len() + 2);

    pattern.push('%');
    for c in folded.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');

    LikeExpr::new(pattern).escape(LIKE_ESCAPE)
}
