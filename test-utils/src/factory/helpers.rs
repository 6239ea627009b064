//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an author together with one published, visible post.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, post))` - The author and their post
/// - `Err(DbErr)` - Database error during creation
pub async fn create_post_with_author(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::post::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let post = crate::factory::post::create_post(db, user.id).await?;

    Ok((user, post))
}
