//! SeaORM entities for the forum schema.

pub mod prelude;

pub mod audit_log;
pub mod comment;
pub mod post;
pub mod post_like;
pub mod post_tag;
pub mod tag;
pub mod user;

pub use sea_orm;
