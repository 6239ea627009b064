//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let post = factory::post::create_post(&db, user.id).await?;
//!
//! let admin = factory::user::UserFactory::new(&db)
//!     .email("root@example.com")
//!     .admin(true)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `post` - Create post entities
//! - `comment` - Create comment entities
//! - `tag` - Create tags and attach them to posts
//! - `helpers` - Unique id generation and entities with dependencies

pub mod comment;
pub mod helpers;
pub mod post;
pub mod tag;
pub mod user;

pub use comment::create_comment;
pub use post::create_post;
pub use tag::{attach_tag, create_tag};
pub use user::{create_admin, create_user};
