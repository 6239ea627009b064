use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Post, User};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Post)
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,

    /// CREATE INDEX statements executed after every table exists.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables with foreign keys should be added after the tables they
    /// reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds an index that entity definitions cannot express, such as a composite unique key.
    ///
    /// # Arguments
    /// - `index` - CREATE INDEX statement built with `sea_query::Index::create()`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Adds every table of the forum schema in dependency order:
    /// - User
    /// - Post
    /// - Tag
    /// - PostTag
    /// - Comment
    /// - PostLike
    /// - AuditLog
    ///
    /// Also adds the unique `(user_id, post_id)` index on `post_like` so like toggles
    /// see the same constraint as the migrated database.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_forum_tables(self) -> Self {
        self.with_table(User)
            .with_table(Post)
            .with_table(Tag)
            .with_table(PostTag)
            .with_table(Comment)
            .with_table(PostLike)
            .with_table(AuditLog)
            .with_index(
                Index::create()
                    .name("idx_post_like_user_post")
                    .table(PostLike)
                    .col(entity::post_like::Column::UserId)
                    .col(entity::post_like::Column::PostId)
                    .unique()
                    .to_owned(),
            )
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}
