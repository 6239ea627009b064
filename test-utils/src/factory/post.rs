//! Post factory for creating test post entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use entity::post::PostStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test posts.
///
/// Posts default to published and visible so they show up in public listings.
pub struct PostFactory<'a> {
    db: &'a DatabaseConnection,
    author_id: i32,
    title: String,
    slug: String,
    content: String,
    status: PostStatus,
    visible: bool,
    created_at: DateTime<Utc>,
}

impl<'a> PostFactory<'a> {
    /// Creates a new PostFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Post {id}"`
    /// - slug: `"post-{id}"`
    /// - content: `"<p>Content {id}</p>"`
    /// - status: `PUBLISHED`
    /// - visible: `true`
    pub fn new(db: &'a DatabaseConnection, author_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            author_id,
            title: format!("Post {}", id),
            slug: format!("post-{}", id),
            content: format!("<p>Content {}</p>", id),
            status: PostStatus::Published,
            visible: true,
            created_at: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn draft(mut self) -> Self {
        self.status = PostStatus::Draft;
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Overrides the creation timestamp, useful for ordering assertions.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the post entity into the database.
    pub async fn build(self) -> Result<entity::post::Model, DbErr> {
        entity::post::ActiveModel {
            title_search: ActiveValue::Set(self.title.to_lowercase()),
            content_search: ActiveValue::Set(self.content.to_lowercase()),
            title: ActiveValue::Set(self.title),
            slug: ActiveValue::Set(self.slug),
            content: ActiveValue::Set(self.content),
            status: ActiveValue::Set(self.status),
            visible: ActiveValue::Set(self.visible),
            author_id: ActiveValue::Set(self.author_id),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a published, visible post for the given author.
pub async fn create_post(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::post::Model, DbErr> {
    PostFactory::new(db, author_id).build().await
}
