//! Comment factory for creating test comment entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test comments.
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    author_id: i32,
    post_id: i32,
    content: String,
    visible: bool,
}

impl<'a> CommentFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, author_id: i32, post_id: i32) -> Self {
        Self {
            db,
            author_id,
            post_id,
            content: format!("Comment {}", next_id()),
            visible: true,
        }
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        let now = Utc::now();
        entity::comment::ActiveModel {
            content: ActiveValue::Set(self.content),
            visible: ActiveValue::Set(self.visible),
            author_id: ActiveValue::Set(self.author_id),
            post_id: ActiveValue::Set(self.post_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a visible comment by `author_id` on `post_id`.
pub async fn create_comment(
    db: &DatabaseConnection,
    author_id: i32,
    post_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, author_id, post_id).build().await
}
