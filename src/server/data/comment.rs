use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::page_index,
    model::comment::{Comment, CreateCommentParam, UpdateCommentParam},
};

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    /// Creates a new CommentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CommentRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a visible comment; `param.content` must already be sanitized.
    pub async fn create(&self, param: CreateCommentParam) -> Result<Comment, DbErr> {
        let now = Utc::now();

        let entity = entity::comment::ActiveModel {
            content: ActiveValue::Set(param.content),
            visible: ActiveValue::Set(true),
            author_id: ActiveValue::Set(param.author_id),
            post_id: ActiveValue::Set(param.post_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Comment::from_entity(entity))
    }

    pub async fn find_by_id(&self, comment_id: i32) -> Result<Option<Comment>, DbErr> {
        let entity = entity::prelude::Comment::find_by_id(comment_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Comment::from_entity))
    }

    /// Visible comments of a post, newest first.
    pub async fn get_visible_for_post(&self, post_id: i32) -> Result<Vec<Comment>, DbErr> {
        let entities = entity::prelude::Comment::find()
            .filter(entity::comment::Column::PostId.eq(post_id))
            .filter(entity::comment::Column::Visible.eq(true))
            .order_by_desc(entity::comment::Column::CreatedAt)
            .order_by_desc(entity::comment::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Comment::from_entity).collect())
    }

    pub async fn count_visible_for_post(&self, post_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Comment::find()
            .filter(entity::comment::Column::PostId.eq(post_id))
            .filter(entity::comment::Column::Visible.eq(true))
            .count(self.db)
            .await
    }

    pub async fn count_by_author(&self, author_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Comment::find()
            .filter(entity::comment::Column::AuthorId.eq(author_id))
            .count(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Comment::find().count(self.db).await
    }

    /// Gets every comment, hidden ones included, newest first.
    ///
    /// # Arguments
    /// - `page` - One-based page number
    /// - `per_page` - Number of comments per page
    ///
    /// # Returns
    /// - `Ok((comments, total))` - Comments for the requested page and total comment count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Comment>, u64), DbErr> {
        let paginator = entity::prelude::Comment::find()
            .order_by_desc(entity::comment::Column::CreatedAt)
            .order_by_desc(entity::comment::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page_index(page)).await?;

        Ok((
            entities.into_iter().map(Comment::from_entity).collect(),
            total,
        ))
    }

    /// Applies a partial update; `changes.content` must already be sanitized.
    ///
    /// # Returns
    /// - `Ok(Some(Comment))` - The updated comment
    /// - `Ok(None)` - No comment with this id
    pub async fn update(
        &self,
        comment_id: i32,
        changes: UpdateCommentParam,
    ) -> Result<Option<Comment>, DbErr> {
        let Some(entity) = entity::prelude::Comment::find_by_id(comment_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model = entity.into_active_model();

        if let Some(content) = changes.content {
            active_model.content = ActiveValue::Set(content);
        }
        if let Some(visible) = changes.visible {
            active_model.visible = ActiveValue::Set(visible);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let updated = active_model.update(self.db).await?;

        Ok(Some(Comment::from_entity(updated)))
    }

    /// # Returns
    /// - `Ok(true)` - The comment existed and was deleted
    /// - `Ok(false)` - No comment with this id
    pub async fn delete(&self, comment_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Comment::delete_by_id(comment_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
