use std::collections::HashSet;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{comment::CommentRepository, post::PostRepository, user::UserRepository},
    error::AppError,
    model::{
        audit::{AuditAction, AuditEntity},
        comment::{
            Comment, CommentListItem, CommentWithAuthor, CreateCommentParam, PaginatedComments,
            UpdateCommentParam,
        },
        page_count,
    },
    service::audit::AuditService,
    util::sanitize::sanitize_html,
};

/// Service providing business logic for comments and their moderation.
pub struct CommentService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    /// Creates a new CommentService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CommentService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a comment to a public post and audits it.
    ///
    /// # Returns
    /// - `Ok(CommentWithAuthor)` - The created comment
    /// - `Err(AppError::NotFound)` - Post missing, unpublished or hidden
    /// - `Err(AppError::BadRequest)` - Content empty after sanitizing
    pub async fn create(&self, param: CreateCommentParam) -> Result<CommentWithAuthor, AppError> {
        let post = PostRepository::new(self.db).find_by_id(param.post_id).await?;
        if !post.is_some_and(|p| p.is_public()) {
            return Err(AppError::NotFound("Post not found".to_string()));
        }

        let content = sanitize_html(&param.content);
        if content.trim().is_empty() {
            return Err(AppError::BadRequest("Comment cannot be empty".to_string()));
        }

        let comment = CommentRepository::new(self.db)
            .create(CreateCommentParam { content, ..param })
            .await?;

        AuditService::new(self.db)
            .record(
                comment.author_id,
                AuditAction::Create,
                AuditEntity::Comment,
                comment.id,
            )
            .await;

        self.with_author(comment).await
    }

    pub async fn find_by_id(&self, comment_id: i32) -> Result<Option<Comment>, AppError> {
        Ok(CommentRepository::new(self.db)
            .find_by_id(comment_id)
            .await?)
    }

    /// Applies a partial update to a comment and audits it.
    ///
    /// # Returns
    /// - `Ok(CommentWithAuthor)` - The updated comment
    /// - `Err(AppError::NotFound)` - No comment with this id
    /// - `Err(AppError::BadRequest)` - Content empty after sanitizing
    pub async fn update(
        &self,
        actor_id: i32,
        comment_id: i32,
        param: UpdateCommentParam,
    ) -> Result<CommentWithAuthor, AppError> {
        let content = param.content.as_deref().map(sanitize_html);
        if content.as_deref().is_some_and(|c| c.trim().is_empty()) {
            return Err(AppError::BadRequest("Comment cannot be empty".to_string()));
        }

        let comment = CommentRepository::new(self.db)
            .update(
                comment_id,
                UpdateCommentParam {
                    content,
                    visible: param.visible,
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;

        AuditService::new(self.db)
            .record(actor_id, AuditAction::Update, AuditEntity::Comment, comment.id)
            .await;

        self.with_author(comment).await
    }

    /// Deletes a comment and audits it.
    ///
    /// # Returns
    /// - `Ok(())` - Comment deleted
    /// - `Err(AppError::NotFound)` - No comment with this id
    pub async fn delete(&self, actor_id: i32, comment_id: i32) -> Result<(), AppError> {
        if !CommentRepository::new(self.db).delete(comment_id).await? {
            return Err(AppError::NotFound("Comment not found".to_string()));
        }

        AuditService::new(self.db)
            .record(actor_id, AuditAction::Delete, AuditEntity::Comment, comment_id)
            .await;

        Ok(())
    }

    /// Lists every comment for moderation, newest first, with author and post.
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedComments, AppError> {
        let (comments, total) = CommentRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        let author_ids: Vec<i32> = unique(comments.iter().map(|c| c.author_id));
        let post_ids: Vec<i32> = unique(comments.iter().map(|c| c.post_id));

        let authors = UserRepository::new(self.db)
            .find_summaries(&author_ids)
            .await?;
        let posts = PostRepository::new(self.db).find_by_ids(&post_ids).await?;

        let mut items = Vec::with_capacity(comments.len());
        for comment in comments {
            let (Some(author), Some(post)) =
                (authors.get(&comment.author_id), posts.get(&comment.post_id))
            else {
                tracing::warn!("Skipping comment {} with missing author or post", comment.id);
                continue;
            };

            items.push(CommentListItem {
                post_title: post.title.clone(),
                post_slug: post.slug.clone(),
                comment: CommentWithAuthor {
                    comment,
                    author: author.clone(),
                },
            });
        }

        Ok(PaginatedComments {
            comments: items,
            total,
            page,
            per_page,
            total_pages: page_count(total, per_page),
        })
    }

    async fn with_author(&self, comment: Comment) -> Result<CommentWithAuthor, AppError> {
        let author = UserRepository::new(self.db)
            .find_summaries(&[comment.author_id])
            .await?
            .remove(&comment.author_id)
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Author {} of comment {} not found",
                    comment.author_id, comment.id
                ))
            })?;

        Ok(CommentWithAuthor { comment, author })
    }
}

fn unique(ids: impl Iterator<Item = i32>) -> Vec<i32> {
    ids.collect::<HashSet<_>>().into_iter().collect()
}
