//! Comment domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::comment::{CommentDto, CommentListItemDto, PaginatedCommentsDto},
    server::model::user::UserSummary,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub content: String,
    pub visible: bool,
    pub author_id: i32,
    pub post_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn from_entity(entity: entity::comment::Model) -> Self {
        Self {
            id: entity.id,
            content: entity.content,
            visible: entity.visible,
            author_id: entity.author_id,
            post_id: entity.post_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommentWithAuthor {
    pub comment: Comment,
    pub author: UserSummary,
}

impl CommentWithAuthor {
    pub fn into_dto(self, show_email: bool) -> CommentDto {
        CommentDto {
            id: self.comment.id,
            content: self.comment.content,
            visible: self.comment.visible,
            post_id: self.comment.post_id,
            author: self.author.into_dto(show_email),
            created_at: self.comment.created_at,
            updated_at: self.comment.updated_at,
        }
    }
}

/// Moderation listing row: the comment, its author and the post it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentListItem {
    pub comment: CommentWithAuthor,
    pub post_title: String,
    pub post_slug: String,
}

impl CommentListItem {
    pub fn into_dto(self, show_email: bool) -> CommentListItemDto {
        CommentListItemDto {
            comment: self.comment.into_dto(show_email),
            post_title: self.post_title,
            post_slug: self.post_slug,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedComments {
    pub comments: Vec<CommentListItem>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedComments {
    pub fn into_dto(self, show_email: bool) -> PaginatedCommentsDto {
        PaginatedCommentsDto {
            comments: self
                .comments
                .into_iter()
                .map(|c| c.into_dto(show_email))
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCommentParam {
    pub author_id: i32,
    pub post_id: i32,
    pub content: String,
}

/// Partial comment update; `visible` is cleared by the controller for non-administrators.
#[derive(Debug, Clone, Default)]
pub struct UpdateCommentParam {
    pub content: Option<String>,
    pub visible: Option<bool>,
}
