use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::user::AuthorDto;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct CommentDto {
    pub id: i32,
    pub content: String,
    pub visible: bool,
    pub post_id: i32,
    pub author: AuthorDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Comment row of the moderation listing, carries the post it belongs to.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct CommentListItemDto {
    #[serde(flatten)]
    pub comment: CommentDto,
    pub post_title: String,
    pub post_slug: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct PaginatedCommentsDto {
    pub comments: Vec<CommentListItemDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Deserialize, Validate, ToSchema, Debug)]
pub struct CreateCommentDto {
    #[validate(length(min = 1, max = 1000, message = "Comment must be between 1 and 1000 characters"))]
    pub content: String,
    pub post_id: i32,
}

#[derive(Deserialize, Validate, ToSchema, Debug, Default)]
pub struct UpdateCommentDto {
    #[validate(length(min = 1, max = 1000, message = "Comment must be between 1 and 1000 characters"))]
    pub content: Option<String>,
    pub visible: Option<bool>,
}
