use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::{comment::CommentDto, user::AuthorDto};

#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PostStatusDto {
    Draft,
    Published,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct PostDto {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub status: PostStatusDto,
    pub visible: bool,
    pub author: AuthorDto,
    pub tags: Vec<String>,
    pub comment_count: u64,
    pub like_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A single post with its visible comments and the viewer's like state.
#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct PostDetailDto {
    #[serde(flatten)]
    pub post: PostDto,
    pub comments: Vec<CommentDto>,
    pub liked: bool,
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct PaginatedPostsDto {
    pub posts: Vec<PostDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Deserialize, Validate, ToSchema, Debug)]
pub struct CreatePostDto {
    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
    pub status: Option<PostStatusDto>,
    pub tags: Option<Vec<String>>,
}

#[derive(Deserialize, Validate, ToSchema, Debug, Default)]
pub struct UpdatePostDto {
    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: Option<String>,
    pub status: Option<PostStatusDto>,
    pub visible: Option<bool>,
    pub tags: Option<Vec<String>>,
}
