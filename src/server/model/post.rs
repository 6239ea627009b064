//! Post domain models and parameters.
//!
//! A post is public once it is both `PUBLISHED` and `visible`. Drafts and posts
//! hidden by moderation stay reachable for their author and for administrators.

use chrono::{DateTime, Utc};
use entity::post::PostStatus;

use crate::{
    model::post::{PaginatedPostsDto, PostDetailDto, PostDto, PostStatusDto},
    server::model::{comment::CommentWithAuthor, user::UserSummary},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: i32,
    pub title: String,
    /// URL identifier derived from the title at creation, never changes afterwards.
    pub slug: String,
    pub content: String,
    pub status: PostStatus,
    /// Cleared by administrators to hide a post from everyone but its author.
    pub visible: bool,
    pub author_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Whether anonymous visitors may see the post.
    pub fn is_public(&self) -> bool {
        self.status == PostStatus::Published && self.visible
    }

    pub fn from_entity(entity: entity::post::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            slug: entity.slug,
            content: entity.content,
            status: entity.status,
            visible: entity.visible,
            author_id: entity.author_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Post enriched with the data shown in listings.
#[derive(Debug, Clone, PartialEq)]
pub struct PostSummary {
    pub post: Post,
    pub author: UserSummary,
    pub tags: Vec<String>,
    /// Number of visible comments.
    pub comment_count: u64,
    pub like_count: u64,
}

impl PostSummary {
    /// Converts the summary to a DTO.
    ///
    /// # Arguments
    /// - `show_email` - Whether the author email is exposed (administrator viewers only)
    pub fn into_dto(self, show_email: bool) -> PostDto {
        PostDto {
            id: self.post.id,
            title: self.post.title,
            slug: self.post.slug,
            content: self.post.content,
            status: self.post.status.into(),
            visible: self.post.visible,
            author: self.author.into_dto(show_email),
            tags: self.tags,
            comment_count: self.comment_count,
            like_count: self.like_count,
            created_at: self.post.created_at,
            updated_at: self.post.updated_at,
        }
    }
}

/// A single post with its visible comments and the viewer's like state.
#[derive(Debug, Clone, PartialEq)]
pub struct PostDetail {
    pub summary: PostSummary,
    /// Visible comments, newest first.
    pub comments: Vec<CommentWithAuthor>,
    /// Whether the current viewer liked the post, false for anonymous viewers.
    pub liked: bool,
}

impl PostDetail {
    pub fn into_dto(self, show_email: bool) -> PostDetailDto {
        PostDetailDto {
            post: self.summary.into_dto(show_email),
            comments: self
                .comments
                .into_iter()
                .map(|c| c.into_dto(show_email))
                .collect(),
            liked: self.liked,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedPosts {
    pub posts: Vec<PostSummary>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedPosts {
    pub fn into_dto(self, show_email: bool) -> PaginatedPostsDto {
        PaginatedPostsDto {
            posts: self
                .posts
                .into_iter()
                .map(|p| p.into_dto(show_email))
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Which posts a listing may return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostScope {
    /// Published and visible posts only.
    Public,
    /// Every post of one author regardless of status.
    Author(i32),
    /// Every post, for moderation.
    All,
}

/// Parameters for post listings.
#[derive(Debug, Clone)]
pub struct GetPostsParam {
    pub scope: PostScope,
    pub page: u64,
    pub per_page: u64,
    /// Case-insensitive match against title or content.
    pub search: Option<String>,
    /// Tag name filter, compared case-insensitively.
    pub tag: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreatePostParam {
    pub author_id: i32,
    pub title: String,
    pub content: String,
    pub status: PostStatus,
    pub tags: Vec<String>,
}

/// Row-level insert parameters with sanitized fields and a free slug.
#[derive(Debug, Clone)]
pub struct InsertPostParam {
    pub author_id: i32,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub status: PostStatus,
}

/// Partial post update, `None` leaves the field unchanged.
///
/// `tags`, when present, replaces the full tag set. `visible` is cleared by the
/// controller for non-administrators.
#[derive(Debug, Clone, Default)]
pub struct UpdatePostParam {
    pub title: Option<String>,
    pub content: Option<String>,
    pub status: Option<PostStatus>,
    pub visible: Option<bool>,
    pub tags: Option<Vec<String>>,
}

impl From<PostStatus> for PostStatusDto {
    fn from(status: PostStatus) -> Self {
        match status {
            PostStatus::Draft => PostStatusDto::Draft,
            PostStatus::Published => PostStatusDto::Published,
        }
    }
}

impl From<PostStatusDto> for PostStatus {
    fn from(status: PostStatusDto) -> Self {
        match status {
            PostStatusDto::Draft => PostStatus::Draft,
            PostStatusDto::Published => PostStatus::Published,
        }
    }
}
