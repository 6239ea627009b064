//! Post service for business logic.
//!
//! Handles sanitizing, slug allocation, tag normalization and assembling the
//! listing/detail models (author, tags, counts) from the repositories.

use std::collections::HashSet;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        comment::CommentRepository, like::LikeRepository, post::PostRepository,
        tag::TagRepository, user::UserRepository,
    },
    error::AppError,
    model::{
        audit::{AuditAction, AuditEntity},
        comment::CommentWithAuthor,
        page_count,
        post::{
            CreatePostParam, GetPostsParam, InsertPostParam, PaginatedPosts, Post, PostDetail,
            PostSummary, UpdatePostParam,
        },
        user::User,
    },
    service::{audit::AuditService, is_unique_violation},
    util::{
        sanitize::{sanitize_html, sanitize_text},
        slug::{numbered_slug, slugify},
    },
};

/// Attempts made when a concurrent post claims the slug between the check and the insert.
const SLUG_INSERT_ATTEMPTS: u32 = 3;

pub struct PostService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> PostService<'a> {
    /// Creates a new PostService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PostService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a post with a unique slug and its tags, then audits it.
    ///
    /// The title goes through the text sanitizer and the content through the HTML
    /// sanitizer before being stored.
    ///
    /// # Returns
    /// - `Ok(PostSummary)` - The created post
    /// - `Err(AppError::BadRequest)` - Title or content empty after sanitizing
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreatePostParam) -> Result<PostSummary, AppError> {
        let title = sanitize_text(&param.title);
        if title.is_empty() {
            return Err(AppError::BadRequest("Title is required".to_string()));
        }
        let content = sanitize_html(&param.content);
        if content.trim().is_empty() {
            return Err(AppError::BadRequest("Content is required".to_string()));
        }

        let post_repo = PostRepository::new(self.db);

        let mut attempt = 1;
        let post = loop {
            let slug = self.unique_slug(&title).await?;

            let result = post_repo
                .create(InsertPostParam {
                    author_id: param.author_id,
                    title: title.clone(),
                    slug,
                    content: content.clone(),
                    status: param.status,
                })
                .await;

            match result {
                Ok(post) => break post,
                Err(e) if is_unique_violation(&e) && attempt < SLUG_INSERT_ATTEMPTS => {
                    tracing::debug!("Slug for '{}' was taken concurrently, retrying", title);
                    attempt += 1;
                }
                Err(e) => return Err(e.into()),
            }
        };

        TagRepository::new(self.db)
            .set_post_tags(post.id, &normalize_tags(&param.tags))
            .await?;

        AuditService::new(self.db)
            .record(param.author_id, AuditAction::Create, AuditEntity::Post, post.id)
            .await;

        self.summarize(post).await
    }

    /// Finds the first free slug for a title.
    ///
    /// Tries the plain slug, then `-1`, `-2`, … until one is not used by any post.
    pub async fn unique_slug(&self, title: &str) -> Result<String, AppError> {
        let post_repo = PostRepository::new(self.db);

        let base = slugify(title);
        if !post_repo.slug_exists(&base).await? {
            return Ok(base);
        }

        let mut n = 1;
        loop {
            let candidate = numbered_slug(&base, n);
            if !post_repo.slug_exists(&candidate).await? {
                return Ok(candidate);
            }
            n += 1;
        }
    }

    pub async fn find_by_id(&self, post_id: i32) -> Result<Option<Post>, AppError> {
        Ok(PostRepository::new(self.db).find_by_id(post_id).await?)
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, AppError> {
        Ok(PostRepository::new(self.db).find_by_slug(slug).await?)
    }

    /// Lists posts within a scope, newest first.
    ///
    /// # Returns
    /// - `Ok(PaginatedPosts)` - Summaries for the requested page with pagination metadata
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_paginated(&self, param: GetPostsParam) -> Result<PaginatedPosts, AppError> {
        let search = param.search.as_deref().map(str::trim).filter(|s| !s.is_empty());

        let tag = param
            .tag
            .as_deref()
            .map(normalize_tag)
            .filter(|t| !t.is_empty());

        let (posts, total) = PostRepository::new(self.db)
            .get_paginated(
                param.scope,
                param.page,
                param.per_page,
                search,
                tag.as_deref(),
            )
            .await?;

        Ok(PaginatedPosts {
            posts: self.summarize_all(posts).await?,
            total,
            page: param.page,
            per_page: param.per_page,
            total_pages: page_count(total, param.per_page),
        })
    }

    /// Whether a viewer may see a post.
    ///
    /// Public posts are visible to everyone; drafts and hidden posts only to their
    /// author and administrators.
    pub fn can_view(post: &Post, viewer: Option<&User>) -> bool {
        post.is_public()
            || viewer.is_some_and(|user| user.is_admin() || user.id == post.author_id)
    }

    /// Builds the detail view of a post: summary, visible comments and like state.
    pub async fn get_detail(
        &self,
        post: Post,
        viewer: Option<&User>,
    ) -> Result<PostDetail, AppError> {
        let comments = CommentRepository::new(self.db)
            .get_visible_for_post(post.id)
            .await?;

        let author_ids: Vec<i32> = comments
            .iter()
            .map(|c| c.author_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        let authors = UserRepository::new(self.db)
            .find_summaries(&author_ids)
            .await?;

        let comments = comments
            .into_iter()
            .filter_map(|comment| {
                authors.get(&comment.author_id).cloned().map(|author| CommentWithAuthor {
                    comment,
                    author,
                })
            })
            .collect();

        let liked = match viewer {
            Some(user) => LikeRepository::new(self.db)
                .find(user.id, post.id)
                .await?
                .is_some(),
            None => false,
        };

        Ok(PostDetail {
            summary: self.summarize(post).await?,
            comments,
            liked,
        })
    }

    /// Applies a partial update to a post and audits it.
    ///
    /// Permission checks happen in the controller; the slug never changes.
    ///
    /// # Returns
    /// - `Ok(PostSummary)` - The updated post with its new tags
    /// - `Err(AppError::NotFound)` - No post with this id
    /// - `Err(AppError::BadRequest)` - Title or content empty after sanitizing
    pub async fn update(
        &self,
        actor_id: i32,
        post_id: i32,
        param: UpdatePostParam,
    ) -> Result<PostSummary, AppError> {
        let title = param.title.as_deref().map(sanitize_text);
        if title.as_deref().is_some_and(str::is_empty) {
            return Err(AppError::BadRequest("Title is required".to_string()));
        }
        let content = param.content.as_deref().map(sanitize_html);
        if content.as_deref().is_some_and(|c| c.trim().is_empty()) {
            return Err(AppError::BadRequest("Content is required".to_string()));
        }

        let changes = UpdatePostParam {
            title,
            content,
            status: param.status,
            visible: param.visible,
            tags: None,
        };

        let post = PostRepository::new(self.db)
            .update(post_id, &changes)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

        if let Some(tags) = param.tags {
            TagRepository::new(self.db)
                .set_post_tags(post.id, &normalize_tags(&tags))
                .await?;
        }

        AuditService::new(self.db)
            .record(actor_id, AuditAction::Update, AuditEntity::Post, post.id)
            .await;

        self.summarize(post).await
    }

    /// Deletes a post and audits it.
    ///
    /// # Returns
    /// - `Ok(())` - Post deleted
    /// - `Err(AppError::NotFound)` - No post with this id
    pub async fn delete(&self, actor_id: i32, post_id: i32) -> Result<(), AppError> {
        if !PostRepository::new(self.db).delete(post_id).await? {
            return Err(AppError::NotFound("Post not found".to_string()));
        }

        AuditService::new(self.db)
            .record(actor_id, AuditAction::Delete, AuditEntity::Post, post_id)
            .await;

        Ok(())
    }

    async fn summarize(&self, post: Post) -> Result<PostSummary, AppError> {
        let mut summaries = self.summarize_all(vec![post]).await?;

        summaries
            .pop()
            .ok_or_else(|| AppError::InternalError("Post summary was not built".to_string()))
    }

    /// Attaches author, tags and counters to each post, preserving order.
    async fn summarize_all(&self, posts: Vec<Post>) -> Result<Vec<PostSummary>, AppError> {
        let author_ids: Vec<i32> = posts
            .iter()
            .map(|p| p.author_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        let authors = UserRepository::new(self.db)
            .find_summaries(&author_ids)
            .await?;

        let tag_repo = TagRepository::new(self.db);
        let comment_repo = CommentRepository::new(self.db);
        let like_repo = LikeRepository::new(self.db);

        let mut summaries = Vec::with_capacity(posts.len());
        for post in posts {
            let author = authors.get(&post.author_id).cloned().ok_or_else(|| {
                AppError::InternalError(format!(
                    "Author {} of post {} not found",
                    post.author_id, post.id
                ))
            })?;

            summaries.push(PostSummary {
                author,
                tags: tag_repo.names_for_post(post.id).await?,
                comment_count: comment_repo.count_visible_for_post(post.id).await?,
                like_count: like_repo.count_for_post(post.id).await?,
                post,
            });
        }

        Ok(summaries)
    }
}

/// Canonical stored form of a tag name.
fn normalize_tag(name: &str) -> String {
    sanitize_text(name).to_lowercase()
}

/// Normalizes tag names, dropping empties and duplicates while keeping input order.
pub fn normalize_tags(names: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();

    names
        .iter()
        .map(|name| normalize_tag(name))
        .filter(|name| !name.is_empty() && seen.insert(name.clone()))
        .collect()
}
