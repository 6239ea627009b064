use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::post::PostStatus;
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        post::{CreatePostDto, PaginatedPostsDto, PostDetailDto, PostDto, UpdatePostDto},
    },
    server::{
        controller::{clamp_entries, default_entries, default_page, non_blank, page_number},
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            extract::ValidatedJson,
        },
        model::post::{CreatePostParam, GetPostsParam, PostScope, UpdatePostParam},
        service::post::PostService,
        state::AppState,
    },
};

/// Tag for grouping post endpoints in OpenAPI documentation
pub static POST_TAG: &str = "post";

#[derive(Deserialize, IntoParams)]
pub struct PostListQuery {
    /// One-based page number, 1 when omitted.
    #[serde(default = "default_page")]
    pub page: u64,
    /// Page size, clamped to 1..=100.
    #[serde(default = "default_entries")]
    pub entries: u64,
    /// Case-insensitive match on title or content.
    pub search: Option<String>,
    /// Tag name, compared case-insensitively.
    pub tag: Option<String>,
}

/// Lists published, visible posts, newest first.
///
/// Author emails are included only for administrators.
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = POST_TAG,
    params(PostListQuery),
    responses(
        (status = 200, description = "Page of posts", body = PaginatedPostsDto),
        (status = 400, description = "Page number out of range", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_posts(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<PostListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).current_user().await?;
    let show_email = viewer.as_ref().is_some_and(|u| u.is_admin());

    let posts = PostService::new(&state.db)
        .get_paginated(GetPostsParam {
            scope: PostScope::Public,
            page: page_number(query.page)?,
            per_page: clamp_entries(query.entries),
            search: non_blank(query.search),
            tag: non_blank(query.tag),
        })
        .await?;

    Ok((StatusCode::OK, Json(posts.into_dto(show_email))))
}

/// Creates a post for the logged-in user. Status defaults to draft.
#[utoipa::path(
    post,
    path = "/api/posts",
    tag = POST_TAG,
    request_body = CreatePostDto,
    responses(
        (status = 201, description = "Post created", body = PostDto),
        (status = 400, description = "Invalid data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_post(
    State(state): State<AppState>,
    session: Session,
    ValidatedJson(payload): ValidatedJson<CreatePostDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let post = PostService::new(&state.db)
        .create(CreatePostParam {
            author_id: user.id,
            title: payload.title,
            content: payload.content,
            status: payload.status.map(PostStatus::from).unwrap_or(PostStatus::Draft),
            tags: payload.tags.unwrap_or_default(),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(post.into_dto(user.is_admin()))))
}

/// Returns a post with its visible comments and whether the viewer liked it.
///
/// Drafts and hidden posts are reported as missing unless the viewer is the
/// author or an administrator.
#[utoipa::path(
    get,
    path = "/api/posts/{post_id}",
    tag = POST_TAG,
    params(("post_id" = i32, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post details", body = PostDetailDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_post_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(post_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).current_user().await?;
    let post_service = PostService::new(&state.db);

    let post = post_service
        .find_by_id(post_id)
        .await?
        .filter(|post| PostService::can_view(post, viewer.as_ref()))
        .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

    let show_email = viewer.as_ref().is_some_and(|u| u.is_admin());
    let detail = post_service.get_detail(post, viewer.as_ref()).await?;

    Ok((StatusCode::OK, Json(detail.into_dto(show_email))))
}

/// Partially updates a post. Only administrators may change `visible`.
#[utoipa::path(
    patch,
    path = "/api/posts/{post_id}",
    tag = POST_TAG,
    params(("post_id" = i32, Path, description = "Post id")),
    request_body = UpdatePostDto,
    responses(
        (status = 200, description = "Updated post", body = PostDto),
        (status = 400, description = "Invalid data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Neither the author nor an admin", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_post(
    State(state): State<AppState>,
    session: Session,
    Path(post_id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdatePostDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;
    let post_service = PostService::new(&state.db);

    let post = post_service
        .find_by_id(post_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;
    AuthGuard::check(&user, &[Permission::OwnerOrAdmin(post.author_id)])?;

    let param = UpdatePostParam {
        title: payload.title,
        content: payload.content,
        status: payload.status.map(PostStatus::from),
        visible: payload.visible.filter(|_| user.is_admin()),
        tags: payload.tags,
    };

    let updated = post_service.update(user.id, post.id, param).await?;

    Ok((StatusCode::OK, Json(updated.into_dto(user.is_admin()))))
}

/// Deletes a post along with its comments, likes and tag links.
#[utoipa::path(
    delete,
    path = "/api/posts/{post_id}",
    tag = POST_TAG,
    params(("post_id" = i32, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post deleted", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Neither the author nor an admin", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_post(
    State(state): State<AppState>,
    session: Session,
    Path(post_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;
    let post_service = PostService::new(&state.db);

    let post = post_service
        .find_by_id(post_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;
    AuthGuard::check(&user, &[Permission::OwnerOrAdmin(post.author_id)])?;

    post_service.delete(user.id, post.id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Post deleted".to_string(),
        }),
    ))
}
