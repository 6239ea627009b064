use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        comment::{CommentDto, CreateCommentDto, PaginatedCommentsDto, UpdateCommentDto},
    },
    server::{
        controller::{clamp_entries, default_entries, default_page, page_number},
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            extract::ValidatedJson,
        },
        model::comment::{CreateCommentParam, UpdateCommentParam},
        service::comment::CommentService,
        state::AppState,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

#[derive(Deserialize, IntoParams)]
pub struct CommentListQuery {
    /// One-based page number, 1 when omitted.
    #[serde(default = "default_page")]
    pub page: u64,
    /// Page size, clamped to 1..=100.
    #[serde(default = "default_entries")]
    pub entries: u64,
}

/// Lists every comment for moderation, hidden ones included.
#[utoipa::path(
    get,
    path = "/api/comments",
    tag = COMMENT_TAG,
    params(CommentListQuery),
    responses(
        (status = 200, description = "Page of comments", body = PaginatedCommentsDto),
        (status = 400, description = "Page number out of range", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comments(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<CommentListQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let comments = CommentService::new(&state.db)
        .get_all_paginated(page_number(query.page)?, clamp_entries(query.entries))
        .await?;

    Ok((StatusCode::OK, Json(comments.into_dto(true))))
}

/// Comments on a published, visible post.
#[utoipa::path(
    post,
    path = "/api/comments",
    tag = COMMENT_TAG,
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment created", body = CommentDto),
        (status = 400, description = "Invalid data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    session: Session,
    ValidatedJson(payload): ValidatedJson<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let comment = CommentService::new(&state.db)
        .create(CreateCommentParam {
            author_id: user.id,
            post_id: payload.post_id,
            content: payload.content,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(comment.into_dto(user.is_admin()))))
}

/// Edits a comment. Only administrators may change `visible`.
#[utoipa::path(
    patch,
    path = "/api/comments/{comment_id}",
    tag = COMMENT_TAG,
    params(("comment_id" = i32, Path, description = "Comment id")),
    request_body = UpdateCommentDto,
    responses(
        (status = 200, description = "Updated comment", body = CommentDto),
        (status = 400, description = "Invalid data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Neither the author nor an admin", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_comment(
    State(state): State<AppState>,
    session: Session,
    Path(comment_id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;
    let comment_service = CommentService::new(&state.db);

    let comment = comment_service
        .find_by_id(comment_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;
    AuthGuard::check(&user, &[Permission::OwnerOrAdmin(comment.author_id)])?;

    let updated = comment_service
        .update(
            user.id,
            comment.id,
            UpdateCommentParam {
                content: payload.content,
                visible: payload.visible.filter(|_| user.is_admin()),
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(updated.into_dto(user.is_admin()))))
}

#[utoipa::path(
    delete,
    path = "/api/comments/{comment_id}",
    tag = COMMENT_TAG,
    params(("comment_id" = i32, Path, description = "Comment id")),
    responses(
        (status = 200, description = "Comment deleted", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Neither the author nor an admin", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    session: Session,
    Path(comment_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;
    let comment_service = CommentService::new(&state.db);

    let comment = comment_service
        .find_by_id(comment_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;
    AuthGuard::check(&user, &[Permission::OwnerOrAdmin(comment.author_id)])?;

    comment_service.delete(user.id, comment.id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Comment deleted".to_string(),
        }),
    ))
}
