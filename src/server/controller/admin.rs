use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{admin::StatsDto, api::ErrorDto, audit::PaginatedAuditDto, post::PaginatedPostsDto},
    server::{
        controller::{clamp_entries, default_entries, default_page, non_blank, page_number},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            audit::GetAuditParam,
            post::{GetPostsParam, PostScope},
        },
        service::{admin::AdminService, audit::AuditService, post::PostService},
        state::AppState,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

#[derive(Deserialize, IntoParams)]
pub struct AdminPostsQuery {
    /// One-based page number, 1 when omitted.
    #[serde(default = "default_page")]
    pub page: u64,
    /// Page size, clamped to 1..=100.
    #[serde(default = "default_entries")]
    pub entries: u64,
    /// Case-insensitive match on title or content.
    pub search: Option<String>,
}

#[derive(Deserialize, IntoParams)]
pub struct AuditQuery {
    /// One-based page number, 1 when omitted.
    #[serde(default = "default_page")]
    pub page: u64,
    /// Page size, clamped to 1..=100.
    #[serde(default = "default_entries")]
    pub entries: u64,
    /// Exact action: `create`, `update` or `delete`.
    pub action: Option<String>,
    /// Exact entity: `user`, `post` or `comment`.
    pub entity: Option<String>,
    /// Actor name or email, or an entity id.
    pub search: Option<String>,
}

/// Returns forum-wide counters.
#[utoipa::path(
    get,
    path = "/api/admin/stats",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Forum statistics", body = StatsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stats(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let stats = AdminService::new(&state.db).stats().await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}

/// Lists every post regardless of status or visibility.
#[utoipa::path(
    get,
    path = "/api/admin/posts",
    tag = ADMIN_TAG,
    params(AdminPostsQuery),
    responses(
        (status = 200, description = "Page of posts", body = PaginatedPostsDto),
        (status = 400, description = "Page number out of range", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_posts(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<AdminPostsQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let posts = PostService::new(&state.db)
        .get_paginated(GetPostsParam {
            scope: PostScope::All,
            page: page_number(query.page)?,
            per_page: clamp_entries(query.entries),
            search: non_blank(query.search),
            tag: None,
        })
        .await?;

    Ok((StatusCode::OK, Json(posts.into_dto(true))))
}

/// Lists audit entries, newest first.
#[utoipa::path(
    get,
    path = "/api/admin/audit",
    tag = ADMIN_TAG,
    params(AuditQuery),
    responses(
        (status = 200, description = "Page of audit entries", body = PaginatedAuditDto),
        (status = 400, description = "Page number out of range", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_audit_log(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<AuditQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let entries = AuditService::new(&state.db)
        .get_paginated(GetAuditParam {
            page: page_number(query.page)?,
            per_page: clamp_entries(query.entries),
            action: non_blank(query.action),
            entity: non_blank(query.entity),
            search: non_blank(query.search),
        })
        .await?;

    Ok((StatusCode::OK, Json(entries.into_dto())))
}
