//! Server-rendered HTML pages.
//!
//! Pages compose the same services as the JSON API. Forms on these pages submit
//! JSON to the API through the script in `base.html`.

use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Redirect, Response},
};
use minijinja::context;
use serde::Deserialize;
use tower_sessions::Session;

use crate::server::{
    controller::{clamp_entries, default_entries, default_page, non_blank, page_number},
    error::AppError,
    middleware::auth::AuthGuard,
    model::{
        audit::GetAuditParam,
        post::{GetPostsParam, PostScope},
        user::{GetAllUsersParam, User},
    },
    service::{
        admin::AdminService, audit::AuditService, comment::CommentService, post::PostService,
        user::UserService,
    },
    state::AppState,
    template::render,
};

const LOGIN_PATH: &str = "/auth/login";

#[derive(Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
    pub search: Option<String>,
    pub tag: Option<String>,
    pub action: Option<String>,
    pub entity: Option<String>,
}

/// Resolves the user a protected page is rendered for.
///
/// Anonymous visitors are sent to the login page; logged-in users without the
/// admin role are sent home when `admin_only` is set.
async fn page_user(
    state: &AppState,
    session: &Session,
    admin_only: bool,
) -> Result<Result<User, Redirect>, AppError> {
    let Some(user) = AuthGuard::new(&state.db, session).current_user().await? else {
        return Ok(Err(Redirect::to(LOGIN_PATH)));
    };

    if admin_only && !user.is_admin() {
        return Ok(Err(Redirect::to("/")));
    }

    Ok(Ok(user))
}

fn not_found(state: &AppState, viewer: Option<&User>, message: &str) -> Result<Response, AppError> {
    let html = render(
        &state.templates,
        "not_found.html",
        context! {
            viewer => viewer.cloned().map(User::into_dto),
            message => message,
        },
    )?;

    Ok((StatusCode::NOT_FOUND, html).into_response())
}

/// GET / - public feed with search, tag filter and pagination
pub async fn home(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<PageQuery>,
) -> Result<Response, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).current_user().await?;
    let show_email = viewer.as_ref().is_some_and(|u| u.is_admin());

    let search = non_blank(query.search);
    let tag = non_blank(query.tag);

    let posts = PostService::new(&state.db)
        .get_paginated(GetPostsParam {
            scope: PostScope::Public,
            page: page_number(query.page)?,
            per_page: clamp_entries(query.entries),
            search: search.clone(),
            tag: tag.clone(),
        })
        .await?;

    let html = render(
        &state.templates,
        "home.html",
        context! {
            viewer => viewer.map(User::into_dto),
            posts => posts.into_dto(show_email),
            search => search,
            tag => tag,
        },
    )?;

    Ok(html.into_response())
}

/// GET /post/{slug} - post detail with comments, comment form and like button
pub async fn post_page(
    State(state): State<AppState>,
    session: Session,
    Path(slug): Path<String>,
) -> Result<Response, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).current_user().await?;
    let post_service = PostService::new(&state.db);

    let Some(post) = post_service
        .find_by_slug(&slug)
        .await?
        .filter(|post| PostService::can_view(post, viewer.as_ref()))
    else {
        return not_found(&state, viewer.as_ref(), "Post not found");
    };

    let show_email = viewer.as_ref().is_some_and(|u| u.is_admin());
    let can_edit = viewer
        .as_ref()
        .is_some_and(|u| u.is_admin() || u.id == post.author_id);
    let detail = post_service.get_detail(post, viewer.as_ref()).await?;

    let html = render(
        &state.templates,
        "post.html",
        context! {
            viewer => viewer.map(User::into_dto),
            post => detail.into_dto(show_email),
            can_edit => can_edit,
        },
    )?;

    Ok(html.into_response())
}

/// GET /auth/login
pub async fn login_page(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, AppError> {
    if AuthGuard::new(&state.db, &session).current_user().await?.is_some() {
        return Ok(Redirect::to("/").into_response());
    }

    let html = render(&state.templates, "login.html", context! { viewer => () })?;

    Ok(html.into_response())
}

/// GET /auth/register
pub async fn register_page(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, AppError> {
    if AuthGuard::new(&state.db, &session).current_user().await?.is_some() {
        return Ok(Redirect::to("/").into_response());
    }

    let html = render(&state.templates, "register.html", context! { viewer => () })?;

    Ok(html.into_response())
}

/// GET /profile - the logged-in user's account with counters
pub async fn profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, AppError> {
    let user = match page_user(&state, &session, false).await? {
        Ok(user) => user,
        Err(redirect) => return Ok(redirect.into_response()),
    };

    let Some(details) = UserService::new(&state.db).get_with_counts(user.id).await? else {
        return not_found(&state, Some(&user), "User not found");
    };

    let html = render(
        &state.templates,
        "profile.html",
        context! {
            viewer => user.into_dto(),
            profile => details.into_dto(),
        },
    )?;

    Ok(html.into_response())
}

/// GET /dashboard/posts - every post of the logged-in user, drafts included
pub async fn dashboard_posts(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<PageQuery>,
) -> Result<Response, AppError> {
    let user = match page_user(&state, &session, false).await? {
        Ok(user) => user,
        Err(redirect) => return Ok(redirect.into_response()),
    };

    let posts = PostService::new(&state.db)
        .get_paginated(GetPostsParam {
            scope: PostScope::Author(user.id),
            page: page_number(query.page)?,
            per_page: clamp_entries(query.entries),
            search: None,
            tag: None,
        })
        .await?;

    let html = render(
        &state.templates,
        "dashboard_posts.html",
        context! {
            posts => posts.into_dto(user.is_admin()),
            viewer => user.into_dto(),
        },
    )?;

    Ok(html.into_response())
}

/// GET /admin - forum statistics
pub async fn admin_dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, AppError> {
    let user = match page_user(&state, &session, true).await? {
        Ok(user) => user,
        Err(redirect) => return Ok(redirect.into_response()),
    };

    let stats = AdminService::new(&state.db).stats().await?;

    let html = render(
        &state.templates,
        "admin.html",
        context! {
            viewer => user.into_dto(),
            stats => stats.into_dto(),
        },
    )?;

    Ok(html.into_response())
}

/// GET /admin/users
pub async fn admin_users(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<PageQuery>,
) -> Result<Response, AppError> {
    let user = match page_user(&state, &session, true).await? {
        Ok(user) => user,
        Err(redirect) => return Ok(redirect.into_response()),
    };

    let search = non_blank(query.search);
    let users = UserService::new(&state.db)
        .get_all_users(GetAllUsersParam {
            page: page_number(query.page)?,
            per_page: clamp_entries(query.entries),
            search: search.clone(),
        })
        .await?;

    let html = render(
        &state.templates,
        "admin_users.html",
        context! {
            viewer => user.into_dto(),
            users => users.into_dto(),
            search => search,
        },
    )?;

    Ok(html.into_response())
}

/// GET /admin/posts
pub async fn admin_posts(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<PageQuery>,
) -> Result<Response, AppError> {
    let user = match page_user(&state, &session, true).await? {
        Ok(user) => user,
        Err(redirect) => return Ok(redirect.into_response()),
    };

    let search = non_blank(query.search);
    let posts = PostService::new(&state.db)
        .get_paginated(GetPostsParam {
            scope: PostScope::All,
            page: page_number(query.page)?,
            per_page: clamp_entries(query.entries),
            search: search.clone(),
            tag: None,
        })
        .await?;

    let html = render(
        &state.templates,
        "admin_posts.html",
        context! {
            viewer => user.into_dto(),
            posts => posts.into_dto(true),
            search => search,
        },
    )?;

    Ok(html.into_response())
}

/// GET /admin/comments
pub async fn admin_comments(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<PageQuery>,
) -> Result<Response, AppError> {
    let user = match page_user(&state, &session, true).await? {
        Ok(user) => user,
        Err(redirect) => return Ok(redirect.into_response()),
    };

    let comments = CommentService::new(&state.db)
        .get_all_paginated(page_number(query.page)?, clamp_entries(query.entries))
        .await?;

    let html = render(
        &state.templates,
        "admin_comments.html",
        context! {
            viewer => user.into_dto(),
            comments => comments.into_dto(true),
        },
    )?;

    Ok(html.into_response())
}

/// GET /admin/audit
pub async fn admin_audit(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<PageQuery>,
) -> Result<Response, AppError> {
    let user = match page_user(&state, &session, true).await? {
        Ok(user) => user,
        Err(redirect) => return Ok(redirect.into_response()),
    };

    let action = non_blank(query.action);
    let entity = non_blank(query.entity);
    let search = non_blank(query.search);

    let entries = AuditService::new(&state.db)
        .get_paginated(GetAuditParam {
            page: page_number(query.page)?,
            per_page: clamp_entries(query.entries),
            action: action.clone(),
            entity: entity.clone(),
            search: search.clone(),
        })
        .await?;

    let html = render(
        &state.templates,
        "admin_audit.html",
        context! {
            viewer => user.into_dto(),
            audit => entries.into_dto(),
            action => action,
            entity => entity,
            search => search,
        },
    )?;

    Ok(html.into_response())
}

/// Fallback for unknown paths: JSON under `/api`, the 404 page elsewhere.
pub async fn fallback(
    State(state): State<AppState>,
    session: Session,
    uri: Uri,
) -> Result<Response, AppError> {
    if uri.path().starts_with("/api/") {
        return Err(AppError::NotFound("Not found".to_string()));
    }

    let viewer = AuthGuard::new(&state.db, &session).current_user().await?;

    not_found(&state, viewer.as_ref(), "Page not found")
}
