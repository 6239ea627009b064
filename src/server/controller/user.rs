use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::user::Role;
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{CreateUserDto, PaginatedUsersDto, UpdateUserDto, UserDetailDto, UserDto},
    },
    server::{
        controller::{clamp_entries, default_entries, default_page, non_blank, page_number},
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            extract::ValidatedJson,
        },
        model::user::{CreateUserParam, GetAllUsersParam, UpdateUserParam},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

#[derive(Deserialize, IntoParams)]
pub struct CreateUserQuery {
    /// Public self-registration instead of administrator account creation.
    #[serde(default)]
    pub register: bool,
}

#[derive(Deserialize, IntoParams)]
pub struct UserListQuery {
    /// One-based page number, 1 when omitted.
    #[serde(default = "default_page")]
    pub page: u64,
    /// Page size, clamped to 1..=100.
    #[serde(default = "default_entries")]
    pub entries: u64,
    /// Case-insensitive match on name or email.
    pub search: Option<String>,
}

/// Creates an account.
///
/// With `?register=true` anyone may register a regular account; otherwise the caller
/// must be an administrator and may choose the role.
///
/// # Returns
/// - `201 Created` - The new account
/// - `400 Bad Request` - Invalid data or email already registered
/// - `401 Unauthorized` - Administrator creation without a session
/// - `403 Forbidden` - Administrator creation by a non-admin
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    params(CreateUserQuery),
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Invalid data or duplicate email", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<CreateUserQuery>,
    ValidatedJson(payload): ValidatedJson<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user_service = UserService::new(&state.db);

    let user = if query.register {
        user_service
            .register(CreateUserParam {
                name: payload.name,
                email: payload.email,
                password: payload.password,
                role: Role::User,
            })
            .await?
    } else {
        let admin = AuthGuard::new(&state.db, &session)
            .require(&[Permission::Admin])
            .await?;

        user_service
            .create(
                admin.id,
                CreateUserParam {
                    name: payload.name,
                    email: payload.email,
                    password: payload.password,
                    role: payload.role.map(Role::from).unwrap_or(Role::User),
                },
            )
            .await?
    };

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Lists users with their post and comment counts, newest first.
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(UserListQuery),
    responses(
        (status = 200, description = "Page of users", body = PaginatedUsersDto),
        (status = 400, description = "Page number out of range", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<UserListQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db)
        .get_all_users(GetAllUsersParam {
            page: page_number(query.page)?,
            per_page: clamp_entries(query.entries),
            search: non_blank(query.search),
        })
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto())))
}

/// Returns one user with counts. Users may read themselves, admins anyone.
#[utoipa::path(
    get,
    path = "/api/users/{user_id}",
    tag = USER_TAG,
    params(("user_id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User details", body = UserDetailDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Neither the user nor an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::OwnerOrAdmin(user_id)])
        .await?;

    let user = UserService::new(&state.db)
        .get_with_counts(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Partially updates a user.
///
/// Email, role and active flag are only applied when the caller is an administrator;
/// for everyone else those fields are silently dropped.
#[utoipa::path(
    patch,
    path = "/api/users/{user_id}",
    tag = USER_TAG,
    params(("user_id" = i32, Path, description = "User id")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 400, description = "Invalid data or email in use", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Neither the user nor an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session).require(&[]).await?;
    let user_service = UserService::new(&state.db);

    user_service
        .get_user(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    AuthGuard::check(&actor, &[Permission::OwnerOrAdmin(user_id)])?;

    let mut param = UpdateUserParam {
        name: payload.name,
        email: payload.email,
        password: payload.password,
        role: payload.role.map(Role::from),
        active: payload.active,
    };

    if !actor.is_admin() {
        param.email = None;
        param.role = None;
        param.active = None;
    }

    let user = user_service.update(actor.id, user_id, param).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Deletes a user. Administrators cannot delete themselves.
#[utoipa::path(
    delete,
    path = "/api/users/{user_id}",
    tag = USER_TAG,
    params(("user_id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted", body = MessageDto),
        (status = 400, description = "Attempt to delete own account", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    UserService::new(&state.db).delete(admin.id, user_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "User deleted".to_string(),
        }),
    ))
}
