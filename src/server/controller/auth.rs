use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{LoginDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, extract::ValidatedJson, session::AuthSession},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Logs a user in with email and password.
///
/// The session id is cycled before the user id is stored.
///
/// # Returns
/// - `200 OK` - The logged-in user
/// - `400 Bad Request` - Malformed body
/// - `401 Unauthorized` - Unknown email, wrong password or inactive account
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 400, description = "Invalid data", body = ErrorDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    ValidatedJson(payload): ValidatedJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .login(&payload.email, &payload.password)
        .await?;

    let auth_session = AuthSession::new(&session);
    auth_session.cycle_id().await?;
    auth_session.set_user_id(user.id).await?;

    tracing::info!("User {} logged in", user.id);

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Clears the session.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Logged out".to_string(),
        }),
    ))
}

/// Returns the logged-in user.
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
