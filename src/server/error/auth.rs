use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID is stored in the session; the request is anonymous.
    #[error("Failed to find user ID in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    #[error("User {0} from session was not found in the database")]
    UserNotInDatabase(i32),

    /// The session references a deactivated account.
    #[error("User {0} is deactivated")]
    UserInactive(i32),

    /// Unknown email, wrong password or inactive account during login.
    ///
    /// All three cases share one message so the response does not reveal which
    /// emails are registered.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The user is authenticated but lacks the permission the route requires.
    #[error("User {0} was denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` / `UserInactive` → 401 Unauthorized
/// - `InvalidCredentials` → 401 Unauthorized with "Invalid email or password"
/// - `AccessDenied` → 403 Forbidden
///
/// All errors are logged at debug level for diagnostics while keeping client-facing
/// messages generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) | Self::UserInactive(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("Unauthorized")),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("Invalid email or password")),
            )
                .into_response(),
            Self::AccessDenied(_, _) => {
                (StatusCode::FORBIDDEN, Json(ErrorDto::new("Forbidden"))).into_response()
            }
        }
    }
}
