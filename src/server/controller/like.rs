use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        like::{LikeToggleDto, ToggleLikeDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, extract::ValidatedJson},
        service::like::LikeService,
        state::AppState,
    },
};

/// Tag for grouping like endpoints in OpenAPI documentation
pub static LIKE_TAG: &str = "like";

/// Likes a post, or removes the like when the user already liked it.
#[utoipa::path(
    post,
    path = "/api/likes",
    tag = LIKE_TAG,
    request_body = ToggleLikeDto,
    responses(
        (status = 200, description = "Like toggled", body = LikeToggleDto),
        (status = 400, description = "Invalid data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn toggle_like(
    State(state): State<AppState>,
    session: Session,
    ValidatedJson(payload): ValidatedJson<ToggleLikeDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let toggle = LikeService::new(&state.db)
        .toggle(user.id, payload.post_id)
        .await?;

    Ok((StatusCode::OK, Json(toggle.into_dto())))
}
