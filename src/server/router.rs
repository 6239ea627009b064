use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{admin, auth, comment, like, page, post, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Forum API", description = "Posts, comments, likes and moderation"),
    tags(
        (name = "auth", description = "Session login and logout"),
        (name = "user", description = "Registration and account management"),
        (name = "post", description = "Posts and tags"),
        (name = "comment", description = "Comments and their moderation"),
        (name = "like", description = "Post likes"),
        (name = "admin", description = "Statistics, moderation lists and the audit log"),
    )
)]
struct ApiDoc;

/// Builds the application router: JSON API, OpenAPI docs and HTML pages.
pub fn router() -> Router<AppState> {
    let (api, openapi) = OpenApiRouter::<AppState>::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        .routes(routes!(user::get_users, user::create_user))
        .routes(routes!(
            user::get_user_by_id,
            user::update_user,
            user::delete_user
        ))
        .routes(routes!(post::get_posts, post::create_post))
        .routes(routes!(
            post::get_post_by_id,
            post::update_post,
            post::delete_post
        ))
        .routes(routes!(comment::get_comments, comment::create_comment))
        .routes(routes!(comment::update_comment, comment::delete_comment))
        .routes(routes!(like::toggle_like))
        .routes(routes!(admin::get_stats))
        .routes(routes!(admin::get_all_posts))
        .routes(routes!(admin::get_audit_log))
        .split_for_parts();

    Router::new()
        .merge(api)
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi))
        .route("/", get(page::home))
        .route("/post/{slug}", get(page::post_page))
        .route("/auth/login", get(page::login_page))
        .route("/auth/register", get(page::register_page))
        .route("/profile", get(page::profile))
        .route("/dashboard/posts", get(page::dashboard_posts))
        .route("/admin", get(page::admin_dashboard))
        .route("/admin/users", get(page::admin_users))
        .route("/admin/posts", get(page::admin_posts))
        .route("/admin/comments", get(page::admin_comments))
        .route("/admin/audit", get(page::admin_audit))
        .fallback(page::fallback)
}
