//! Page templates.
//!
//! Templates are compiled into the binary and loaded into a single minijinja
//! environment at startup.

use axum::response::Html;
use minijinja::Environment;
use serde::Serialize;

use crate::server::error::AppError;

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../../templates/base.html")),
    ("pager.html", include_str!("../../templates/pager.html")),
    ("admin_nav.html", include_str!("../../templates/admin_nav.html")),
    ("home.html", include_str!("../../templates/home.html")),
    ("post.html", include_str!("../../templates/post.html")),
    ("login.html", include_str!("../../templates/login.html")),
    ("register.html", include_str!("../../templates/register.html")),
    ("profile.html", include_str!("../../templates/profile.html")),
    (
        "dashboard_posts.html",
        include_str!("../../templates/dashboard_posts.html"),
    ),
    ("admin.html", include_str!("../../templates/admin.html")),
    ("admin_users.html", include_str!("../../templates/admin_users.html")),
    ("admin_posts.html", include_str!("../../templates/admin_posts.html")),
    (
        "admin_comments.html",
        include_str!("../../templates/admin_comments.html"),
    ),
    ("admin_audit.html", include_str!("../../templates/admin_audit.html")),
    ("not_found.html", include_str!("../../templates/not_found.html")),
];

/// Builds the template environment with every page registered.
///
/// # Returns
/// - `Ok(Environment)` - All templates parsed
/// - `Err(AppError::TemplateErr)` - A template has a syntax error
pub fn environment() -> Result<Environment<'static>, AppError> {
    let mut env = Environment::new();

    for (name, source) in TEMPLATES {
        env.add_template(name, source)?;
    }

    Ok(env)
}

/// Renders a registered template with the given context.
pub fn render<S: Serialize>(
    env: &Environment<'_>,
    name: &str,
    context: S,
) -> Result<Html<String>, AppError> {
    let template = env.get_template(name)?;

    Ok(Html(template.render(context)?))
}
