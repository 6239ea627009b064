use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleDto {
    User,
    Admin,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct UserDto {
    pub id: i32,
    pub name: Option<String>,
    pub email: String,
    pub role: RoleDto,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// User with activity counters, used by the admin listing and the profile view.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct UserDetailDto {
    pub id: i32,
    pub name: Option<String>,
    pub email: String,
    pub role: RoleDto,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub post_count: u64,
    pub comment_count: u64,
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct PaginatedUsersDto {
    pub users: Vec<UserDetailDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Public author information attached to posts, comments and audit entries.
///
/// The email is only filled in when the viewer is an administrator.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct AuthorDto {
    pub id: i32,
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// New account body. `role` is honored only for administrator-created accounts
/// and ignored on public registration.
#[derive(Deserialize, Validate, ToSchema, Debug)]
pub struct CreateUserDto {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: Option<String>,
    #[validate(email(message = "Invalid email"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    pub role: Option<RoleDto>,
}

#[derive(Deserialize, Validate, ToSchema, Debug, Default)]
pub struct UpdateUserDto {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: Option<String>,
    #[validate(email(message = "Invalid email"))]
    pub email: Option<String>,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: Option<String>,
    pub role: Option<RoleDto>,
    pub active: Option<bool>,
}

#[derive(Deserialize, Validate, ToSchema, Debug)]
pub struct LoginDto {
    #[validate(email(message = "Invalid email"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}
