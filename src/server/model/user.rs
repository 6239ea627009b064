//! User domain models and parameters.
//!
//! Provides domain models for forum accounts and the parameter types used for
//! registration, administrator-driven creation, updates and listings.

use chrono::{DateTime, Utc};
use entity::user::Role;

use crate::model::user::{AuthorDto, PaginatedUsersDto, RoleDto, UserDetailDto, UserDto};

/// Forum account without its credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Optional display name.
    pub name: Option<String>,
    pub email: String,
    pub role: Role,
    /// Deactivated accounts cannot log in or act through an existing session.
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role.into(),
            active: self.active,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// The password hash is intentionally left behind.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            role: entity.role,
            active: entity.active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// User together with the stored password hash, only used for login.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

impl UserCredentials {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        let password_hash = entity.password_hash.clone();

        Self {
            user: User::from_entity(entity),
            password_hash,
        }
    }
}

/// Author summary attached to posts, comments and audit entries.
#[derive(Debug, Clone, PartialEq)]
pub struct UserSummary {
    pub id: i32,
    pub name: Option<String>,
    pub email: String,
}

impl UserSummary {
    /// Converts to the public author DTO.
    ///
    /// # Arguments
    /// - `show_email` - Whether the viewer may see the author's email (administrators only)
    pub fn into_dto(self, show_email: bool) -> AuthorDto {
        AuthorDto {
            id: self.id,
            name: self.name,
            email: show_email.then_some(self.email),
        }
    }

    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
        }
    }
}

/// User with the number of posts and comments they authored.
#[derive(Debug, Clone, PartialEq)]
pub struct UserWithCounts {
    pub user: User,
    pub post_count: u64,
    pub comment_count: u64,
}

impl UserWithCounts {
    pub fn into_dto(self) -> UserDetailDto {
        UserDetailDto {
            id: self.user.id,
            name: self.user.name,
            email: self.user.email,
            role: self.user.role.into(),
            active: self.user.active,
            created_at: self.user.created_at,
            post_count: self.post_count,
            comment_count: self.comment_count,
        }
    }
}

/// Paginated collection of users with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    /// Users for this page.
    pub users: Vec<UserWithCounts>,
    /// Total number of matching users across all pages.
    pub total: u64,
    /// Current page number, starting at 1.
    pub page: u64,
    /// Number of users per page.
    pub per_page: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self.users.into_iter().map(|u| u.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Parameters for creating an account, either through registration or by an administrator.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub name: Option<String>,
    pub email: String,
    /// Plain text password, hashed by the service.
    pub password: String,
    pub role: Role,
}

/// Row-level insert parameters, carrying the already hashed password.
#[derive(Debug, Clone)]
pub struct InsertUserParam {
    pub name: Option<String>,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Parameters for a partial user update.
///
/// `None` leaves the field unchanged. Controllers clear `email`, `role` and `active`
/// before calling the service when the caller is not an administrator.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParam {
    pub name: Option<String>,
    pub email: Option<String>,
    /// Plain text password, hashed by the service.
    pub password: Option<String>,
    pub role: Option<Role>,
    pub active: Option<bool>,
}

/// Column changes applied by the repository, with the password already hashed.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<Role>,
    pub active: Option<bool>,
}

/// Parameters for the administrator user listing.
#[derive(Debug, Clone)]
pub struct GetAllUsersParam {
    pub page: u64,
    pub per_page: u64,
    /// Case-insensitive match against name or email.
    pub search: Option<String>,
}

impl From<Role> for RoleDto {
    fn from(role: Role) -> Self {
        match role {
            Role::User => RoleDto::User,
            Role::Admin => RoleDto::Admin,
        }
    }
}

impl From<RoleDto> for Role {
    fn from(role: RoleDto) -> Self {
        match role {
            RoleDto::User => Role::User,
            RoleDto::Admin => Role::Admin,
        }
    }
}
