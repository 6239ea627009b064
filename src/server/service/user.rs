//! User service for business logic.
//!
//! This module provides the `UserService` for registration, administrator-driven
//! account management and the profile counters. Emails are stored trimmed and
//! lowercased; names go through the text sanitizer.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{comment::CommentRepository, post::PostRepository, user::UserRepository},
    error::AppError,
    model::{
        audit::{AuditAction, AuditEntity},
        page_count,
        user::{
            CreateUserParam, GetAllUsersParam, InsertUserParam, PaginatedUsers, UpdateUserParam,
            User, UserChanges, UserWithCounts,
        },
    },
    service::{audit::AuditService, is_unique_violation},
    util::{password::hash_password, sanitize::sanitize_text},
};

const EMAIL_TAKEN: &str = "Email already registered";

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an account without auditing, used by public registration and startup.
    ///
    /// # Arguments
    /// - `param` - Account fields with the plain text password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - Email already registered
    /// - `Err(AppError::InternalErr)` - Password hashing failed
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn register(&self, param: CreateUserParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let email = normalize_email(&param.email);
        if user_repo.email_taken(&email, None).await? {
            return Err(AppError::BadRequest(EMAIL_TAKEN.to_string()));
        }

        let name = param.name.as_deref().map(sanitize_text).filter(|n| !n.is_empty());
        let password_hash = hash_password(&param.password)?;

        let user = user_repo
            .create(InsertUserParam {
                name,
                email,
                password_hash,
                role: param.role,
            })
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    AppError::BadRequest(EMAIL_TAKEN.to_string())
                } else {
                    e.into()
                }
            })?;

        tracing::info!("Registered user {} ({:?})", user.id, user.role);

        Ok(user)
    }

    /// Creates an account on behalf of an administrator and records it in the audit log.
    pub async fn create(&self, actor_id: i32, param: CreateUserParam) -> Result<User, AppError> {
        let user = self.register(param).await?;

        AuditService::new(self.db)
            .record(actor_id, AuditAction::Create, AuditEntity::User, user.id)
            .await;

        Ok(user)
    }

    pub async fn get_user(&self, user_id: i32) -> Result<Option<User>, AppError> {
        Ok(UserRepository::new(self.db).find_by_id(user_id).await?)
    }

    /// Retrieves a user with their post and comment counts.
    ///
    /// # Returns
    /// - `Ok(Some(UserWithCounts))` - User found
    /// - `Ok(None)` - No user with this id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_with_counts(&self, user_id: i32) -> Result<Option<UserWithCounts>, AppError> {
        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Ok(None);
        };

        Ok(Some(self.with_counts(user).await?))
    }

    /// Retrieves users with pagination, newest first.
    ///
    /// # Arguments
    /// - `param` - Page, page size and optional name/email search
    ///
    /// # Returns
    /// - `Ok(PaginatedUsers)` - Users with counts for the requested page
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all_users(&self, param: GetAllUsersParam) -> Result<PaginatedUsers, AppError> {
        let search = param.search.as_deref().map(str::trim).filter(|s| !s.is_empty());

        let (users, total) = UserRepository::new(self.db)
            .get_all_paginated(param.page, param.per_page, search)
            .await?;

        let mut with_counts = Vec::with_capacity(users.len());
        for user in users {
            with_counts.push(self.with_counts(user).await?);
        }

        Ok(PaginatedUsers {
            users: with_counts,
            total,
            page: param.page,
            per_page: param.per_page,
            total_pages: page_count(total, param.per_page),
        })
    }

    /// Applies a partial update to a user and records it in the audit log.
    ///
    /// Callers are responsible for stripping fields the actor may not change.
    ///
    /// # Arguments
    /// - `actor_id` - User performing the update
    /// - `user_id` - User being updated
    /// - `param` - Fields to change
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with this id
    /// - `Err(AppError::BadRequest)` - Email in use by another user, or name empty after sanitizing
    pub async fn update(
        &self,
        actor_id: i32,
        user_id: i32,
        param: UpdateUserParam,
    ) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let email = match param.email {
            Some(email) => {
                let email = normalize_email(&email);
                if user_repo.email_taken(&email, Some(user_id)).await? {
                    return Err(AppError::BadRequest("Email already in use".to_string()));
                }
                Some(email)
            }
            None => None,
        };

        let name = match param.name {
            Some(name) => {
                let name = sanitize_text(&name);
                if name.is_empty() {
                    return Err(AppError::BadRequest("Name cannot be empty".to_string()));
                }
                Some(name)
            }
            None => None,
        };

        let password_hash = param.password.as_deref().map(hash_password).transpose()?;

        let user = user_repo
            .update(
                user_id,
                UserChanges {
                    name,
                    email,
                    password_hash,
                    role: param.role,
                    active: param.active,
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        AuditService::new(self.db)
            .record(actor_id, AuditAction::Update, AuditEntity::User, user.id)
            .await;

        Ok(user)
    }

    /// Deletes a user and records it in the audit log.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::BadRequest)` - The actor tried to delete their own account
    /// - `Err(AppError::NotFound)` - No user with this id
    pub async fn delete(&self, actor_id: i32, user_id: i32) -> Result<(), AppError> {
        if actor_id == user_id {
            return Err(AppError::BadRequest(
                "You cannot delete your own account".to_string(),
            ));
        }

        if !UserRepository::new(self.db).delete(user_id).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        AuditService::new(self.db)
            .record(actor_id, AuditAction::Delete, AuditEntity::User, user_id)
            .await;

        Ok(())
    }

    async fn with_counts(&self, user: User) -> Result<UserWithCounts, AppError> {
        let post_count = PostRepository::new(self.db).count_by_author(user.id).await?;
        let comment_count = CommentRepository::new(self.db)
            .count_by_author(user.id)
            .await?;

        Ok(UserWithCounts {
            user,
            post_count,
            comment_count,
        })
    }
}

/// Canonical form used for storage and lookups.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
