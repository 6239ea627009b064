//! Session-based authorization guard.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// A permission a route can demand from the current user.
pub enum Permission {
    /// The user must have the ADMIN role.
    Admin,
    /// The user must own the resource (the given user id) or be an ADMIN.
    OwnerOrAdmin(i32),
}

/// Resolves the current user from the session and checks permissions.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Returns the logged-in user, if any.
    ///
    /// Pages and public routes use this to adapt their output; a session pointing at
    /// a deleted or deactivated account is treated as anonymous.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Active user in session
    /// - `Ok(None)` - Anonymous, unknown or inactive user
    /// - `Err(AppError)` - Session or database failure
    pub async fn current_user(&self) -> Result<Option<User>, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Ok(None);
        };

        let user = UserRepository::new(self.db).find_by_id(user_id).await?;

        Ok(user.filter(|u| u.active))
    }

    /// Requires a logged-in, active user holding every listed permission.
    ///
    /// # Arguments
    /// - `permissions` - Permissions checked in order; the first failure is returned
    ///
    /// # Returns
    /// - `Ok(User)` - The authorized user
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in
    /// - `Err(AuthError::UserNotInDatabase)` - The session's user no longer exists
    /// - `Err(AuthError::UserInactive)` - The account was deactivated
    /// - `Err(AuthError::AccessDenied)` - A permission is missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if !user.active {
            return Err(AuthError::UserInactive(user_id).into());
        }

        Self::check(&user, permissions)?;

        Ok(user)
    }

    /// Checks permissions against an already loaded user.
    pub fn check(user: &User, permissions: &[Permission]) -> Result<(), AppError> {
        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "Admin role required".to_string(),
                        )
                        .into());
                    }
                }
                Permission::OwnerOrAdmin(owner_id) => {
                    if user.id != *owner_id && !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            format!("User is neither owner {} nor an admin", owner_id),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(())
    }
}
