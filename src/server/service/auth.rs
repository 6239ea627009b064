use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::user::normalize_email,
    util::password::verify_password,
};

/// Service for email/password authentication.
pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks login credentials.
    ///
    /// Unknown emails, wrong passwords and deactivated accounts all fail the same way.
    ///
    /// # Arguments
    /// - `email` - Email as typed by the user
    /// - `password` - Plain text password
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials valid and account active
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Login refused
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let credentials = UserRepository::new(self.db)
            .find_credentials_by_email(&normalize_email(email))
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(password, &credentials.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        if !credentials.user.active {
            tracing::debug!("Refused login for deactivated user {}", credentials.user.id);
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(credentials.user)
    }
}
