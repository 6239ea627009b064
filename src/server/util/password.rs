use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::{internal::InternalError, AppError};

/// Hashes a password with Argon2id and a random salt.
///
/// # Arguments
/// - `password` - Plain text password
///
/// # Returns
/// - `Ok(String)` - PHC formatted hash string
/// - `Err(AppError::InternalErr)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| InternalError::PasswordHash(e.to_string()))?
        .to_string();

    Ok(hash)
}

/// Checks a password against a stored PHC hash.
///
/// A stored value that is not a valid PHC string never matches; this is the case for
/// accounts whose password has been disabled.
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match or the stored hash is unusable
/// - `Err(AppError::InternalErr)` - Verification failed for another reason
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, AppError> {
    let parsed = match PasswordHash::new(password_hash) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!("Stored password hash could not be parsed: {}", e);
            return Ok(false);
        }
    };

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(InternalError::PasswordHash(e.to_string()).into()),
    }
}
