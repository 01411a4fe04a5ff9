//! Password hashing with argon2.
//!
//! Hashes are stored in argon2's encoded form, which carries the salt and
//! parameters, so verification needs nothing but the stored string.

use crate::libs::error::AppError;
use crate::libs::messages::Message;
use uuid::Uuid;

pub fn hash(password: &str) -> Result<String, AppError> {
    // Every account gets its own random 16-byte salt.
    let salt = Uuid::new_v4();
    argon2::hash_encoded(password.as_bytes(), salt.as_bytes(), &argon2::Config::default())
        .map_err(|err| AppError::Internal(Message::PasswordHashFailed(err.to_string())))
}

pub fn verify(encoded: &str, password: &str) -> Result<bool, AppError> {
    argon2::verify_encoded(encoded, password.as_bytes()).map_err(|err| AppError::Internal(Message::PasswordHashFailed(err.to_string())))
}
