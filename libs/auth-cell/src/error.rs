use thiserror::Error;

use shared_models::error::AppError;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid credentials. Access Denied.")]
    InvalidCredentials,

    #[error("Admin login is not configured")]
    LoginDisabled,

    #[error("Password hashing error: {0}")]
    Hashing(String),

    #[error("Token error: {0}")]
    Token(String),
}

impl From<argon2::password_hash::Error> for AuthError {
    fn from(err: argon2::password_hash::Error) -> Self {
        AuthError::Hashing(err.to_string())
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => AppError::Auth(err.to_string()),
            AuthError::LoginDisabled => AppError::Conflict(err.to_string()),
            AuthError::Hashing(_) | AuthError::Token(_) => AppError::Internal(err.to_string()),
        }
    }
}
