use thiserror::Error;

use crate::domain::auth::models::AppId;
use crate::domain::auth::models::UserId;

/// Outward failure category.
///
/// Transports map failures by kind only; the wrapped message is informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    InvalidCredentials,
    AlreadyExists,
    NotFound,
    Internal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "invalid_argument",
            ErrorKind::InvalidCredentials => "invalid_credentials",
            ErrorKind::AlreadyExists => "already_exists",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Internal => "internal",
        }
    }
}

/// Error for password hashing operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Password verification failed: {0}")]
    VerificationFailed(String),
}

/// Error for token issuance
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token signing failed: {0}")]
    SigningFailed(String),

    #[error("Application {0} has no usable signing secret")]
    InvalidSecret(AppId),
}

/// Error reported by the credential store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Unique constraint violated: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Top-level error for authentication engine operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    // Domain-level errors
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User already exists: {0}")]
    UserAlreadyExists(String),

    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("App not found: {0}")]
    AppNotFound(AppId),

    // Collaborator errors
    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl AuthError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidCredentials => ErrorKind::InvalidCredentials,
            AuthError::UserAlreadyExists(_) => ErrorKind::AlreadyExists,
            AuthError::UserNotFound(_) => ErrorKind::NotFound,
            AuthError::AppNotFound(_)
            | AuthError::Password(_)
            | AuthError::Token(_)
            | AuthError::DatabaseError(_) => ErrorKind::Internal,
        }
    }
}
