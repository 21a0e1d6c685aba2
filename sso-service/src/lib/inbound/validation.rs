//! Request shape checks shared by the gRPC and HTTP adapters.
//!
//! Only field presence is checked here; anything failing never reaches the
//! authentication engine.

use thiserror::Error;

use crate::domain::auth::errors::ErrorKind;
use crate::domain::auth::models::AppId;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::Password;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::auth::models::UserId;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} required")]
    MissingField(&'static str),
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidArgument
    }
}

pub fn login_command(
    email: String,
    password: String,
    app_id: i64,
) -> Result<LoginCommand, ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::MissingField("email"));
    }
    if password.is_empty() {
        return Err(ValidationError::MissingField("password"));
    }
    if app_id == 0 {
        return Err(ValidationError::MissingField("app_id"));
    }

    Ok(LoginCommand::new(email, Password::new(password), AppId(app_id)))
}

pub fn register_command(
    email: String,
    password: String,
) -> Result<RegisterCommand, ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::MissingField("email"));
    }
    if password.is_empty() {
        return Err(ValidationError::MissingField("password"));
    }

    Ok(RegisterCommand::new(email, Password::new(password)))
}

pub fn user_id(user_id: i64) -> Result<UserId, ValidationError> {
    if user_id == 0 {
        return Err(ValidationError::MissingField("user_id"));
    }

    Ok(UserId(user_id))
}
