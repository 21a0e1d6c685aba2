use tonic::Status;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::errors::ErrorKind;
use crate::inbound::validation::ValidationError;

pub mod is_admin;
pub mod login;
pub mod register;

fn status_for(kind: ErrorKind, message: String) -> Status {
    match kind {
        ErrorKind::InvalidArgument => Status::invalid_argument(message),
        ErrorKind::InvalidCredentials => Status::unauthenticated(message),
        ErrorKind::AlreadyExists => Status::already_exists(message),
        ErrorKind::NotFound => Status::not_found(message),
        ErrorKind::Internal => Status::internal(message),
    }
}

impl From<AuthError> for Status {
    fn from(err: AuthError) -> Self {
        status_for(err.kind(), err.to_string())
    }
}

impl From<ValidationError> for Status {
    fn from(err: ValidationError) -> Self {
        status_for(err.kind(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use tonic::Code;

    use super::*;
    use crate::domain::auth::models::AppId;
    use crate::domain::auth::models::UserId;

    #[test]
    fn test_auth_error_codes() {
        assert_eq!(
            Status::from(AuthError::InvalidCredentials).code(),
            Code::Unauthenticated
        );
        assert_eq!(
            Status::from(AuthError::UserAlreadyExists("a@example.com".to_string())).code(),
            Code::AlreadyExists
        );
        assert_eq!(
            Status::from(AuthError::UserNotFound(UserId(1))).code(),
            Code::NotFound
        );

        let status = Status::from(AuthError::AppNotFound(AppId(4)));
        assert_eq!(status.code(), Code::Internal);
        assert_eq!(status.message(), "App not found: 4");
    }

    #[test]
    fn test_validation_error_code() {
        let status = Status::from(ValidationError::MissingField("email"));
        assert_eq!(status.code(), Code::InvalidArgument);
        assert_eq!(status.message(), "email required");
    }
}
