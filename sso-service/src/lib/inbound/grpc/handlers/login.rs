use std::sync::Arc;

use tonic::Status;

use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::validation;
use crate::proto::LoginRequest;
use crate::proto::LoginResponse;

pub async fn login<S: AuthServicePort>(
    service: Arc<S>,
    request: LoginRequest,
) -> Result<LoginResponse, Status> {
    let command = validation::login_command(request.email, request.password, request.app_id)?;

    let token = service.login(command).await?;

    Ok(LoginResponse { token })
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use tonic::Code;

    use super::*;
    use crate::domain::auth::mocks::MockTestAppRepository;
    use crate::domain::auth::mocks::MockTestCredentialHasher;
    use crate::domain::auth::mocks::MockTestTokenIssuer;
    use crate::domain::auth::mocks::MockTestUserRepository;
    use crate::domain::auth::service::AuthService;

    // Mocks without expectations panic on any call.
    fn untouched_service() -> Arc<
        AuthService<
            MockTestUserRepository,
            MockTestAppRepository,
            MockTestCredentialHasher,
            MockTestTokenIssuer,
        >,
    > {
        let mut users = MockTestUserRepository::new();
        let mut apps = MockTestAppRepository::new();
        let mut hasher = MockTestCredentialHasher::new();
        let mut token_issuer = MockTestTokenIssuer::new();

        users.expect_find_by_email().times(0);
        apps.expect_find_by_id().times(0);
        hasher.expect_verify().times(0);
        token_issuer.expect_issue().times(0);

        Arc::new(AuthService::new(
            Arc::new(users),
            Arc::new(apps),
            Arc::new(hasher),
            Arc::new(token_issuer),
            Duration::hours(1),
        ))
    }

    #[tokio::test]
    async fn test_missing_fields_never_reach_engine() {
        let requests = [
            LoginRequest {
                email: String::new(),
                password: "pw".to_string(),
                app_id: 1,
            },
            LoginRequest {
                email: "a@example.com".to_string(),
                password: String::new(),
                app_id: 1,
            },
            LoginRequest {
                email: "a@example.com".to_string(),
                password: "pw".to_string(),
                app_id: 0,
            },
        ];

        for request in requests {
            let status = login(untouched_service(), request).await.unwrap_err();
            assert_eq!(status.code(), Code::InvalidArgument);
        }
    }
}
