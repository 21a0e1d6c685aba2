use std::sync::Arc;

use tonic::Status;

use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::validation;
use crate::proto::RegisterRequest;
use crate::proto::RegisterResponse;

pub async fn register<S: AuthServicePort>(
    service: Arc<S>,
    request: RegisterRequest,
) -> Result<RegisterResponse, Status> {
    let command = validation::register_command(request.email, request.password)?;

    let user_id = service.register_new_user(command).await?;

    Ok(RegisterResponse { user_id: user_id.0 })
}
