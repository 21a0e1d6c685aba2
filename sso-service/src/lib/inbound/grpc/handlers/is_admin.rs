use std::sync::Arc;

use tonic::Status;

use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::validation;
use crate::proto::IsAdminRequest;
use crate::proto::IsAdminResponse;

pub async fn is_admin<S: AuthServicePort>(
    service: Arc<S>,
    request: IsAdminRequest,
) -> Result<IsAdminResponse, Status> {
    let user_id = validation::user_id(request.user_id)?;

    let is_admin = service.is_admin(&user_id).await?;

    Ok(IsAdminResponse { is_admin })
}
