use std::sync::Arc;

use tonic::Status;

use crate::credentials::ports::CredentialServicePort;
use crate::inbound::errors::ApiError;
use crate::inbound::validation::RegisterCommand;
use crate::proto::RegisterRequest;
use crate::proto::RegisterResponse;

pub async fn register(
    service: Arc<dyn CredentialServicePort>,
    request: RegisterRequest,
) -> Result<RegisterResponse, Status> {
    let command = RegisterCommand::new(request.email, request.password).map_err(ApiError::from)?;

    let user_id = service
        .register_new_user(&command.email, &command.password)
        .await
        .map_err(ApiError::from)?;

    Ok(RegisterResponse { user_id: user_id.0 })
}
