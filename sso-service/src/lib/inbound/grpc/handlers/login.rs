use std::sync::Arc;

use tonic::Status;

use crate::credentials::ports::CredentialServicePort;
use crate::inbound::errors::ApiError;
use crate::inbound::validation::LoginCommand;
use crate::proto::LoginRequest;
use crate::proto::LoginResponse;

pub async fn login(
    service: Arc<dyn CredentialServicePort>,
    request: LoginRequest,
) -> Result<LoginResponse, Status> {
    let command = LoginCommand::new(request.email, request.password, request.app_id)
        .map_err(ApiError::from)?;

    let token = service
        .login(&command.email, &command.password, command.app_id)
        .await
        .map_err(ApiError::from)?;

    Ok(LoginResponse { token })
}
