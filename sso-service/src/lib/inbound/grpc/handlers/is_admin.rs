use std::sync::Arc;

use tonic::Status;

use crate::credentials::ports::CredentialServicePort;
use crate::inbound::errors::ApiError;
use crate::inbound::validation::IsAdminQuery;
use crate::proto::IsAdminRequest;
use crate::proto::IsAdminResponse;

pub async fn is_admin(
    service: Arc<dyn CredentialServicePort>,
    request: IsAdminRequest,
) -> Result<IsAdminResponse, Status> {
    let query = IsAdminQuery::new(request.user_id).map_err(ApiError::from)?;

    let is_admin = service
        .is_admin(query.user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(IsAdminResponse { is_admin })
}
