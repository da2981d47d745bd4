use tonic::Status;

use crate::inbound::errors::ApiError;

pub mod grpc_auth_server;
pub mod handlers;

pub use grpc_auth_server::AuthGrpcService;

impl From<ApiError> for Status {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidArgument(msg) => Status::invalid_argument(msg),
            ApiError::Conflict(msg) => Status::already_exists(msg),
            ApiError::NotFound(msg) => Status::not_found(msg),
            ApiError::Internal => Status::internal(err.message()),
        }
    }
}
