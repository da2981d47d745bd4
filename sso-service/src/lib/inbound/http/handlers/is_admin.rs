use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiSuccess;
use crate::inbound::errors::ApiError;
use crate::inbound::http::router::AppState;
use crate::inbound::validation::IsAdminQuery;

pub async fn is_admin(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<ApiSuccess<IsAdminResponseData>, ApiError> {
    let query = IsAdminQuery::new(user_id)?;

    let is_admin = state.credential_service.is_admin(query.user_id).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        IsAdminResponseData {
            user_id: query.user_id.0,
            is_admin,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IsAdminResponseData {
    pub user_id: i64,
    pub is_admin: bool,
}
