//! Fulfilment handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;
use validator::Validate;

use core_kernel::CaseId;

use crate::dto::fulfilment::{CaseSmsFulfilmentRequestDto, SmsFulfilmentRequestDto};
use crate::{error::ApiError, AppState};

/// Requests a fulfilment by SMS for the case named in the body
pub async fn fulfilment_request_by_sms(
    State(state): State<AppState>,
    Json(request): Json<SmsFulfilmentRequestDto>,
) -> Result<StatusCode, ApiError> {
    request.validate()?;
    info!(case_id = %request.case_id, fulfilment_code = %request.fulfilment_code, "SMS fulfilment requested");

    state
        .fulfilment_service
        .fulfilment_request_by_sms(request.into())
        .await?;

    Ok(StatusCode::OK)
}

/// Requests a fulfilment by SMS for the case named in the path
pub async fn case_fulfilment_request_by_sms(
    State(state): State<AppState>,
    Path(case_id): Path<CaseId>,
    Json(request): Json<CaseSmsFulfilmentRequestDto>,
) -> Result<StatusCode, ApiError> {
    request.validate()?;
    info!(%case_id, fulfilment_code = %request.fulfilment_code, "SMS fulfilment requested");

    state
        .fulfilment_service
        .fulfilment_request_by_sms(request.into_request(case_id))
        .await?;

    Ok(StatusCode::OK)
}
