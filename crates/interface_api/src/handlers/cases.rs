//! Case query handlers

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use core_kernel::UniquePropertyReferenceNumber;
use domain_case::CaseSummary;

use crate::{error::ApiError, AppState};

/// Lists the household cases at a property
pub async fn get_household_cases_by_uprn(
    State(state): State<AppState>,
    Path(uprn): Path<String>,
) -> Result<Json<Vec<CaseSummary>>, ApiError> {
    let uprn: UniquePropertyReferenceNumber = uprn.parse()?;
    info!(%uprn, "Household cases requested");

    let cases = state.case_service.get_household_cases_by_uprn(uprn).await?;
    Ok(Json(cases))
}
