//! Case query service

use std::sync::Arc;

use tracing::debug;

use core_kernel::UniquePropertyReferenceNumber;

use crate::error::CaseQueryError;
use crate::ports::CaseReader;
use crate::summary::CaseSummary;

/// Read-side service behind the case lookup endpoints
#[derive(Clone)]
pub struct CaseService {
    reader: Arc<dyn CaseReader>,
}

impl CaseService {
    /// Creates the service over a case reader
    pub fn new(reader: Arc<dyn CaseReader>) -> Self {
        Self { reader }
    }

    /// Returns the household cases recorded against a UPRN
    ///
    /// Cases of any other address type are dropped. The result keeps the
    /// reader's order and is empty, not an error, when nothing matches.
    ///
    /// # Errors
    ///
    /// Returns `CaseQueryError::Dependency` if the case reader fails
    pub async fn get_household_cases_by_uprn(
        &self,
        uprn: UniquePropertyReferenceNumber,
    ) -> Result<Vec<CaseSummary>, CaseQueryError> {
        debug!(%uprn, "Fetching case details by UPRN");

        let cases = self
            .reader
            .get_cases_by_uprn(uprn)
            .await
            .map_err(|source| CaseQueryError::Dependency { uprn, source })?;

        let summaries: Vec<CaseSummary> = cases
            .iter()
            .filter(|case| case.is_household())
            .map(CaseSummary::from)
            .collect();

        debug!(%uprn, count = summaries.len(), "HH case(s) retrieved for UPRN");
        Ok(summaries)
    }
}
