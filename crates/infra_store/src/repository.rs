//! Respondent data repository
//!
//! Case records live in the case bucket as camelCase JSON, keyed by case
//! id. UAC records live in the UAC bucket, keyed by UAC hash. The
//! repository is the store-backed `CaseReader`.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};

use core_kernel::{
    CaseId, DomainPort, HealthCheckResult, HealthCheckable, PortError,
    UniquePropertyReferenceNumber,
};
use domain_case::{CaseReader, CollectionCase, Uac};

use crate::store::CloudDataStore;

const UPRN_PATH: [&str; 2] = ["address", "uprn"];
const DEFAULT_UAC_BUCKET: &str = "uac_bucket";

/// Store-backed access to respondent data
#[derive(Clone)]
pub struct RespondentDataRepository {
    store: Arc<dyn CloudDataStore>,
    case_bucket: String,
    uac_bucket: String,
}

impl RespondentDataRepository {
    /// Creates a repository keeping cases in `case_bucket`
    pub fn new(store: Arc<dyn CloudDataStore>, case_bucket: impl Into<String>) -> Self {
        Self {
            store,
            case_bucket: case_bucket.into(),
            uac_bucket: DEFAULT_UAC_BUCKET.to_string(),
        }
    }

    /// Keeps UAC records in `uac_bucket` instead of the default
    pub fn with_uac_bucket(mut self, uac_bucket: impl Into<String>) -> Self {
        self.uac_bucket = uac_bucket.into();
        self
    }

    /// Name of the bucket holding case records
    pub fn case_bucket(&self) -> &str {
        &self.case_bucket
    }

    /// Name of the bucket holding UAC records
    pub fn uac_bucket(&self) -> &str {
        &self.uac_bucket
    }

    /// Stores a case, replacing any previous version
    ///
    /// # Errors
    ///
    /// Returns the store's error if the write fails
    #[instrument(skip(self, case), fields(case_id = %case.id))]
    pub async fn write_collection_case(&self, case: &CollectionCase) -> Result<(), PortError> {
        let json = serde_json::to_string(case)?;
        self.store
            .store_object(&self.case_bucket, &case.id.to_string(), json)
            .await?;
        debug!("Case stored");
        Ok(())
    }

    /// Stores a UAC under its hash, replacing any previous version
    ///
    /// # Errors
    ///
    /// * `PortError::Validation` - the UAC hash is empty
    /// * the store's error if the write fails
    #[instrument(skip(self, uac), fields(case_id = ?uac.case_id))]
    pub async fn write_uac(&self, uac: &Uac) -> Result<(), PortError> {
        if uac.uac_hash.trim().is_empty() {
            return Err(PortError::Validation {
                message: "UAC hash must not be empty".to_string(),
                field: Some("uacHash".to_string()),
            });
        }
        let json = serde_json::to_string(uac)?;
        self.store
            .store_object(&self.uac_bucket, &uac.uac_hash, json)
            .await?;
        debug!("UAC stored");
        Ok(())
    }
}

fn parse_case(json: &str) -> Result<CollectionCase, PortError> {
    serde_json::from_str(json)
        .map_err(|e| PortError::transformation(format!("Stored case is malformed: {e}")))
}

impl DomainPort for RespondentDataRepository {}

#[async_trait]
impl HealthCheckable for RespondentDataRepository {
    async fn health_check(&self) -> HealthCheckResult {
        self.store.health_check().await
    }
}

#[async_trait]
impl CaseReader for RespondentDataRepository {
    #[instrument(skip(self))]
    async fn get_case(&self, id: CaseId) -> Result<Option<CollectionCase>, PortError> {
        self.store
            .retrieve_object(&self.case_bucket, &id.to_string())
            .await?
            .as_deref()
            .map(parse_case)
            .transpose()
    }

    #[instrument(skip(self))]
    async fn get_cases_by_uprn(
        &self,
        uprn: UniquePropertyReferenceNumber,
    ) -> Result<Vec<CollectionCase>, PortError> {
        let documents = self
            .store
            .search(&self.case_bucket, &UPRN_PATH, &uprn.to_string())
            .await?;
        debug!(count = documents.len(), "Cases found for UPRN");

        documents.iter().map(|doc| parse_case(doc)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryDataStore;

    #[tokio::test]
    async fn test_malformed_case_is_transformation_error() {
        let store = Arc::new(InMemoryDataStore::new());
        let id = CaseId::new();
        store
            .store_object("case_bucket", &id.to_string(), r#"{"id":"not a case"}"#.to_string())
            .await
            .unwrap();
        let repository = RespondentDataRepository::new(store, "case_bucket");

        let err = repository.get_case(id).await.unwrap_err();
        assert!(matches!(err, PortError::Transformation { .. }));
    }

    #[tokio::test]
    async fn test_missing_case_is_none() {
        let repository =
            RespondentDataRepository::new(Arc::new(InMemoryDataStore::new()), "case_bucket");
        assert_eq!(repository.get_case(CaseId::new()).await.unwrap(), None);
        assert_eq!(repository.case_bucket(), "case_bucket");
        assert_eq!(repository.uac_bucket(), DEFAULT_UAC_BUCKET);
    }
}
