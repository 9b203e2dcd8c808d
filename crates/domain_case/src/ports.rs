//! Case Domain Ports
//!
//! The `CaseReader` port is the only way the services reach case records.
//! Implementations:
//!
//! - **Repository Adapter**: `infra_store::RespondentDataRepository`, backed
//!   by the object store
//! - **Mock Adapter**: in-memory reader for tests
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_case::ports::CaseReader;
//! use std::sync::Arc;
//!
//! pub struct CaseService {
//!     reader: Arc<dyn CaseReader>,
//! }
//! ```

use async_trait::async_trait;

use core_kernel::{CaseId, DomainPort, HealthCheckable, PortError, UniquePropertyReferenceNumber};

use crate::case::CollectionCase;

/// Read access to the case store
#[async_trait]
pub trait CaseReader: DomainPort + HealthCheckable {
    /// Retrieves a case by its identifier
    ///
    /// # Returns
    ///
    /// `Ok(None)` when no case exists with that identifier. Errors are
    /// reserved for failures of the store itself.
    async fn get_case(&self, id: CaseId) -> Result<Option<CollectionCase>, PortError>;

    /// Retrieves every case recorded against a UPRN, in store order
    async fn get_cases_by_uprn(
        &self,
        uprn: UniquePropertyReferenceNumber,
    ) -> Result<Vec<CollectionCase>, PortError>;
}

/// Mock implementation of CaseReader for testing
///
/// Keeps cases in insertion order and counts lookups so tests can assert
/// which collaborators were consulted.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use core_kernel::HealthCheckResult;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use tokio::sync::RwLock;

    /// In-memory mock implementation of CaseReader
    #[derive(Debug, Default)]
    pub struct MockCaseReader {
        cases: RwLock<Vec<CollectionCase>>,
        lookups: AtomicUsize,
        unavailable: AtomicBool,
    }

    impl MockCaseReader {
        /// Creates an empty reader
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a reader pre-populated with cases
        pub fn with_cases(cases: Vec<CollectionCase>) -> Self {
            Self {
                cases: RwLock::new(cases),
                ..Default::default()
            }
        }

        /// Makes every subsequent lookup fail as if the store were down
        pub fn set_unavailable(&self, unavailable: bool) {
            self.unavailable.store(unavailable, Ordering::SeqCst);
        }

        /// Number of lookups served so far
        pub fn lookups(&self) -> usize {
            self.lookups.load(Ordering::SeqCst)
        }

        fn check_available(&self) -> Result<(), PortError> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            if self.unavailable.load(Ordering::SeqCst) {
                return Err(PortError::unavailable("case store"));
            }
            Ok(())
        }
    }

    impl DomainPort for MockCaseReader {}

    #[async_trait]
    impl HealthCheckable for MockCaseReader {
        async fn health_check(&self) -> HealthCheckResult {
            if self.unavailable.load(Ordering::SeqCst) {
                HealthCheckResult::unhealthy("mock-case-reader", "marked unavailable")
            } else {
                HealthCheckResult::healthy("mock-case-reader")
            }
        }
    }

    #[async_trait]
    impl CaseReader for MockCaseReader {
        async fn get_case(&self, id: CaseId) -> Result<Option<CollectionCase>, PortError> {
            self.check_available()?;
            Ok(self.cases.read().await.iter().find(|c| c.id == id).cloned())
        }

        async fn get_cases_by_uprn(
            &self,
            uprn: UniquePropertyReferenceNumber,
        ) -> Result<Vec<CollectionCase>, PortError> {
            self.check_available()?;
            Ok(self
                .cases
                .read()
                .await
                .iter()
                .filter(|c| c.address.uprn == Some(uprn))
                .cloned()
                .collect())
        }
    }
}
