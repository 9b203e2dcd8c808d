//! Case query errors

use thiserror::Error;

use core_kernel::{PortError, UniquePropertyReferenceNumber};

/// Errors raised by the case query service
#[derive(Debug, Error)]
pub enum CaseQueryError {
    /// The case reader failed while listing cases for a UPRN
    #[error("Case lookup failed for UPRN {uprn}: {source}")]
    Dependency {
        uprn: UniquePropertyReferenceNumber,
        #[source]
        source: PortError,
    },
}
