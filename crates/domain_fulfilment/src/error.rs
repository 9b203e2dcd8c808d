//! Fulfilment domain errors

use thiserror::Error;

use core_kernel::{CaseId, PortError};
use domain_product::{DeliveryChannel, Region};

/// Coarse classification used by callers to pick a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The referenced case does not exist
    NotFound,
    /// The request cannot be satisfied as asked
    BadRequest,
    /// A collaborator failed
    DependencyFailure,
}

/// Errors raised while resolving and publishing a fulfilment
#[derive(Debug, Error)]
pub enum FulfilmentError {
    /// No case exists with the requested id
    #[error("Case not found: {0}")]
    CaseNotFound(CaseId),

    /// The stored region of the case is not a known region code
    #[error("Case {case_id} has unrecognised region '{region}'")]
    InvalidRegion { case_id: CaseId, region: String },

    /// The catalog has nothing for this case, channel and code
    #[error("Compatible product cannot be found for code '{fulfilment_code}' in region {region} by {delivery_channel:?}")]
    NoCompatibleProduct {
        fulfilment_code: String,
        region: Region,
        delivery_channel: DeliveryChannel,
    },

    /// A collaborator failed during the named step
    #[error("Failed during {step} for case {case_id}: {source}")]
    Dependency {
        step: &'static str,
        case_id: CaseId,
        #[source]
        source: PortError,
    },
}

impl FulfilmentError {
    /// Returns the classification of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            FulfilmentError::CaseNotFound(_) => ErrorKind::NotFound,
            FulfilmentError::InvalidRegion { .. } | FulfilmentError::NoCompatibleProduct { .. } => {
                ErrorKind::BadRequest
            }
            FulfilmentError::Dependency { .. } => ErrorKind::DependencyFailure,
        }
    }

    pub(crate) fn dependency(step: &'static str, case_id: CaseId) -> impl FnOnce(PortError) -> Self {
        move |source| FulfilmentError::Dependency { step, case_id, source }
    }
}
