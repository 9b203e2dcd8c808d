//! Inbound events from case management
//!
//! Case management announces every new or changed case and every UAC it
//! issues or updates. Each event carries the whole record, which replaces
//! whatever is stored under the same key.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use core_kernel::{EventType, Header, PortError};
use domain_case::{CollectionCase, Uac};

use crate::repository::RespondentDataRepository;

/// Payload of a case event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CasePayload {
    pub collection_case: CollectionCase,
}

/// Envelope of a `CASE_CREATED` or `CASE_UPDATED` event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseEvent {
    pub event: Header,
    pub payload: CasePayload,
}

/// Payload of a UAC event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UacPayload {
    pub uac: Uac,
}

/// Envelope of a `UAC_UPDATED` event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UacEvent {
    pub event: Header,
    pub payload: UacPayload,
}

fn expect_event_type(header: &Header, accepted: &[EventType]) -> Result<(), PortError> {
    if accepted.contains(&header.event_type) {
        return Ok(());
    }
    warn!(
        event_type = ?header.event_type,
        transaction_id = %header.transaction_id,
        "Rejecting event of unexpected type"
    );
    Err(PortError::Validation {
        message: format!("Unexpected event type {:?}", header.event_type),
        field: Some("event.type".to_string()),
    })
}

/// Writes cases from inbound case events to the repository
#[derive(Clone)]
pub struct CaseEventReceiver {
    repository: RespondentDataRepository,
}

impl CaseEventReceiver {
    pub fn new(repository: RespondentDataRepository) -> Self {
        Self { repository }
    }

    /// Stores the case carried by the event
    ///
    /// # Errors
    ///
    /// * `PortError::Validation` - the event is not a case event
    /// * any error from the repository write
    pub async fn accept_case_event(&self, event: CaseEvent) -> Result<(), PortError> {
        let header = &event.event;
        expect_event_type(header, &[EventType::CaseCreated, EventType::CaseUpdated])?;

        let case = &event.payload.collection_case;
        info!(
            case_id = %case.id,
            transaction_id = %header.transaction_id,
            "Storing case from case event"
        );
        self.repository.write_collection_case(case).await
    }

    /// Parses a serialized envelope and stores its case
    ///
    /// # Errors
    ///
    /// * `PortError::Transformation` - the message is not a case event
    /// * anything `accept_case_event` returns
    pub async fn accept_message(&self, message: &str) -> Result<(), PortError> {
        let event: CaseEvent = serde_json::from_str(message)?;
        self.accept_case_event(event).await
    }
}

/// Writes UACs from inbound UAC events to the repository
#[derive(Clone)]
pub struct UacEventReceiver {
    repository: RespondentDataRepository,
}

impl UacEventReceiver {
    pub fn new(repository: RespondentDataRepository) -> Self {
        Self { repository }
    }

    /// Stores the UAC carried by the event under its hash
    ///
    /// # Errors
    ///
    /// * `PortError::Validation` - the event is not a UAC event, or the
    ///   UAC hash is empty
    /// * any error from the repository write
    pub async fn accept_uac_event(&self, event: UacEvent) -> Result<(), PortError> {
        let header = &event.event;
        expect_event_type(header, &[EventType::UacUpdated])?;

        let uac = &event.payload.uac;
        info!(
            case_id = ?uac.case_id,
            transaction_id = %header.transaction_id,
            "Storing UAC from UAC event"
        );
        self.repository.write_uac(uac).await
    }

    /// Parses a serialized envelope and stores its UAC
    ///
    /// # Errors
    ///
    /// * `PortError::Transformation` - the message is not a UAC event
    /// * anything `accept_uac_event` returns
    pub async fn accept_message(&self, message: &str) -> Result<(), PortError> {
        let event: UacEvent = serde_json::from_str(message)?;
        self.accept_uac_event(event).await
    }
}
