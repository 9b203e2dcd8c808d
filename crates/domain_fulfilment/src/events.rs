//! Outbound event contracts
//!
//! The JSON produced here is consumed by the fulfilment dispatch subsystem:
//!
//! ```json
//! {
//!   "event": { "type": "FULFILMENT_REQUESTED", "source": "RESPONDENT_HOME", "channel": "RH", ... },
//!   "payload": {
//!     "fulfilmentRequest": {
//!       "fulfilmentCode": "UACHHT1",
//!       "caseId": "bbd55984-0dbf-4499-bfa7-0aa4228700e9",
//!       "contact": { "telNo": "07700900000" }
//!     }
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};

use core_kernel::{CaseId, Channel, EventType, Header, IndividualCaseId, Source};

/// Contact details the fulfilment is sent to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tel_no: Option<String>,
}

impl Contact {
    /// Contact reachable only by telephone
    pub fn by_telephone(tel_no: impl Into<String>) -> Self {
        Self {
            tel_no: Some(tel_no.into()),
            ..Default::default()
        }
    }
}

/// Instruction to dispatch a fulfilment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FulfilmentRequest {
    pub fulfilment_code: String,
    pub case_id: CaseId,
    /// Set only when the product is addressed to an individual
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub individual_case_id: Option<IndividualCaseId>,
    pub contact: Contact,
}

/// Payload of an outbound event, keyed by payload kind on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventPayload {
    FulfilmentRequest(FulfilmentRequest),
}

/// Complete outbound event: header plus payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericEvent {
    pub event: Header,
    pub payload: EventPayload,
}

impl GenericEvent {
    /// Wraps a payload in a freshly stamped header
    pub fn new(event_type: EventType, source: Source, channel: Channel, payload: EventPayload) -> Self {
        Self {
            event: Header::new(event_type, source, channel),
            payload,
        }
    }
}
