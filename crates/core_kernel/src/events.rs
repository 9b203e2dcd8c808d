//! Event envelope header shared by published and received events
//!
//! Every event on the transport carries an `event` header naming what
//! happened, which service raised it, and through which channel.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::identifiers::TransactionId;

/// What happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    FulfilmentRequested,
    CaseCreated,
    CaseUpdated,
    UacUpdated,
}

/// Which service raised the event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Source {
    RespondentHome,
    CaseService,
}

/// Logical origin channel of the event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    /// Respondent home
    #[serde(rename = "RH")]
    Rh,
    /// Response management
    #[serde(rename = "RM")]
    Rm,
    /// Contact centre
    #[serde(rename = "CC")]
    Cc,
    /// Field
    #[serde(rename = "FIELD")]
    Field,
}

/// The `event` header of an envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub source: Source,
    pub channel: Channel,
    pub date_time: DateTime<Utc>,
    pub transaction_id: TransactionId,
}

impl Header {
    /// Stamps a new header with the current time and a fresh transaction id
    pub fn new(event_type: EventType, source: Source, channel: Channel) -> Self {
        Self {
            event_type,
            source,
            channel,
            date_time: Utc::now(),
            transaction_id: TransactionId::new(),
        }
    }
}
