//! Core Kernel - Foundational types for the respondent home service
//!
//! This crate provides the building blocks shared by every domain crate:
//! - Strongly-typed identifiers for cases, individuals and events
//! - The unique property reference number (UPRN) value object
//! - Port error and health types for the hexagonal adapters
//! - The event header carried by every event on the transport

pub mod identifiers;
pub mod uprn;
pub mod ports;
pub mod events;
pub mod error;

pub use identifiers::{CaseId, IndividualCaseId, TransactionId};
pub use uprn::UniquePropertyReferenceNumber;
pub use ports::{
    PortError, DomainPort, HealthCheckable, HealthCheckResult, AdapterHealth,
};
pub use events::{Channel, EventType, Header, Source};
pub use error::CoreError;
