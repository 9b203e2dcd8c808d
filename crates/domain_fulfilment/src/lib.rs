//! Fulfilment Domain
//!
//! Resolves a respondent's fulfilment request against the product catalog
//! and publishes a `FULFILMENT_REQUESTED` event for the dispatch subsystem.
//!
//! # Pipeline
//!
//! ```text
//! request ─▶ CaseReader ─▶ ProductCatalog ─▶ FulfilmentRequest ─▶ EventPublisher
//!            (case found?)  (first match)     (payload built)      (sent once)
//! ```
//!
//! Nothing is persisted between steps and publication is the last step, so
//! a failure anywhere earlier never leaves a stray event behind.

pub mod events;
pub mod error;
pub mod ports;
pub mod adapters;
pub mod services;

pub use events::{Contact, EventPayload, FulfilmentRequest, GenericEvent};
pub use error::{ErrorKind, FulfilmentError};
pub use ports::EventPublisher;
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::{MockEventPublisher, PublishedEvent};
pub use adapters::{spawn_logging_sink, ChannelEventPublisher};
pub use services::{FulfilmentService, SmsFulfilmentRequest};
