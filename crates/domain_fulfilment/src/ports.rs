//! Fulfilment Domain Ports
//!
//! `EventPublisher` hands events to the transport. Delivery guarantees,
//! retries and backoff belong to the transport; from the caller's side a
//! publish either succeeds or fails once.

use async_trait::async_trait;

use core_kernel::{Channel, DomainPort, EventType, HealthCheckable, PortError, Source, TransactionId};

use crate::events::EventPayload;

/// Publish-only access to the event transport
#[async_trait]
pub trait EventPublisher: DomainPort + HealthCheckable {
    /// Publishes a payload under a freshly stamped header
    ///
    /// # Returns
    ///
    /// The transaction id stamped on the published event
    async fn send_event(
        &self,
        event_type: EventType,
        source: Source,
        channel: Channel,
        payload: EventPayload,
    ) -> Result<TransactionId, PortError>;
}

/// Mock implementation of EventPublisher for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use core_kernel::{HealthCheckResult, Header};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    use crate::events::FulfilmentRequest;

    /// An event captured by the mock publisher
    #[derive(Debug, Clone, PartialEq)]
    pub struct PublishedEvent {
        pub header: Header,
        pub payload: EventPayload,
    }

    impl PublishedEvent {
        /// Returns the fulfilment request carried by the event
        pub fn fulfilment_request(&self) -> &FulfilmentRequest {
            match &self.payload {
                EventPayload::FulfilmentRequest(request) => request,
            }
        }
    }

    /// Publisher that records events instead of sending them
    #[derive(Debug, Default)]
    pub struct MockEventPublisher {
        published: Mutex<Vec<PublishedEvent>>,
        failing: AtomicBool,
    }

    impl MockEventPublisher {
        /// Creates a publisher with nothing recorded
        pub fn new() -> Self {
            Self::default()
        }

        /// Makes every subsequent publish fail as if the transport were down
        pub fn set_failing(&self, failing: bool) {
            self.failing.store(failing, Ordering::SeqCst);
        }

        /// Events published so far, oldest first
        pub fn published(&self) -> Vec<PublishedEvent> {
            self.published
                .lock()
                .map(|p| p.clone())
                .unwrap_or_default()
        }
    }

    impl DomainPort for MockEventPublisher {}

    #[async_trait]
    impl HealthCheckable for MockEventPublisher {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult::healthy("mock-event-publisher")
        }
    }

    #[async_trait]
    impl EventPublisher for MockEventPublisher {
        async fn send_event(
            &self,
            event_type: EventType,
            source: Source,
            channel: Channel,
            payload: EventPayload,
        ) -> Result<TransactionId, PortError> {
            if self.failing.load(Ordering::SeqCst) {
                return Err(PortError::unavailable("event transport"));
            }
            let header = Header::new(event_type, source, channel);
            let transaction_id = header.transaction_id;
            self.published
                .lock()
                .map_err(|_| PortError::internal("mock publisher lock poisoned"))?
                .push(PublishedEvent { header, payload });
            Ok(transaction_id)
        }
    }
}
