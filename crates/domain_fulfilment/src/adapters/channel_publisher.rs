//! In-process event transport
//!
//! Events are serialized to JSON and pushed onto a bounded tokio channel.
//! Whatever drains the receiver is the transport: a broker bridge in a
//! deployment, or `spawn_logging_sink` when running standalone.
//!
//! Publishing never waits. A full channel is reported as
//! `PortError::RateLimited` and a closed one as
//! `PortError::ServiceUnavailable`; neither is retried here.

use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use core_kernel::{
    Channel, DomainPort, EventType, HealthCheckResult, HealthCheckable, PortError, Source,
    TransactionId,
};

use crate::events::{EventPayload, GenericEvent};
use crate::ports::EventPublisher;

const ADAPTER_ID: &str = "channel-event-publisher";

/// Publisher writing serialized events to a bounded channel
#[derive(Debug, Clone)]
pub struct ChannelEventPublisher {
    sender: mpsc::Sender<String>,
}

impl ChannelEventPublisher {
    /// Creates a publisher and the receiving end of its channel
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<String>) {
        let (sender, receiver) = mpsc::channel(capacity);
        (Self { sender }, receiver)
    }
}

impl DomainPort for ChannelEventPublisher {}

#[async_trait]
impl HealthCheckable for ChannelEventPublisher {
    async fn health_check(&self) -> HealthCheckResult {
        if self.sender.is_closed() {
            HealthCheckResult::unhealthy(ADAPTER_ID, "event channel closed")
        } else {
            HealthCheckResult::healthy(ADAPTER_ID)
        }
    }
}

#[async_trait]
impl EventPublisher for ChannelEventPublisher {
    async fn send_event(
        &self,
        event_type: EventType,
        source: Source,
        channel: Channel,
        payload: EventPayload,
    ) -> Result<TransactionId, PortError> {
        let event = GenericEvent::new(event_type, source, channel, payload);
        let transaction_id = event.event.transaction_id;
        let message = serde_json::to_string(&event)?;

        self.sender.try_send(message).map_err(|err| match err {
            TrySendError::Full(_) => PortError::RateLimited { retry_after_secs: 1 },
            TrySendError::Closed(_) => PortError::unavailable("event transport"),
        })?;

        debug!(%transaction_id, ?event_type, "Event handed to transport");
        Ok(transaction_id)
    }
}

/// Drains the channel, logging every event, until all publishers are dropped
pub fn spawn_logging_sink(mut receiver: mpsc::Receiver<String>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(message) = receiver.recv().await {
            info!(event = %message, "Event published");
        }
        debug!("Event channel closed, logging sink stopping");
    })
}
