//! Event transport adapters

pub mod channel_publisher;

pub use channel_publisher::{spawn_logging_sink, ChannelEventPublisher};
