use std::time::Duration;

use async_trait::async_trait;
use rdkafka::config::ClientConfig;
use rdkafka::producer::FutureProducer;
use rdkafka::producer::FutureRecord;
use rdkafka::util::Timeout;
use serde::Serialize;

use crate::config::Config;
use crate::domain::client::errors::EventPublisherError;
use crate::domain::client::events::ClientCreatedEvent;
use crate::domain::client::events::ClientDeletedEvent;
use crate::domain::client::events::ClientUpdatedEvent;
use crate::domain::client::ports::EventPublisher;
use crate::outbound::events::messages::ClientCreatedMessage;
use crate::outbound::events::messages::ClientDeletedMessage;
use crate::outbound::events::messages::ClientUpdatedMessage;

/// Durable queue receiving creation events.
pub const CLIENT_CREATION_QUEUE: &str = "client_creation_queue";
/// Durable queue receiving update events.
pub const CLIENT_UPDATE_QUEUE: &str = "client_update_queue";
/// Durable queue receiving deletion events.
pub const CLIENT_DELETION_QUEUE: &str = "client_deletion_queue";

/// Best-effort event producer.
///
/// A publish is bounded by a short timeout and abandoned on expiry; the
/// mutation already committed to the store is the authoritative outcome
/// either way.
pub struct KafkaEventProducer {
    producer: FutureProducer,
    timeout: Duration,
}

impl KafkaEventProducer {
    pub fn new(config: &Config) -> Result<Self, anyhow::Error> {
        tracing::info!(
            brokers = %config.kafka.brokers,
            "Initializing producer for client events"
        );

        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", &config.kafka.brokers)
            .set("message.timeout.ms", "5000")
            .set("queue.buffering.max.messages", "10000")
            .set("compression.type", "gzip")
            .set("acks", "all")
            .create()?;

        Ok(Self {
            producer,
            timeout: Duration::from_secs(5),
        })
    }

    async fn publish<T: Serialize>(
        &self,
        queue: &str,
        client_id: i64,
        message: &T,
    ) -> Result<(), EventPublisherError> {
        let payload = serde_json::to_string(message)
            .map_err(|e| EventPublisherError::SerializationFailed(e.to_string()))?;

        let key = client_id.to_string();
        let record = FutureRecord::to(queue).key(&key).payload(&payload);

        self.producer
            .send(record, Timeout::After(self.timeout))
            .await
            .map(|_| {
                tracing::debug!(queue, client_id, "Event published");
            })
            .map_err(|(err, _)| EventPublisherError::PublishFailed(err.to_string()))
    }
}

#[async_trait]
impl EventPublisher for KafkaEventProducer {
    async fn publish_client_created(
        &self,
        event: &ClientCreatedEvent,
    ) -> Result<(), EventPublisherError> {
        let message = ClientCreatedMessage::from(event);
        self.publish(CLIENT_CREATION_QUEUE, event.client_id, &message)
            .await
    }

    async fn publish_client_updated(
        &self,
        event: &ClientUpdatedEvent,
    ) -> Result<(), EventPublisherError> {
        let message = ClientUpdatedMessage::from(event);
        self.publish(CLIENT_UPDATE_QUEUE, event.client_id, &message)
            .await
    }

    async fn publish_client_deleted(
        &self,
        event: &ClientDeletedEvent,
    ) -> Result<(), EventPublisherError> {
        let message = ClientDeletedMessage::from(event);
        self.publish(CLIENT_DELETION_QUEUE, event.client_id, &message)
            .await
    }
}
