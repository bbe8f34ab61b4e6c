use crate::producer::PendingDelivery;
use rdkafka::error::KafkaError;
use std::time::Duration;

/// Broker side of the message sender.
pub trait RecordSink: Send + Sync {
    /// Queues a record without waiting for the broker. An `Err` means the
    /// record never left the process.
    fn enqueue(&self, topic: &str, value: &str) -> Result<PendingDelivery, KafkaError>;

    fn flush(&self, timeout: Duration) -> Result<(), KafkaError>;
}
