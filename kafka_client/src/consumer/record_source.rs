use crate::consumer::{Consumed, RecordPosition};
use rdkafka::error::KafkaError;
use std::future::Future;

/// Broker side of the consume loop.
pub trait RecordSource: Send + Sync {
    fn subscribe(&self, topics: &[&str]) -> Result<(), KafkaError>;

    /// Waits for the next record, end-of-partition marker or error.
    fn recv(&self) -> impl Future<Output = Result<Consumed, KafkaError>> + Send;

    /// Marks `position` as handled. Persisting it is left to the client's
    /// auto-commit cycle.
    fn store_offset(&self, position: &RecordPosition) -> Result<(), KafkaError>;

    /// Synchronously commits everything stored so far.
    fn commit_stored(&self) -> Result<(), KafkaError>;
}
