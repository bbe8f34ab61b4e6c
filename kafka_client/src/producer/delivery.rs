use std::future::Future;
use std::pin::Pin;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Delivered { partition: i32, offset: i64 },
    Failed { error: String },
}

/// Resolves once the broker acknowledged (or rejected) an enqueued record.
pub type PendingDelivery = Pin<Box<dyn Future<Output = DeliveryOutcome> + Send>>;
