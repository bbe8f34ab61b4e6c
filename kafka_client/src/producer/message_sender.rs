use crate::producer::{DeliveryOutcome, RecordSink};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{debug, error, Instrument, Span};

/// Fire-and-forget publisher. Delivery failures only ever show up in the log.
pub struct MessageSender<S> {
    sink: Arc<S>,
    delivery_reports: TaskTracker,
}

impl<S: RecordSink + 'static> MessageSender<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink: Arc::new(sink),
            delivery_reports: TaskTracker::new(),
        }
    }

    /// Queues `value` for `topic` and returns without waiting for the broker.
    /// The outcome is reported by a background task once it is known.
    ///
    /// Must be called from within a tokio runtime.
    pub fn produce(
        &self,
        topic: &str,
        value: &str,
        _cancellation_token: Option<&CancellationToken>,
    ) {
        if topic.is_empty() {
            error!(
                "Exception occurred when publish message. Topic name is empty, value: {}",
                value
            );
            return;
        }

        let delivery = match self.sink.enqueue(topic, value) {
            Ok(delivery) => delivery,
            Err(e) => {
                log_delivery_error(topic, value, &e.to_string());
                return;
            }
        };

        let topic = topic.to_owned();
        let value = value.to_owned();
        let report = async move {
            match delivery.await {
                DeliveryOutcome::Delivered { partition, offset } => {
                    debug!(
                        "Message delivered. Topic: {}, partition: {}, offset: {}",
                        topic, partition, offset
                    );
                }
                DeliveryOutcome::Failed { error } => log_delivery_error(&topic, &value, &error),
            }
        }
        .instrument(Span::current());

        self.delivery_reports.spawn(report);
    }

    /// Waits until every queued record is delivered or `timeout` elapses, then
    /// until every delivery outcome produced so far has been reported.
    pub async fn flush(&self, timeout: Duration) {
        let sink = self.sink.clone();
        match tokio::task::spawn_blocking(move || sink.flush(timeout)).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => error!("Error while flushing producer. {:?}", e),
            Err(e) => error!("Flushing producer panicked. {:?}", e),
        }

        self.delivery_reports.close();
        self.delivery_reports.wait().await;
        self.delivery_reports.reopen();
    }
}

fn log_delivery_error(topic: &str, value: &str, error: &str) {
    error!(
        "Error occurred when delivery message. Topic: {}, Value: {}, Error: {}",
        topic, value, error
    );
}
