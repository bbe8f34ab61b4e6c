use crate::consumer::ConsumedRecord;
use chrono::Local;
use std::future::Future;
use tracing::info;

pub trait MessageHandler: Send + Sync {
    fn handle(
        &self,
        record: &ConsumedRecord,
    ) -> impl Future<Output = Result<(), anyhow::Error>> + Send;
}

/// Logs every received value together with the local time.
#[derive(Debug, Default, Copy, Clone)]
pub struct LoggingHandler;

impl MessageHandler for LoggingHandler {
    async fn handle(&self, record: &ConsumedRecord) -> Result<(), anyhow::Error> {
        info!(
            "Receive message: {} At {}. Broker timestamp: {:?}",
            record.value_or_empty(),
            Local::now(),
            record.timestamp
        );

        Ok(())
    }
}
