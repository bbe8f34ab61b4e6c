use crate::connection_settings::ConnectionSettings;
use crate::producer::{DeliveryOutcome, PendingDelivery, ProducerSettings, RecordSink};
use anyhow::Context;
use rdkafka::error::KafkaError;
use rdkafka::producer::{FutureProducer, FutureRecord, Producer};
use rdkafka::ClientConfig;
use std::time::Duration;

pub struct ProducerWrapper {
    producer: FutureProducer,
}

impl ProducerWrapper {
    pub fn create(
        connection_settings: &ConnectionSettings,
        settings: &ProducerSettings,
    ) -> Result<Self, anyhow::Error> {
        let mut config = ClientConfig::try_from(connection_settings)?;
        let producer: FutureProducer = config
            .set("client.id", &settings.client_id)
            .set(
                "message.timeout.ms",
                settings.message_timeout.as_millis().to_string(),
            )
            .set("linger.ms", "0")
            .create()
            .context("While creating a kafka FutureProducer")?;

        Ok(Self { producer })
    }
}

impl RecordSink for ProducerWrapper {
    fn enqueue(&self, topic: &str, value: &str) -> Result<PendingDelivery, KafkaError> {
        let record: FutureRecord<'_, (), str> = FutureRecord::to(topic).payload(value);
        let delivery = self
            .producer
            .send_result(record)
            .map_err(|(error, _record)| error)?;

        Ok(Box::pin(async move {
            match delivery.await {
                Ok(Ok((partition, offset))) => DeliveryOutcome::Delivered { partition, offset },
                Ok(Err((error, _message))) => DeliveryOutcome::Failed {
                    error: error.to_string(),
                },
                Err(_) => DeliveryOutcome::Failed {
                    error: "Delivery was cancelled by the producer".to_owned(),
                },
            }
        }))
    }

    fn flush(&self, timeout: Duration) -> Result<(), KafkaError> {
        self.producer.flush(timeout)
    }
}
