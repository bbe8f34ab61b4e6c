use crate::connection_settings::ConnectionSettings;
use crate::consumer::{
    Consumed, ConsumedRecord, ConsumerSettings, RecordPosition, RecordSource,
};
use anyhow::Context;
use chrono::DateTime;
use rdkafka::consumer::{CommitMode, Consumer, StreamConsumer};
use rdkafka::error::KafkaError;
use rdkafka::{ClientConfig, Message};

pub struct ConsumerWrapper {
    consumer: StreamConsumer,
}

impl ConsumerWrapper {
    pub fn create_for_consuming(
        connection_settings: &ConnectionSettings,
        settings: &ConsumerSettings,
    ) -> Result<Self, anyhow::Error> {
        let mut config = ClientConfig::try_from(connection_settings)?;

        // https://raw.githubusercontent.com/confluentinc/librdkafka/master/CONFIGURATION.md
        let consumer: StreamConsumer = config
            .set("group.id", &settings.group_id)
            .set("auto.offset.reset", settings.auto_offset_reset.to_string())
            .set("enable.partition.eof", "true")
            .set(
                "session.timeout.ms",
                settings.session_timeout.as_millis().to_string(),
            )
            .set("enable.auto.commit", "true")
            .set(
                "auto.commit.interval.ms",
                settings.auto_commit_interval.as_millis().to_string(),
            )
            .set("enable.auto.offset.store", "false")
            .create()
            .context("While creating kafka StreamConsumer")?;

        Ok(Self { consumer })
    }
}

impl RecordSource for ConsumerWrapper {
    fn subscribe(&self, topics: &[&str]) -> Result<(), KafkaError> {
        self.consumer.subscribe(topics)
    }

    async fn recv(&self) -> Result<Consumed, KafkaError> {
        to_consumed(self.consumer.recv().await)
    }

    fn store_offset(&self, position: &RecordPosition) -> Result<(), KafkaError> {
        self.consumer.store_offset(
            position.topic(),
            *position.partition(),
            position.next_offset(),
        )
    }

    fn commit_stored(&self) -> Result<(), KafkaError> {
        self.consumer.commit_consumer_state(CommitMode::Sync)
    }
}

fn to_consumed<M: Message>(result: Result<M, KafkaError>) -> Result<Consumed, KafkaError> {
    match result {
        Ok(message) => Ok(Consumed::Record(to_consumed_record(&message))),
        Err(KafkaError::PartitionEOF(partition)) => Ok(Consumed::PartitionEof { partition }),
        Err(e) => Err(e),
    }
}

fn to_consumed_record<M: Message>(message: &M) -> ConsumedRecord {
    let timestamp = message
        .timestamp()
        .to_millis()
        .and_then(DateTime::from_timestamp_millis);

    ConsumedRecord {
        position: RecordPosition::new(message.topic(), message.partition(), message.offset()),
        timestamp,
        key: message
            .key()
            .map(|k| String::from_utf8_lossy(k).to_string()),
        value: message
            .payload()
            .map(|p| String::from_utf8_lossy(p).to_string()),
    }
}
