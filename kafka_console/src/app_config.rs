use anyhow::Context;
use config::{Config, Environment, File};
use kafka_client::connection_settings::ConnectionSettings;
use kafka_client::consumer::{unique_group_id, AutoOffsetReset, ConsumerSettings};
use kafka_client::producer::ProducerSettings;
use kafka_client::security_protocol::SecurityProtocol;
use serde::Deserialize;
use std::time::Duration;
use tracing::info;

#[derive(Deserialize, Debug, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub kafka: KafkaConfig,
    #[serde(default)]
    pub consumer: ConsumerConfig,
    #[serde(default)]
    pub producer: ProducerConfig,
}

#[derive(Deserialize, Debug)]
pub struct KafkaConfig {
    #[serde(default = "default_brokers")]
    pub brokers: Vec<String>,
    #[serde(default)]
    pub security_protocol: SecurityProtocol,
}

#[derive(Deserialize, Debug)]
pub struct ConsumerConfig {
    #[serde(default = "default_group_id")]
    pub group_id: String,
    /// Appends a unique suffix to `group_id`, so every run reads from
    /// `auto_offset_reset` instead of the last committed offsets.
    #[serde(default)]
    pub fresh_group: bool,
    #[serde(default = "default_topics")]
    pub topics: Vec<String>,
    #[serde(default)]
    pub auto_offset_reset: AutoOffsetReset,
    #[serde(default = "default_auto_commit_interval_ms")]
    pub auto_commit_interval_ms: u64,
    #[serde(default = "default_session_timeout_ms")]
    pub session_timeout_ms: u64,
}

#[derive(Deserialize, Debug)]
pub struct ProducerConfig {
    pub client_id: Option<String>,
    #[serde(default = "default_message_timeout_ms")]
    pub message_timeout_ms: u64,
    #[serde(default = "default_flush_timeout_ms")]
    pub flush_timeout_ms: u64,
}

impl AppConfig {
    pub fn build() -> Result<Self, anyhow::Error> {
        let config = Config::builder()
            .add_source(File::with_name("appsettings").required(false))
            .add_source(
                Environment::with_prefix("App")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("kafka.brokers")
                    .with_list_parse_key("consumer.topics"),
            )
            .build()
            .context("While building config")?;

        let deserialized_config = Self::from_config(config)?;

        info!("App config: {deserialized_config:?}");

        Ok(deserialized_config)
    }

    fn from_config(config: Config) -> Result<Self, anyhow::Error> {
        config
            .try_deserialize()
            .context("While deserializing config")
    }

    pub fn connection_settings(&self) -> ConnectionSettings {
        ConnectionSettings {
            brokers: self.kafka.brokers.clone(),
            security_protocol: self.kafka.security_protocol,
        }
    }

    pub fn consumer_settings(&self) -> ConsumerSettings {
        let consumer = &self.consumer;
        let group_id = if consumer.fresh_group {
            unique_group_id(&consumer.group_id)
        } else {
            consumer.group_id.clone()
        };

        ConsumerSettings {
            group_id,
            topics: consumer.topics.clone(),
            auto_offset_reset: consumer.auto_offset_reset,
            auto_commit_interval: Duration::from_millis(consumer.auto_commit_interval_ms),
            session_timeout: Duration::from_millis(consumer.session_timeout_ms),
        }
    }

    pub fn producer_settings(&self) -> ProducerSettings {
        let client_id = self
            .producer
            .client_id
            .clone()
            .or_else(host_name)
            .unwrap_or("kafka-console".to_owned());

        ProducerSettings {
            client_id,
            message_timeout: Duration::from_millis(self.producer.message_timeout_ms),
        }
    }

    pub fn flush_timeout(&self) -> Duration {
        Duration::from_millis(self.producer.flush_timeout_ms)
    }
}

impl Default for KafkaConfig {
    fn default() -> Self {
        Self {
            brokers: default_brokers(),
            security_protocol: SecurityProtocol::default(),
        }
    }
}

impl Default for ConsumerConfig {
    fn default() -> Self {
        Self {
            group_id: default_group_id(),
            fresh_group: false,
            topics: default_topics(),
            auto_offset_reset: AutoOffsetReset::default(),
            auto_commit_interval_ms: default_auto_commit_interval_ms(),
            session_timeout_ms: default_session_timeout_ms(),
        }
    }
}

impl Default for ProducerConfig {
    fn default() -> Self {
        Self {
            client_id: None,
            message_timeout_ms: default_message_timeout_ms(),
            flush_timeout_ms: default_flush_timeout_ms(),
        }
    }
}

fn host_name() -> Option<String> {
    gethostname::gethostname()
        .into_string()
        .ok()
        .filter(|name| !name.is_empty())
}

fn default_brokers() -> Vec<String> {
    vec!["localhost:29092".to_owned()]
}

fn default_group_id() -> String {
    "bug-day".to_owned()
}

fn default_topics() -> Vec<String> {
    vec!["A".to_owned(), "B".to_owned()]
}

fn default_auto_commit_interval_ms() -> u64 {
    5000
}

fn default_session_timeout_ms() -> u64 {
    10000
}

fn default_message_timeout_ms() -> u64 {
    5000
}

fn default_flush_timeout_ms() -> u64 {
    10000
}
