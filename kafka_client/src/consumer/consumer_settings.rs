use crate::consumer::AutoOffsetReset;
use std::time::Duration;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct ConsumerSettings {
    pub group_id: String,
    pub topics: Vec<String>,
    pub auto_offset_reset: AutoOffsetReset,
    /// How often the client commits the offsets stored by the consume loop.
    pub auto_commit_interval: Duration,
    pub session_timeout: Duration,
}

impl ConsumerSettings {
    pub fn new(group_id: impl Into<String>, topics: Vec<String>) -> Self {
        Self {
            group_id: group_id.into(),
            topics,
            auto_offset_reset: AutoOffsetReset::Earliest,
            auto_commit_interval: Duration::from_millis(5000),
            session_timeout: Duration::from_millis(10000),
        }
    }
}

/// Group id that has never committed anything, so consumption starts from the
/// `auto.offset.reset` position.
pub fn unique_group_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::now_v7())
}
