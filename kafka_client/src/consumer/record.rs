use chrono::{DateTime, Utc};
use getset::Getters;
use std::fmt::{Display, Formatter};

#[derive(Debug, Getters, Clone, PartialEq, Eq, Hash)]
#[getset(get = "pub")]
pub struct RecordPosition {
    topic: String,
    partition: i32,
    offset: i64,
}

impl RecordPosition {
    pub fn new(topic: impl Into<String>, partition: i32, offset: i64) -> Self {
        Self {
            topic: topic.into(),
            partition,
            offset,
        }
    }

    /// Offset to commit once this record is handled: the next one to read.
    pub fn next_offset(&self) -> i64 {
        self.offset + 1
    }
}

impl Display for RecordPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]@{}", self.topic, self.partition, self.offset)
    }
}

#[derive(Debug, Clone)]
pub struct ConsumedRecord {
    pub position: RecordPosition,
    pub timestamp: Option<DateTime<Utc>>,
    pub key: Option<String>,
    pub value: Option<String>,
}

impl ConsumedRecord {
    pub fn value_or_empty(&self) -> &str {
        self.value.as_deref().unwrap_or_default()
    }
}

/// Outcome of a single successful pull from the broker.
#[derive(Debug)]
pub enum Consumed {
    Record(ConsumedRecord),
    PartitionEof { partition: i32 },
}
