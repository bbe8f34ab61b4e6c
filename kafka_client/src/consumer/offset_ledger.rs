use crate::consumer::RecordPosition;
use std::collections::HashMap;

/// Latest handled offset per topic partition. Offsets only move forward.
#[derive(Debug, Default)]
pub struct OffsetLedger {
    handled: HashMap<(String, i32), i64>,
}

impl OffsetLedger {
    /// Returns `false` when `position` is not ahead of what was already
    /// handled for its partition, e.g. a record redelivered after a rebalance.
    pub fn advance(&mut self, position: &RecordPosition) -> bool {
        let key = (position.topic().clone(), *position.partition());
        match self.handled.get_mut(&key) {
            Some(offset) if *offset >= *position.offset() => false,
            Some(offset) => {
                *offset = *position.offset();
                true
            }
            None => {
                self.handled.insert(key, *position.offset());
                true
            }
        }
    }

    pub fn handled_offset(&self, topic: &str, partition: i32) -> Option<i64> {
        self.handled.get(&(topic.to_owned(), partition)).copied()
    }
}
