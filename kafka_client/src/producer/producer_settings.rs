use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ProducerSettings {
    pub client_id: String,
    /// Upper bound for a record to be delivered, retries included.
    pub message_timeout: Duration,
}

impl ProducerSettings {
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            message_timeout: Duration::from_millis(5000),
        }
    }
}
