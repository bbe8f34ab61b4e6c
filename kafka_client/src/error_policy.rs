use rdkafka::error::{KafkaError, RDKafkaErrorCode};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConsumeErrorKind {
    /// The subscribed topic does not exist yet. Brokers running with
    /// `auto.create.topics.enable=true` create it on a later attempt.
    TopicNotAvailable,
    /// The client can't recover; no further consume attempts make sense.
    /// https://github.com/confluentinc/librdkafka/blob/master/INTRODUCTION.md#fatal-consumer-errors
    Fatal,
    Other,
}

impl ConsumeErrorKind {
    pub fn classify(error: &KafkaError) -> Self {
        if matches!(error, KafkaError::MessageConsumptionFatal(_)) {
            return ConsumeErrorKind::Fatal;
        }

        match error.rdkafka_error_code() {
            Some(RDKafkaErrorCode::Fatal) => ConsumeErrorKind::Fatal,
            Some(RDKafkaErrorCode::UnknownTopicOrPartition | RDKafkaErrorCode::UnknownTopic) => {
                ConsumeErrorKind::TopicNotAvailable
            }
            _ => ConsumeErrorKind::Other,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorAction {
    LogWarnAndContinue,
    LogErrorAndContinue,
    LogErrorAndTerminate,
}

impl ErrorAction {
    pub fn terminates(self) -> bool {
        matches!(self, ErrorAction::LogErrorAndTerminate)
    }
}

/// What the consume loop does for each kind of consume error.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ErrorPolicy {
    pub topic_not_available: ErrorAction,
    pub fatal: ErrorAction,
    pub other: ErrorAction,
}

impl Default for ErrorPolicy {
    fn default() -> Self {
        Self {
            topic_not_available: ErrorAction::LogWarnAndContinue,
            fatal: ErrorAction::LogErrorAndTerminate,
            other: ErrorAction::LogErrorAndContinue,
        }
    }
}

impl ErrorPolicy {
    pub fn action(&self, kind: ConsumeErrorKind) -> ErrorAction {
        match kind {
            ConsumeErrorKind::TopicNotAvailable => self.topic_not_available,
            ConsumeErrorKind::Fatal => self.fatal,
            ConsumeErrorKind::Other => self.other,
        }
    }

    pub fn action_for(&self, error: &KafkaError) -> ErrorAction {
        self.action(ConsumeErrorKind::classify(error))
    }
}
