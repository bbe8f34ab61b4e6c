use crate::consumer::{Consumed, MessageHandler, OffsetLedger, RecordPosition, RecordSource};
use crate::error_policy::{ErrorAction, ErrorPolicy};
use anyhow::Context;
use std::sync::Arc;
use tokio::select;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, info_span, trace, warn, Instrument};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConsumeLoopExit {
    Cancelled,
    Fatal,
}

/// Pulls records one at a time, hands them to the handler and stores the
/// offset of every handled record. Offsets are committed by the client's
/// auto-commit cycle.
pub struct ConsumeLoop<S, H> {
    source: Arc<S>,
    handler: H,
    policy: ErrorPolicy,
    ledger: OffsetLedger,
    last_value: String,
}

impl<S: RecordSource + 'static, H: MessageHandler> ConsumeLoop<S, H> {
    pub fn new(source: S, handler: H) -> Self {
        Self {
            source: Arc::new(source),
            handler,
            policy: ErrorPolicy::default(),
            ledger: OffsetLedger::default(),
            last_value: String::new(),
        }
    }

    pub fn with_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub async fn run(mut self, cancellation_token: CancellationToken) -> ConsumeLoopExit {
        while !cancellation_token.is_cancelled() {
            let mut handled = None;
            let mut terminate = false;

            let consume_result = select! {
                biased;
                _ = cancellation_token.cancelled() => None,
                consumed = self.source.recv() => Some(consumed),
            };

            match consume_result {
                None => debug!("Consuming was cancelled"),
                Some(Ok(Consumed::PartitionEof { partition })) => {
                    trace!("Reached end of partition {}", partition);
                }
                Some(Ok(Consumed::Record(record))) => {
                    let position = record.position.clone();
                    let span = info_span!(
                        "Handling kafka message",
                        topic = %position.topic(),
                        partition = position.partition(),
                        offset = position.offset(),
                    );
                    if let Err(e) = self.handler.handle(&record).instrument(span).await {
                        error!(
                            "Exception occurred when handling message: {}. {:?}",
                            record.value_or_empty(),
                            e
                        );
                    }
                    self.last_value = record.value.unwrap_or_default();
                    handled = Some(position);
                }
                Some(Err(e)) => {
                    let action = self.policy.action_for(&e);
                    match action {
                        ErrorAction::LogWarnAndContinue => warn!("{}", e),
                        ErrorAction::LogErrorAndContinue => {
                            error!("Failed consume message: {}. Error: {}", self.last_value, e);
                        }
                        ErrorAction::LogErrorAndTerminate => {
                            error!(
                                "Failed consume message: {}. Error: {}. Stopping consumer",
                                self.last_value, e
                            );
                        }
                    }
                    terminate = action.terminates();
                }
            }

            self.advance_offset(handled.as_ref());

            if terminate {
                return ConsumeLoopExit::Fatal;
            }
        }

        let source = self.source.clone();
        match tokio::task::spawn_blocking(move || source.commit_stored()).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => warn!("Error while committing stored offsets on shutdown: {}", e),
            Err(e) => error!("Committing stored offsets panicked. {:?}", e),
        }
        info!("Consuming was stopped");

        ConsumeLoopExit::Cancelled
    }

    fn advance_offset(&mut self, handled: Option<&RecordPosition>) {
        let Some(position) = handled else {
            return;
        };

        if !self.ledger.advance(position) {
            debug!(
                "Offset for {} was already stored, handled up to {:?}",
                position,
                self.ledger
                    .handled_offset(position.topic(), *position.partition())
            );
            return;
        }

        if let Err(e) = self.source.store_offset(position) {
            error!("Error while storing offset {}. {:?}", position, e);
        }
    }
}

/// Subscribes `source` to `topics` and runs the consume loop in a background
/// task until `cancellation_token` is cancelled or a fatal error occurs.
pub fn start_consumer<S, H>(
    source: S,
    topics: &[String],
    handler: H,
    policy: ErrorPolicy,
    cancellation_token: CancellationToken,
) -> Result<JoinHandle<ConsumeLoopExit>, anyhow::Error>
where
    S: RecordSource + 'static,
    H: MessageHandler + 'static,
{
    let topic_refs = topics.iter().map(String::as_str).collect::<Vec<_>>();
    source
        .subscribe(&topic_refs)
        .context("While subscribing to topics")?;

    let future = ConsumeLoop::new(source, handler)
        .with_policy(policy)
        .run(cancellation_token)
        .instrument(info_span!("Consuming topics", topics = ?topics).or_current());

    Ok(tokio::task::spawn(future))
}
