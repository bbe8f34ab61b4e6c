use crate::app_config::AppConfig;
use anyhow::Context;
use kafka_client::consumer::{start_consumer, ConsumerWrapper, LoggingHandler};
use kafka_client::error_policy::ErrorPolicy;
use kafka_client::producer::{MessageSender, ProducerWrapper};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

const DEMO_MESSAGES: [(&str, &str); 2] = [("A", "A value"), ("B", "B value")];

pub async fn run_until_stopped(config: AppConfig) -> Result<(), anyhow::Error> {
    let connection_settings = config.connection_settings();
    let consumer_settings = config.consumer_settings();

    let consumer = ConsumerWrapper::create_for_consuming(&connection_settings, &consumer_settings)
        .context("While creating consumer")?;
    let cancellation_token = CancellationToken::new();
    let consumer_task = start_consumer(
        consumer,
        &consumer_settings.topics,
        LoggingHandler,
        ErrorPolicy::default(),
        cancellation_token.clone(),
    )
    .context("While starting consumer")?;
    info!(
        "Consumer started. Group: {}, topics: {:?}",
        consumer_settings.group_id, consumer_settings.topics
    );

    let producer = ProducerWrapper::create(&connection_settings, &config.producer_settings())
        .context("While creating producer")?;
    let sender = MessageSender::new(producer);

    for (topic, value) in DEMO_MESSAGES {
        info!("Produce message for topic {}.", topic);
        sender.produce(topic, value, Some(&cancellation_token));

        wait_for_key_press()
            .await
            .context("While waiting for key press")?;
    }

    cancellation_token.cancel();
    match consumer_task.await {
        Ok(exit) => info!("Consumer finished: {:?}", exit),
        Err(e) => error!("Consumer task failed. {:?}", e),
    }
    sender.flush(config.flush_timeout()).await;

    Ok(())
}

async fn wait_for_key_press() -> Result<(), anyhow::Error> {
    println!("Press Enter to continue...");

    let mut line = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut line)
        .await?;

    Ok(())
}
