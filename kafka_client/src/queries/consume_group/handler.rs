use crate::consumer::{AutoOffsetReset, ConsumerWrapper, KafkaMessage};
use crate::queries::consume_group::request::ConsumeGroupQuery;
use anyhow::Context;
use rdkafka::consumer::Consumer;
use tokio::select;
use tokio::sync::mpsc::Receiver;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Joins the group over the given topics, starting from the oldest
/// available offset when the group has none committed. Every delivered
/// message is stored for commit right after it is handed to the channel,
/// at-least-once semantics.
pub async fn consume_group(
    query: ConsumeGroupQuery,
    cancellation_token: CancellationToken,
) -> Result<Receiver<KafkaMessage>, anyhow::Error> {
    let consumer = ConsumerWrapper::create_for_consuming(
        &query.connection_settings,
        &query.group,
        AutoOffsetReset::Earliest,
    )
    .context("While creating group consumer")?;

    let topics = query.topics.iter().map(String::as_str).collect::<Vec<_>>();
    consumer
        .subscribe(&topics)
        .context("While subscribing to topics")?;

    let (tx, rx) = tokio::sync::mpsc::channel(128);
    tokio::task::spawn(async move {
        loop {
            let message_result = select! {
                result = consumer.recv() => result,
                _ = cancellation_token.cancelled() => {
                    info!("Group consuming was cancelled");
                    break;
                }
            };

            match message_result {
                Ok(message) => {
                    let message = KafkaMessage::from(&message);
                    let topic = message.topic.clone();
                    let partition = *message.partition_offset.partition();
                    let offset = *message.partition_offset.offset();

                    if tx.send(message).await.is_err() {
                        break;
                    }

                    if let Err(e) = consumer.store_offset(&topic, partition, offset) {
                        error!(
                            "Error while storing offset. Topic {}, partition {}, offset {}: {:?}",
                            topic, partition, offset, e
                        );
                    }
                }
                Err(e) => {
                    error!("Error while reading message from group consumer: {:?}", e);
                }
            }
        }
    });

    Ok(rx)
}
