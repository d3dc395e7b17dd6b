use crate::consumer::{ConsumerWrapper, KafkaMessage};
use crate::queries::read_messages::request::ReadMessagesQuery;
use anyhow::Context;
use rdkafka::consumer::Consumer;
use rdkafka::error::KafkaError;
use rdkafka::types::RDKafkaErrorCode;
use rdkafka::TopicPartitionList;
use tokio::select;
use tokio::sync::mpsc::Receiver;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Assigns one topic partition and streams its messages to a channel until
/// the token is cancelled. Transient broker errors are logged and
/// consumption continues, an error the assignment cannot recover from
/// stops the stream by closing the channel.
pub async fn read_messages(
    query: ReadMessagesQuery,
    cancellation_token: CancellationToken,
) -> Result<Receiver<KafkaMessage>, anyhow::Error> {
    let consumer = ConsumerWrapper::create_for_assigning(&query.connection_settings)
        .context("While creating consumer")?;

    let mut assignment = TopicPartitionList::new();
    assignment
        .add_partition_offset(&query.topic, query.partition, query.start_offset.into())
        .context("While building partition assignment")?;
    consumer
        .assign(&assignment)
        .context("While assigning topic partition")?;

    let (tx, rx) = tokio::sync::mpsc::channel(128);
    tokio::task::spawn(async move {
        loop {
            let message_result = select! {
                result = consumer.recv() => result,
                _ = cancellation_token.cancelled() => {
                    info!("Consuming was cancelled");
                    break;
                }
            };

            match message_result {
                Ok(message) => {
                    let message = KafkaMessage::from(&message);
                    if tx.send(message).await.is_err() {
                        break;
                    }
                }
                Err(e) => {
                    if is_fatal_consume_error(&e) {
                        error!("Stopped consuming partition: {:?}", e);
                        break;
                    }
                    error!("Error while reading message from partition consumer: {:?}", e);
                }
            }
        }
    });

    Ok(rx)
}

/// A static single-partition assignment cannot recover from these, only
/// retrying them would spin on the same error forever.
fn is_fatal_consume_error(error: &KafkaError) -> bool {
    matches!(
        error,
        KafkaError::MessageConsumption(
            RDKafkaErrorCode::UnknownPartition
                | RDKafkaErrorCode::UnknownTopic
                | RDKafkaErrorCode::UnknownTopicOrPartition
                | RDKafkaErrorCode::TopicAuthorizationFailed
        )
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_partition_stops_consuming() {
        let error = KafkaError::MessageConsumption(RDKafkaErrorCode::UnknownPartition);
        assert!(is_fatal_consume_error(&error));
    }

    #[test]
    fn transient_errors_keep_consuming() {
        let timed_out = KafkaError::MessageConsumption(RDKafkaErrorCode::OperationTimedOut);
        let all_down = KafkaError::MessageConsumption(RDKafkaErrorCode::AllBrokersDown);
        assert!(!is_fatal_consume_error(&timed_out));
        assert!(!is_fatal_consume_error(&all_down));
    }
}
