use crate::consumer::ConsumerWrapper;
use crate::queries::list_topics::request::ListTopicsQuery;
use crate::queries::list_topics::response::{KafkaTopicMetadata, ListTopicsQueryResponse};
use anyhow::Context;
use rdkafka::consumer::Consumer;
use rdkafka::util::Timeout;
use std::time::Duration;

pub async fn list_topics(query: ListTopicsQuery) -> Result<ListTopicsQueryResponse, anyhow::Error> {
    let handle = tokio::task::spawn_blocking(move || {
        let client = ConsumerWrapper::create_for_metadata(&query.connection_settings, None)
            .context("While creating metadata client")?;

        let metadata = client
            .fetch_metadata(None, Timeout::After(Duration::from_secs(5)))
            .context("While fetching metadata")?;

        let topics = metadata
            .topics()
            .iter()
            .map(|topic| KafkaTopicMetadata {
                topic_name: topic.name().to_owned(),
                partitions_count: topic.partitions().len(),
            })
            .collect::<Vec<_>>();

        Result::<_, anyhow::Error>::Ok(ListTopicsQueryResponse { topics })
    });

    handle.await.context("While joining blocking handle")?
}
