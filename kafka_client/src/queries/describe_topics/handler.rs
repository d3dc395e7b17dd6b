use crate::consumer::ConsumerWrapper;
use crate::queries::describe_topics::request::DescribeTopicsQuery;
use crate::queries::describe_topics::response::{
    DescribeTopicsQueryResponse, PartitionDescription, TopicDescription,
};
use anyhow::Context;
use rdkafka::consumer::Consumer;
use rdkafka::util::Timeout;
use std::time::Duration;

pub async fn describe_topics(
    query: DescribeTopicsQuery,
) -> Result<DescribeTopicsQueryResponse, anyhow::Error> {
    let handle = tokio::task::spawn_blocking(move || {
        let client = ConsumerWrapper::create_for_metadata(&query.connection_settings, None)
            .context("While creating metadata client")?;

        let mut topics = Vec::with_capacity(query.topics.len());
        for topic_name in &query.topics {
            let metadata = client
                .fetch_metadata(Some(topic_name), Timeout::After(Duration::from_secs(5)))
                .with_context(|| format!("While fetching metadata for topic {topic_name}"))?;

            for topic in metadata.topics() {
                let partitions = topic
                    .partitions()
                    .iter()
                    .map(|partition| PartitionDescription {
                        partition_id: partition.id(),
                        leader: partition.leader(),
                        replicas: partition.replicas().to_vec(),
                        isr: partition.isr().to_vec(),
                    })
                    .collect();

                topics.push(TopicDescription {
                    topic_name: topic.name().to_owned(),
                    error: topic.error().map(|error| format!("{error:?}")),
                    partitions,
                });
            }
        }

        Result::<_, anyhow::Error>::Ok(DescribeTopicsQueryResponse { topics })
    });

    handle.await.context("While joining blocking handle")?
}
