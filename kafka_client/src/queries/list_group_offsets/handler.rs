use crate::consumer::ConsumerWrapper;
use crate::queries::list_group_offsets::request::ListGroupOffsetsQuery;
use crate::queries::list_group_offsets::response::{
    CommittedOffset, ListGroupOffsetsQueryResponse,
};
use anyhow::Context;
use rdkafka::consumer::Consumer;
use rdkafka::util::Timeout;
use rdkafka::TopicPartitionList;
use std::time::Duration;

pub async fn list_group_offsets(
    query: ListGroupOffsetsQuery,
) -> Result<ListGroupOffsetsQueryResponse, anyhow::Error> {
    let handle = tokio::task::spawn_blocking(move || {
        let client =
            ConsumerWrapper::create_for_metadata(&query.connection_settings, Some(&query.group))
                .context("While creating metadata client")?;

        let mut topic_partitions = TopicPartitionList::new();
        for (topic, partitions) in &query.topic_partitions {
            for partition in partitions {
                topic_partitions.add_partition(topic, *partition);
            }
        }

        let committed = client
            .committed_offsets(topic_partitions, Timeout::After(Duration::from_secs(5)))
            .with_context(|| {
                format!("While fetching committed offsets of group {}", query.group)
            })?;

        let offsets = committed
            .elements()
            .iter()
            .map(|elem| CommittedOffset {
                topic: elem.topic().to_owned(),
                partition: elem.partition(),
                offset: elem.offset().to_raw(),
            })
            .collect();

        Result::<_, anyhow::Error>::Ok(ListGroupOffsetsQueryResponse {
            group: query.group.clone(),
            offsets,
        })
    });

    handle.await.context("While joining blocking handle")?
}
