use crate::consumer::ConsumerWrapper;
use crate::queries::list_groups::request::ListGroupsQuery;
use crate::queries::list_groups::response::{GroupSummary, ListGroupsQueryResponse};
use anyhow::Context;
use rdkafka::consumer::Consumer;
use rdkafka::util::Timeout;
use std::time::Duration;

pub async fn list_groups(query: ListGroupsQuery) -> Result<ListGroupsQueryResponse, anyhow::Error> {
    let handle = tokio::task::spawn_blocking(move || {
        let client = ConsumerWrapper::create_for_metadata(&query.connection_settings, None)
            .context("While creating metadata client")?;

        let group_list = client
            .fetch_group_list(None, Timeout::After(Duration::from_secs(5)))
            .context("While fetching consumer group list")?;

        let groups = group_list
            .groups()
            .iter()
            .map(|group| GroupSummary {
                name: group.name().to_owned(),
                state: group.state().to_owned(),
                protocol_type: group.protocol_type().to_owned(),
            })
            .collect::<Vec<_>>();

        Result::<_, anyhow::Error>::Ok(ListGroupsQueryResponse { groups })
    });

    handle.await.context("While joining blocking handle")?
}
