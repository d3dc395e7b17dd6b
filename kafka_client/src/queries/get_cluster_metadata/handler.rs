use crate::consumer::ConsumerWrapper;
use crate::queries::get_cluster_metadata::request::GetClusterMetadataQuery;
use crate::queries::get_cluster_metadata::response::{
    BrokerMetadata, GetClusterMetadataQueryResponse,
};
use anyhow::Context;
use rdkafka::consumer::Consumer;
use rdkafka::util::Timeout;
use std::time::Duration;

pub async fn get_cluster_metadata(
    query: GetClusterMetadataQuery,
) -> Result<GetClusterMetadataQueryResponse, anyhow::Error> {
    let handle = tokio::task::spawn_blocking(move || {
        let client = ConsumerWrapper::create_for_metadata(&query.connection_settings, None)
            .context("While creating metadata client")?;

        let metadata = client
            .fetch_metadata(None, Timeout::After(Duration::from_secs(5)))
            .context("While fetching metadata")?;

        let brokers = metadata
            .brokers()
            .iter()
            .map(|broker| BrokerMetadata {
                broker_id: broker.id(),
                host: broker.host().to_owned(),
                port: broker.port() as u16,
            })
            .collect::<Vec<_>>();

        let response = GetClusterMetadataQueryResponse {
            orig_broker_id: metadata.orig_broker_id(),
            orig_broker_name: metadata.orig_broker_name().to_owned(),
            brokers,
        };
        Result::<_, anyhow::Error>::Ok(response)
    });

    handle.await.context("While joining blocking handle")?
}
