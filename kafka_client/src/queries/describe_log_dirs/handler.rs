use crate::admin::AdminWrapper;
use crate::queries::describe_log_dirs::request::DescribeLogDirsQuery;
use crate::queries::describe_log_dirs::response::{BrokerLogDirs, DescribeLogDirsQueryResponse};
use anyhow::{anyhow, bail, Context};
use rdkafka::admin::{AdminOptions, OwnedResourceSpecifier, ResourceSpecifier};

/// librdkafka has no DescribeLogDirs RPC, the broker's `log.dirs` config
/// entry is the closest the client exposes.
pub async fn describe_log_dirs(
    query: DescribeLogDirsQuery,
) -> Result<DescribeLogDirsQueryResponse, anyhow::Error> {
    let admin = AdminWrapper::create(&query.connection_settings)
        .context("While creating admin client")?;

    let specifiers = query
        .broker_ids
        .iter()
        .map(|broker_id| ResourceSpecifier::Broker(*broker_id))
        .collect::<Vec<_>>();

    let results = admin
        .describe_configs(specifiers.iter(), &AdminOptions::new())
        .await
        .context("While describing broker configs")?;

    let mut brokers = Vec::with_capacity(results.len());
    for result in results {
        let resource =
            result.map_err(|error| anyhow!("Describing broker configs failed: {error}"))?;

        let broker_id = match &resource.specifier {
            OwnedResourceSpecifier::Broker(broker_id) => *broker_id,
            other => bail!("Unexpected config resource in response: {other:?}"),
        };

        let log_dirs = resource
            .entries
            .iter()
            .find(|entry| entry.name == "log.dirs")
            .and_then(|entry| entry.value.as_ref())
            .map(|value| value.split(',').map(str::to_owned).collect())
            .unwrap_or_default();

        brokers.push(BrokerLogDirs {
            broker_id,
            log_dirs,
        });
    }

    Ok(DescribeLogDirsQueryResponse { brokers })
}
