use crate::admin::AdminWrapper;
use crate::commands::add_partitions::AddPartitionsCommand;
use anyhow::{anyhow, Context};
use rdkafka::admin::{AdminOptions, NewPartitions};

/// Partition-to-broker assignment is left to the broker.
pub async fn add_partitions(command: AddPartitionsCommand) -> Result<(), anyhow::Error> {
    let admin = AdminWrapper::create(&command.connection_settings)
        .context("While creating admin client")?;

    let new_partitions = NewPartitions::new(&command.topic, command.new_partition_count);

    let results = admin
        .create_partitions([&new_partitions], &AdminOptions::new())
        .await
        .context("While adding partitions")?;

    for result in results {
        result.map_err(|(topic, error)| {
            anyhow!("Adding partitions to topic {topic} failed: {error}")
        })?;
    }

    Ok(())
}
