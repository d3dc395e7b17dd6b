use crate::admin::AdminWrapper;
use crate::commands::create_topic::CreateTopicCommand;
use anyhow::{anyhow, Context};
use rdkafka::admin::{AdminOptions, NewTopic, TopicReplication};

/// Creation is not idempotent, an already existing topic is an error.
pub async fn create_topic(command: CreateTopicCommand) -> Result<(), anyhow::Error> {
    let admin = AdminWrapper::create(&command.connection_settings)
        .context("While creating admin client")?;

    let new_topic = NewTopic::new(
        &command.topic,
        command.num_partitions,
        TopicReplication::Fixed(command.replication_factor),
    );

    let results = admin
        .create_topics([&new_topic], &AdminOptions::new())
        .await
        .context("While creating topic")?;

    for result in results {
        result.map_err(|(topic, error)| anyhow!("Creating topic {topic} failed: {error}"))?;
    }

    Ok(())
}
