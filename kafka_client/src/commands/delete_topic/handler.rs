use crate::admin::AdminWrapper;
use crate::commands::delete_topic::DeleteTopicCommand;
use anyhow::{anyhow, Context};
use rdkafka::admin::AdminOptions;

pub async fn delete_topic(command: DeleteTopicCommand) -> Result<(), anyhow::Error> {
    let admin = AdminWrapper::create(&command.connection_settings)
        .context("While creating admin client")?;

    let results = admin
        .delete_topics(&[&command.topic], &AdminOptions::new())
        .await
        .context("While deleting topic")?;

    for result in results {
        result.map_err(|(topic, error)| anyhow!("Deleting topic {topic} failed: {error}"))?;
    }

    Ok(())
}
