use crate::commands::produce_message::ProduceMessageCommand;
use crate::consumer::PartitionOffset;
use crate::producer::ProducerWrapper;
use anyhow::Context;

/// Waits for the delivery report and returns the assigned partition and
/// offset.
pub async fn produce_message(
    command: ProduceMessageCommand,
) -> Result<PartitionOffset, anyhow::Error> {
    let producer = ProducerWrapper::create(&command.connection_settings, &command.partitioner)
        .context("While creating producer")?;

    let partition_offset = producer
        .produce_message(
            &command.topic,
            command.partitioner.partition(),
            command.key.as_deref().map(str::as_bytes),
            Some(command.value.as_bytes()),
            &command.headers,
        )
        .await?;

    Ok(partition_offset)
}
