use crate::admin::AdminWrapper;
use crate::commands::delete_records::DeleteRecordsCommand;
use crate::consumer::PartitionOffset;
use anyhow::Context;
use rdkafka::admin::AdminOptions;
use rdkafka::{Offset, TopicPartitionList};

/// Returns the new low watermark of every affected partition.
pub async fn delete_records(
    command: DeleteRecordsCommand,
) -> Result<Vec<PartitionOffset>, anyhow::Error> {
    let admin = AdminWrapper::create(&command.connection_settings)
        .context("While creating admin client")?;

    let mut offsets = TopicPartitionList::new();
    for (partition, offset) in &command.partition_offsets {
        offsets
            .add_partition_offset(&command.topic, *partition, Offset::Offset(*offset))
            .context("While building topic partition list")?;
    }

    let result = admin
        .delete_records(&offsets, &AdminOptions::new())
        .await
        .context("While deleting records")?;

    low_watermarks(&result)
}

/// The broker reports the outcome per partition, a failed partition must
/// fail the whole call instead of surfacing as a bogus watermark.
fn low_watermarks(result: &TopicPartitionList) -> Result<Vec<PartitionOffset>, anyhow::Error> {
    let mut watermarks = Vec::with_capacity(result.count());
    for elem in result.elements() {
        elem.error().with_context(|| {
            format!(
                "While deleting records from topic {}, partition {}",
                elem.topic(),
                elem.partition()
            )
        })?;
        watermarks.push(PartitionOffset::new(
            elem.partition(),
            elem.offset().to_raw().unwrap_or(-1),
        ));
    }
    Ok(watermarks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watermarks_are_taken_from_successful_elements() {
        let mut result = TopicPartitionList::new();
        result
            .add_partition_offset("test-topic", 0, Offset::Offset(10))
            .unwrap();
        result
            .add_partition_offset("test-topic", 1, Offset::Offset(25))
            .unwrap();

        let watermarks = low_watermarks(&result).unwrap();

        assert_eq!(watermarks.len(), 2);
        assert_eq!(*watermarks[0].partition(), 0);
        assert_eq!(*watermarks[0].offset(), 10);
        assert_eq!(*watermarks[1].partition(), 1);
        assert_eq!(*watermarks[1].offset(), 25);
    }

    #[test]
    fn unresolved_offset_maps_to_sentinel() {
        let mut result = TopicPartitionList::new();
        result.add_partition("test-topic", 0);

        let watermarks = low_watermarks(&result).unwrap();

        assert_eq!(*watermarks[0].offset(), -1);
    }
}
