use crate::connection_settings::KafkaConnectionSettings;
use crate::consumer::AutoOffsetReset;
use anyhow::Context;
use rdkafka::consumer::StreamConsumer;
use rdkafka::ClientConfig;
use std::ops::{Deref, DerefMut};
use uuid::Uuid;

pub struct ConsumerWrapper {
    consumer: StreamConsumer,
}

impl ConsumerWrapper {
    /// Consumer for group consumption. Commits run on the auto-commit
    /// interval, offsets are stored manually after every handled message.
    pub fn create_for_consuming(
        settings: &KafkaConnectionSettings,
        group: &str,
        auto_offset_reset: AutoOffsetReset,
    ) -> Result<Self, anyhow::Error> {
        // https://raw.githubusercontent.com/confluentinc/librdkafka/master/CONFIGURATION.md
        let mut config = ClientConfig::try_from(settings)?;
        let consumer: StreamConsumer = config
            .set("group.id", group)
            .set("auto.offset.reset", auto_offset_reset.to_string())
            .set("enable.partition.eof", "false")
            .set("session.timeout.ms", "10000")
            .set("enable.auto.commit", "true")
            .set("enable.auto.offset.store", "false")
            .set("auto.commit.interval.ms", "4000")
            .set("heartbeat.interval.ms", "1000")
            .create()
            .context("While creating kafka StreamConsumer for group consuming")?;

        Ok(Self { consumer })
    }

    /// Consumer for explicit partition assignment. The group id is an
    /// ephemeral uuid, nothing is ever committed.
    pub fn create_for_assigning(
        settings: &KafkaConnectionSettings,
    ) -> Result<Self, anyhow::Error> {
        let mut config = ClientConfig::try_from(settings)?;
        let consumer: StreamConsumer = config
            .set("group.id", Uuid::now_v7().to_string())
            .set("enable.partition.eof", "false")
            .set("session.timeout.ms", "10000")
            .set("enable.auto.commit", "false")
            .create()
            .context("While creating kafka StreamConsumer for partition assignment")?;

        Ok(Self { consumer })
    }

    /// Bare consumer for metadata, group and committed-offset queries.
    pub fn create_for_metadata(
        settings: &KafkaConnectionSettings,
        group: Option<&str>,
    ) -> Result<Self, anyhow::Error> {
        let mut config = ClientConfig::try_from(settings)?;
        if let Some(group) = group {
            config.set("group.id", group);
        }
        let consumer: StreamConsumer = config
            .create()
            .context("While creating kafka StreamConsumer for metadata")?;

        Ok(Self { consumer })
    }
}

impl DerefMut for ConsumerWrapper {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.consumer
    }
}

impl Deref for ConsumerWrapper {
    type Target = StreamConsumer;

    fn deref(&self) -> &Self::Target {
        &self.consumer
    }
}
