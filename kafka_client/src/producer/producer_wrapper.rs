use crate::connection_settings::KafkaConnectionSettings;
use crate::consumer::PartitionOffset;
use crate::producer::Partitioner;
use anyhow::Context;
use rdkafka::message::{Header, OwnedHeaders};
use rdkafka::producer::{FutureProducer, FutureRecord};
use rdkafka::util::Timeout;
use rdkafka::ClientConfig;
use std::collections::HashMap;
use std::ops::{Deref, DerefMut};

pub struct ProducerWrapper {
    producer: FutureProducer,
}

impl ProducerWrapper {
    /// Synchronous producer, waits for acknowledgment from all in-sync
    /// replicas before the delivery report resolves.
    pub fn create(
        settings: &KafkaConnectionSettings,
        partitioner: &Partitioner,
    ) -> Result<Self, anyhow::Error> {
        let mut config = ClientConfig::try_from(settings)?;
        config
            .set("acks", "all")
            .set("message.timeout.ms", "5000")
            .set("linger.ms", "0");
        if let Partitioner::Random = partitioner {
            config.set("partitioner", "random");
        }
        let producer: FutureProducer = config
            .create()
            .context("While creating a kafka FutureProducer")?;

        Ok(Self { producer })
    }

    pub async fn produce_message(
        &self,
        topic: &str,
        partition: Option<i32>,
        key: Option<&[u8]>,
        payload: Option<&[u8]>,
        headers: &HashMap<String, String>,
    ) -> Result<PartitionOffset, anyhow::Error> {
        let mut owned_headers = None;
        if !headers.is_empty() {
            let mut new_headers = OwnedHeaders::new_with_capacity(headers.len());
            for (header_key, header_value) in headers {
                new_headers = new_headers.insert(Header {
                    key: header_key.as_str(),
                    value: Some(header_value.as_bytes()),
                });
            }
            owned_headers = Some(new_headers);
        }

        let record = FutureRecord {
            topic,
            partition,
            timestamp: None,
            key,
            payload,
            headers: owned_headers,
        };

        match self.producer.send(record, Timeout::Never).await {
            Ok((partition, offset)) => Ok(PartitionOffset::new(partition, offset)),
            Err((kafka_error, _message)) => {
                Err(anyhow::Error::from(kafka_error).context("While producing message"))
            }
        }
    }
}

impl DerefMut for ProducerWrapper {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.producer
    }
}

impl Deref for ProducerWrapper {
    type Target = FutureProducer;

    fn deref(&self) -> &Self::Target {
        &self.producer
    }
}
