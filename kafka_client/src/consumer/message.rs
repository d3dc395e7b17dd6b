use crate::consumer::PartitionOffset;
use chrono::{DateTime, Utc};
use rdkafka::message::{BorrowedMessage, Headers};
use rdkafka::{Message, Timestamp};
use std::collections::HashMap;

#[derive(Debug)]
pub struct KafkaMessage {
    pub topic: String,
    pub partition_offset: PartitionOffset,
    pub timestamp: Option<DateTime<Utc>>,
    pub key: Option<String>,
    pub body: Option<String>,
    pub headers: Option<HashMap<String, String>>,
}

impl From<&BorrowedMessage<'_>> for KafkaMessage {
    fn from(message: &BorrowedMessage<'_>) -> Self {
        let timestamp = match message.timestamp() {
            Timestamp::NotAvailable => None,
            Timestamp::CreateTime(millis) | Timestamp::LogAppendTime(millis) => {
                DateTime::from_timestamp_millis(millis)
            }
        };

        let headers = message.headers().map(|headers| {
            headers
                .iter()
                .map(|header| {
                    let value = header
                        .value
                        .map(|bytes| String::from_utf8_lossy(bytes).to_string())
                        .unwrap_or_default();
                    (header.key.to_owned(), value)
                })
                .collect::<HashMap<_, _>>()
        });

        Self {
            topic: message.topic().to_owned(),
            partition_offset: PartitionOffset::new(message.partition(), message.offset()),
            timestamp,
            key: message
                .key()
                .map(|bytes| String::from_utf8_lossy(bytes).to_string()),
            body: message
                .payload()
                .map(|bytes| String::from_utf8_lossy(bytes).to_string()),
            headers,
        }
    }
}
