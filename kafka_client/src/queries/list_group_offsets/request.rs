use crate::connection_settings::KafkaConnectionSettings;
use std::collections::HashMap;

#[derive(Debug)]
pub struct ListGroupOffsetsQuery {
    pub connection_settings: KafkaConnectionSettings,
    pub group: String,
    /// Every topic is queried over its full partition list.
    pub topic_partitions: HashMap<String, Vec<i32>>,
}
