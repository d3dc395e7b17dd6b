use crate::connection_settings::KafkaConnectionSettings;
use crate::producer::Partitioner;
use std::collections::HashMap;

#[derive(Debug)]
pub struct ProduceMessageCommand {
    pub connection_settings: KafkaConnectionSettings,
    pub topic: String,
    pub partitioner: Partitioner,
    pub key: Option<String>,
    pub value: String,
    pub headers: HashMap<String, String>,
}
