use crate::connection_settings::KafkaConnectionSettings;

#[derive(Debug)]
pub struct CreateTopicCommand {
    pub connection_settings: KafkaConnectionSettings,
    pub topic: String,
    pub num_partitions: i32,
    pub replication_factor: i32,
}
