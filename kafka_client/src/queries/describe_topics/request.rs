use crate::connection_settings::KafkaConnectionSettings;

#[derive(Debug)]
pub struct DescribeTopicsQuery {
    pub connection_settings: KafkaConnectionSettings,
    pub topics: Vec<String>,
}
