use crate::connection_settings::KafkaConnectionSettings;

#[derive(Debug)]
pub struct DescribeLogDirsQuery {
    pub connection_settings: KafkaConnectionSettings,
    pub broker_ids: Vec<i32>,
}
