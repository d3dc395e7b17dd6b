use crate::connection_settings::KafkaConnectionSettings;

#[derive(Debug)]
pub struct DescribeGroupsQuery {
    pub connection_settings: KafkaConnectionSettings,
    pub groups: Vec<String>,
}
