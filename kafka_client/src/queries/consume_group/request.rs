use crate::connection_settings::KafkaConnectionSettings;

#[derive(Debug)]
pub struct ConsumeGroupQuery {
    pub connection_settings: KafkaConnectionSettings,
    pub group: String,
    pub topics: Vec<String>,
}
