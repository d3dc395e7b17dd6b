use crate::connection_settings::KafkaConnectionSettings;

#[derive(Debug)]
pub struct ListTopicsQuery {
    pub connection_settings: KafkaConnectionSettings,
}
