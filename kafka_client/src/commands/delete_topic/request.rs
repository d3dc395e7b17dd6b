use crate::connection_settings::KafkaConnectionSettings;

#[derive(Debug)]
pub struct DeleteTopicCommand {
    pub connection_settings: KafkaConnectionSettings,
    pub topic: String,
}
