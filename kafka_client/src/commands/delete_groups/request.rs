use crate::connection_settings::KafkaConnectionSettings;

#[derive(Debug)]
pub struct DeleteGroupsCommand {
    pub connection_settings: KafkaConnectionSettings,
    pub groups: Vec<String>,
}
