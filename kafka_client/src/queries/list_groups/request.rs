use crate::connection_settings::KafkaConnectionSettings;

#[derive(Debug)]
pub struct ListGroupsQuery {
    pub connection_settings: KafkaConnectionSettings,
}
