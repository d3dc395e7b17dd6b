use crate::connection_settings::KafkaConnectionSettings;

#[derive(Debug)]
pub struct GetClusterMetadataQuery {
    pub connection_settings: KafkaConnectionSettings,
}
