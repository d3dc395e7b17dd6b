use crate::connection_settings::KafkaConnectionSettings;

#[derive(Debug)]
pub struct AddPartitionsCommand {
    pub connection_settings: KafkaConnectionSettings,
    pub topic: String,
    /// New total partition count, must exceed the current one.
    pub new_partition_count: usize,
}
