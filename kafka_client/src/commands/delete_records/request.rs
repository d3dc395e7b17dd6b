use crate::connection_settings::KafkaConnectionSettings;
use std::collections::HashMap;

#[derive(Debug)]
pub struct DeleteRecordsCommand {
    pub connection_settings: KafkaConnectionSettings,
    pub topic: String,
    /// Records below the given offset are deleted in each listed partition.
    pub partition_offsets: HashMap<i32, i64>,
}
