pub mod add_partitions;
pub mod create_topic;
pub mod delete_groups;
pub mod delete_records;
pub mod delete_topic;
pub mod produce_message;
