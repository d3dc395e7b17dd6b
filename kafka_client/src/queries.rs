pub mod consume_group;
pub mod describe_groups;
pub mod describe_log_dirs;
pub mod describe_topics;
pub mod get_cluster_metadata;
pub mod list_group_offsets;
pub mod list_groups;
pub mod list_topics;
pub mod read_messages;
