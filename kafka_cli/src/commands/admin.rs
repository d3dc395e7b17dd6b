use crate::cli::print_subcommand_help;
use crate::commands::ConnectionArgs;
use crate::flags::{parse_i32_list, parse_list, partition_offsets, topic_partitions};
use crate::output;
use anyhow::{bail, Context};
use clap::Args;
use kafka_client::commands::delete_groups::{delete_groups, DeleteGroupsCommand};
use kafka_client::commands::delete_records::{delete_records, DeleteRecordsCommand};
use kafka_client::queries::describe_groups::{describe_groups, DescribeGroupsQuery};
use kafka_client::queries::describe_log_dirs::{describe_log_dirs, DescribeLogDirsQuery};
use kafka_client::queries::get_cluster_metadata::{get_cluster_metadata, GetClusterMetadataQuery};
use kafka_client::queries::list_group_offsets::{list_group_offsets, ListGroupOffsetsQuery};
use kafka_client::queries::list_groups::{list_groups, ListGroupsQuery};
use std::collections::HashMap;
use tracing::{error, info};

#[derive(Debug, Args)]
pub struct AdminArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Delete records below the given offset, requires --topics,
    /// --partitions and --offset
    #[arg(long)]
    pub delete_records: bool,

    /// List all consumer groups
    #[arg(long)]
    pub list_consumer_groups: bool,

    /// Describe consumer groups, requires --groups
    #[arg(long)]
    pub describe_groups: bool,

    /// Delete consumer groups, requires --groups
    #[arg(long)]
    pub delete_groups: bool,

    /// List committed consumer offsets over the cartesian product of
    /// --topics and --partitions, requires --groups
    #[arg(long)]
    pub list_consumer_offsets: bool,

    /// Get information about the nodes in the cluster
    #[arg(long)]
    pub describe_cluster: bool,

    /// Get the log directories of the given brokers, requires --brokers
    #[arg(long)]
    pub describe_log_dirs: bool,

    /// The topics the command acts on, separated by commas
    #[arg(long, default_value = "")]
    pub topics: String,

    /// The partitions the command acts on, separated by commas
    #[arg(long, default_value = "")]
    pub partitions: String,

    /// The offset the command acts on
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub offset: i64,

    /// The consumer groups the command acts on, separated by commas
    #[arg(long, default_value = "")]
    pub groups: String,

    /// The broker ids the command acts on, separated by commas
    #[arg(long, default_value = "")]
    pub brokers: String,
}

#[derive(Debug, PartialEq, Eq)]
pub enum AdminMode {
    DeleteRecords {
        topics: Vec<String>,
        partition_offsets: HashMap<i32, i64>,
    },
    ListGroups,
    DescribeGroups(Vec<String>),
    DeleteGroups(Vec<String>),
    ListGroupOffsets {
        groups: Vec<String>,
        topic_partitions: HashMap<String, Vec<i32>>,
    },
    DescribeCluster,
    DescribeLogDirs(Vec<i32>),
}

impl AdminArgs {
    /// Resolves the mode flags into one mode, first match in declaration
    /// order wins. Companion flags are validated before anything touches
    /// the broker.
    pub fn mode(&self) -> Result<Option<AdminMode>, anyhow::Error> {
        if self.delete_records {
            if self.topics.is_empty() || self.partitions.is_empty() || self.offset == 0 {
                bail!("when deleting records, topics, partitions and offset should not be empty");
            }
            Ok(Some(AdminMode::DeleteRecords {
                topics: parse_list(&self.topics),
                partition_offsets: partition_offsets(&self.partitions, self.offset)?,
            }))
        } else if self.list_consumer_groups {
            Ok(Some(AdminMode::ListGroups))
        } else if self.describe_groups {
            if self.groups.is_empty() {
                bail!("when describing groups, groups should not be empty");
            }
            Ok(Some(AdminMode::DescribeGroups(parse_list(&self.groups))))
        } else if self.delete_groups {
            if self.groups.is_empty() {
                bail!("when deleting groups, groups should not be empty");
            }
            Ok(Some(AdminMode::DeleteGroups(parse_list(&self.groups))))
        } else if self.list_consumer_offsets {
            if self.groups.is_empty() || self.topics.is_empty() || self.partitions.is_empty() {
                bail!(
                    "when listing consumer offsets, groups, topics and partitions should not be empty"
                );
            }
            Ok(Some(AdminMode::ListGroupOffsets {
                groups: parse_list(&self.groups),
                topic_partitions: topic_partitions(&self.topics, &self.partitions)?,
            }))
        } else if self.describe_cluster {
            Ok(Some(AdminMode::DescribeCluster))
        } else if self.describe_log_dirs {
            if self.brokers.is_empty() {
                bail!("when describing log dirs, brokers should not be empty");
            }
            Ok(Some(AdminMode::DescribeLogDirs(parse_i32_list(
                &self.brokers,
                "brokers",
            )?)))
        } else {
            Ok(None)
        }
    }
}

pub async fn run(args: AdminArgs) -> Result<(), anyhow::Error> {
    let mode = args.mode().context("While validating admin flags")?;
    let Some(mode) = mode else {
        return print_subcommand_help("admin");
    };
    let connection_settings = args.connection.to_settings()?;

    match mode {
        AdminMode::DeleteRecords {
            topics,
            partition_offsets,
        } => {
            let mut failed = false;
            for topic in topics {
                let command = DeleteRecordsCommand {
                    connection_settings: connection_settings.clone(),
                    topic: topic.clone(),
                    partition_offsets: partition_offsets.clone(),
                };
                match delete_records(command).await {
                    Ok(low_watermarks) => {
                        info!(topic = %topic, ?partition_offsets, "Delete records success");
                        output::print_low_watermarks(&topic, &low_watermarks);
                    }
                    Err(e) => {
                        error!(topic = %topic, "Delete records failed: {:?}", e);
                        failed = true;
                    }
                }
            }
            if failed {
                bail!("Deleting records failed for at least one topic");
            }
        }
        AdminMode::ListGroups => {
            let response = list_groups(ListGroupsQuery { connection_settings }).await?;
            output::print_groups(&response.groups);
        }
        AdminMode::DescribeGroups(groups) => {
            let response = describe_groups(DescribeGroupsQuery {
                connection_settings,
                groups,
            })
            .await?;
            for group in &response.groups {
                output::print_group_description(group);
            }
        }
        AdminMode::DeleteGroups(groups) => {
            let deletions = delete_groups(DeleteGroupsCommand {
                connection_settings,
                groups,
            })
            .await?;

            let mut failed = false;
            for deletion in &deletions {
                match &deletion.error {
                    None => info!(group = %deletion.group, "Delete consumer group success"),
                    Some(e) => {
                        error!(group = %deletion.group, error = %e, "Delete consumer group failed");
                        failed = true;
                    }
                }
            }
            if failed {
                bail!("Deleting consumer groups failed for at least one group");
            }
        }
        AdminMode::ListGroupOffsets {
            groups,
            topic_partitions,
        } => {
            for group in groups {
                let response = list_group_offsets(ListGroupOffsetsQuery {
                    connection_settings: connection_settings.clone(),
                    group,
                    topic_partitions: topic_partitions.clone(),
                })
                .await?;
                output::print_group_offsets(&response);
            }
        }
        AdminMode::DescribeCluster => {
            let response = get_cluster_metadata(GetClusterMetadataQuery { connection_settings })
                .await?;
            output::print_cluster(&response);
        }
        AdminMode::DescribeLogDirs(broker_ids) => {
            let response = describe_log_dirs(DescribeLogDirsQuery {
                connection_settings,
                broker_ids,
            })
            .await?;
            for broker in &response.brokers {
                output::print_broker_log_dirs(broker);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> AdminArgs {
        AdminArgs {
            connection: ConnectionArgs::localhost(),
            delete_records: false,
            list_consumer_groups: false,
            describe_groups: false,
            delete_groups: false,
            list_consumer_offsets: false,
            describe_cluster: false,
            describe_log_dirs: false,
            topics: String::new(),
            partitions: String::new(),
            offset: 0,
            groups: String::new(),
            brokers: String::new(),
        }
    }

    #[test]
    fn no_mode_flag_resolves_to_none() {
        assert!(args().mode().unwrap().is_none());
    }

    #[test]
    fn delete_records_requires_topics_partitions_and_offset() {
        let mut args = args();
        args.delete_records = true;
        args.topics = "t1".to_owned();
        args.partitions = "0".to_owned();

        let error = args.mode().unwrap_err();
        assert!(error.to_string().contains("topics, partitions and offset"));
    }

    #[test]
    fn delete_records_builds_the_partition_offset_map() {
        let mut args = args();
        args.delete_records = true;
        args.topics = "t1,t2".to_owned();
        args.partitions = "1,2,3".to_owned();
        args.offset = 100;

        let mode = args.mode().unwrap().unwrap();
        assert_eq!(
            mode,
            AdminMode::DeleteRecords {
                topics: vec!["t1".to_owned(), "t2".to_owned()],
                partition_offsets: HashMap::from([(1, 100), (2, 100), (3, 100)]),
            }
        );
    }

    #[test]
    fn delete_records_wins_over_describe_cluster() {
        let mut args = args();
        args.delete_records = true;
        args.describe_cluster = true;
        args.topics = "t1".to_owned();
        args.partitions = "0".to_owned();
        args.offset = 10;

        assert!(matches!(
            args.mode().unwrap().unwrap(),
            AdminMode::DeleteRecords { .. }
        ));
    }

    #[test]
    fn describe_groups_requires_groups() {
        let mut args = args();
        args.describe_groups = true;

        let error = args.mode().unwrap_err();
        assert!(error.to_string().contains("groups"));
    }

    #[test]
    fn consumer_offsets_use_the_cartesian_product() {
        let mut args = args();
        args.list_consumer_offsets = true;
        args.groups = "g1".to_owned();
        args.topics = "t1,t2".to_owned();
        args.partitions = "0,1".to_owned();

        let mode = args.mode().unwrap().unwrap();
        assert_eq!(
            mode,
            AdminMode::ListGroupOffsets {
                groups: vec!["g1".to_owned()],
                topic_partitions: HashMap::from([
                    ("t1".to_owned(), vec![0, 1]),
                    ("t2".to_owned(), vec![0, 1]),
                ]),
            }
        );
    }

    #[test]
    fn log_dirs_require_broker_ids() {
        let mut args = args();
        args.describe_log_dirs = true;

        assert!(args.mode().is_err());

        args.brokers = "0,1".to_owned();
        assert_eq!(
            args.mode().unwrap().unwrap(),
            AdminMode::DescribeLogDirs(vec![0, 1])
        );
    }
}
