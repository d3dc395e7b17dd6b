use crate::cli::print_subcommand_help;
use crate::commands::ConnectionArgs;
use crate::flags::parse_list;
use crate::output;
use clap::Args;
use kafka_client::commands::add_partitions::{add_partitions, AddPartitionsCommand};
use kafka_client::commands::create_topic::{create_topic, CreateTopicCommand};
use kafka_client::commands::delete_topic::{delete_topic, DeleteTopicCommand};
use kafka_client::queries::describe_topics::{describe_topics, DescribeTopicsQuery};
use kafka_client::queries::list_topics::{list_topics, ListTopicsQuery};
use tracing::info;

#[derive(Debug, Args)]
pub struct TopicArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// List all available topics
    #[arg(short = 'l', long)]
    pub list: bool,

    /// List details for the given topics, more than one separated by commas
    #[arg(long, default_value = "")]
    pub describe: String,

    /// Create a new topic
    #[arg(short = 'c', long, default_value = "")]
    pub create: String,

    /// The partition count used when creating a topic or adding partitions
    #[arg(long, default_value_t = 1)]
    pub partition_num: i32,

    /// The replica count used when creating a topic
    #[arg(long, default_value_t = 1)]
    pub replica_num: i32,

    /// Delete a topic
    #[arg(short = 'd', long, default_value = "")]
    pub delete: String,

    /// The topic to add partitions to, the new count must exceed the
    /// current one
    #[arg(long, default_value = "")]
    pub add_partition: String,
}

#[derive(Debug, PartialEq, Eq)]
pub enum TopicMode {
    List,
    Describe(Vec<String>),
    Create {
        topic: String,
        partition_num: i32,
        replica_num: i32,
    },
    Delete(String),
    AddPartitions {
        topic: String,
        partition_num: i32,
    },
}

impl TopicArgs {
    /// The first matching mode flag in declaration order wins.
    pub fn mode(&self) -> Option<TopicMode> {
        if self.list {
            Some(TopicMode::List)
        } else if !self.describe.is_empty() {
            Some(TopicMode::Describe(parse_list(&self.describe)))
        } else if !self.create.is_empty() {
            Some(TopicMode::Create {
                topic: self.create.clone(),
                partition_num: self.partition_num,
                replica_num: self.replica_num,
            })
        } else if !self.delete.is_empty() {
            Some(TopicMode::Delete(self.delete.clone()))
        } else if !self.add_partition.is_empty() {
            Some(TopicMode::AddPartitions {
                topic: self.add_partition.clone(),
                partition_num: self.partition_num,
            })
        } else {
            None
        }
    }
}

pub async fn run(args: TopicArgs) -> Result<(), anyhow::Error> {
    let Some(mode) = args.mode() else {
        return print_subcommand_help("topic");
    };
    let connection_settings = args.connection.to_settings()?;

    match mode {
        TopicMode::List => {
            let response = list_topics(ListTopicsQuery { connection_settings }).await?;
            for topic in &response.topics {
                output::print_topic(topic);
            }
        }
        TopicMode::Describe(topics) => {
            let response = describe_topics(DescribeTopicsQuery {
                connection_settings,
                topics,
            })
            .await?;
            for topic in &response.topics {
                output::print_topic_description(topic);
            }
        }
        TopicMode::Create {
            topic,
            partition_num,
            replica_num,
        } => {
            create_topic(CreateTopicCommand {
                connection_settings,
                topic: topic.clone(),
                num_partitions: partition_num,
                replication_factor: replica_num,
            })
            .await?;
            info!(
                topic = %topic,
                partition_num,
                replica_num,
                "Create topic success"
            );
        }
        TopicMode::Delete(topic) => {
            delete_topic(DeleteTopicCommand {
                connection_settings,
                topic: topic.clone(),
            })
            .await?;
            info!(topic = %topic, "Delete topic success");
        }
        TopicMode::AddPartitions {
            topic,
            partition_num,
        } => {
            add_partitions(AddPartitionsCommand {
                connection_settings,
                topic: topic.clone(),
                new_partition_count: partition_num as usize,
            })
            .await?;
            info!(topic = %topic, partition_num, "Add partition success");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> TopicArgs {
        TopicArgs {
            connection: ConnectionArgs::localhost(),
            list: false,
            describe: String::new(),
            create: String::new(),
            partition_num: 1,
            replica_num: 1,
            delete: String::new(),
            add_partition: String::new(),
        }
    }

    #[test]
    fn no_mode_flag_resolves_to_none() {
        assert_eq!(args().mode(), None);
    }

    #[test]
    fn list_wins_over_describe() {
        let mut args = args();
        args.list = true;
        args.describe = "t1".to_owned();

        assert_eq!(args.mode(), Some(TopicMode::List));
    }

    #[test]
    fn create_carries_partition_and_replica_counts() {
        let mut args = args();
        args.create = "t1".to_owned();
        args.partition_num = 3;
        args.replica_num = 2;

        assert_eq!(
            args.mode(),
            Some(TopicMode::Create {
                topic: "t1".to_owned(),
                partition_num: 3,
                replica_num: 2,
            })
        );
    }

    #[test]
    fn describe_splits_topic_list() {
        let mut args = args();
        args.describe = "t1,t2".to_owned();

        assert_eq!(
            args.mode(),
            Some(TopicMode::Describe(vec!["t1".to_owned(), "t2".to_owned()]))
        );
    }
}
