use crate::commands::admin::AdminArgs;
use crate::commands::consumer::ConsumerArgs;
use crate::commands::consumer_group::ConsumerGroupArgs;
use crate::commands::producer::ProducerArgs;
use crate::commands::topic::TopicArgs;
use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "kafka-cli",
    version,
    about = "A command line tool for apache kafka",
    long_about = "A command line tool for apache kafka, covering topic, consumer, producer and admin operations"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Kafka topic operations: create, list, describe, delete, add partitions
    Topic(TopicArgs),
    /// Kafka admin operations: records, consumer groups, cluster, log dirs
    Admin(AdminArgs),
    /// Consume kafka messages from a single topic partition
    Consumer(ConsumerArgs),
    /// Consume kafka messages from a set of topics with a consumer group
    Consumerg(ConsumerGroupArgs),
    /// A synchronous kafka producer, waits for the broker acknowledgment
    Producer(ProducerArgs),
}

/// Printed when a subcommand is invoked with no mode flag at all.
pub fn print_subcommand_help(name: &str) -> Result<(), anyhow::Error> {
    let mut command = Cli::command();
    if let Some(subcommand) = command.find_subcommand_mut(name) {
        subcommand
            .print_help()
            .with_context(|| format!("While printing help for {name}"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }
}
