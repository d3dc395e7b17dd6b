pub mod admin;
pub mod consumer;
pub mod consumer_group;
pub mod producer;
pub mod topic;

use crate::flags::parse_list;
use clap::Args;
use kafka_client::connection_settings::KafkaConnectionSettings;

/// Connection flags shared by every subcommand.
#[derive(Debug, Args)]
pub struct ConnectionArgs {
    /// The Kafka servers to connect to, more than one separated by commas
    #[arg(
        short = 'b',
        long,
        alias = "bootstrap-server",
        default_value = "localhost:9092"
    )]
    pub bootstrap_servers: String,

    /// Security protocol to use: plaintext or ssl
    #[arg(long, default_value = "plaintext")]
    pub security_protocol: String,
}

impl ConnectionArgs {
    pub fn to_settings(&self) -> Result<KafkaConnectionSettings, anyhow::Error> {
        Ok(KafkaConnectionSettings {
            brokers: parse_list(&self.bootstrap_servers),
            security_protocol: self.security_protocol.parse()?,
        })
    }
}

#[cfg(test)]
impl ConnectionArgs {
    pub fn localhost() -> ConnectionArgs {
        ConnectionArgs {
            bootstrap_servers: "localhost:9092".to_owned(),
            security_protocol: "plaintext".to_owned(),
        }
    }
}
