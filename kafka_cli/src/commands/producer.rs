use crate::commands::ConnectionArgs;
use crate::flags::parse_headers;
use anyhow::{bail, Context};
use clap::Args;
use kafka_client::commands::produce_message::{produce_message, ProduceMessageCommand};
use kafka_client::producer::Partitioner;
use tracing::info;

#[derive(Debug, Args)]
pub struct ProducerArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// REQUIRED: the topic to produce to
    #[arg(long, default_value = "")]
    pub topic: String,

    /// The key of the message
    #[arg(long, default_value = "")]
    pub key: String,

    /// REQUIRED: the message content to produce
    #[arg(long, default_value = "")]
    pub value: String,

    /// The partitioning scheme to use, can be hash, manual or random
    #[arg(long, default_value = "hash")]
    pub partitioner: String,

    /// The partition to produce to, a non-negative value selects the
    /// manual partitioner
    #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
    pub partition: i32,

    /// The message headers, example: --headers=foo:bar,bar:foo
    #[arg(long, default_value = "")]
    pub headers: String,
}

impl ProducerArgs {
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.topic.is_empty() {
            bail!("empty topic");
        }
        if self.value.is_empty() {
            bail!("empty value");
        }
        Ok(())
    }
}

pub async fn run(args: ProducerArgs) -> Result<(), anyhow::Error> {
    args.validate()
        .context("While validating producer flags")?;
    let headers = parse_headers(&args.headers)?;
    let partitioner = Partitioner::from_scheme(&args.partitioner, args.partition);
    let connection_settings = args.connection.to_settings()?;
    let key = (!args.key.is_empty()).then(|| args.key.clone());

    let partition_offset = produce_message(ProduceMessageCommand {
        connection_settings,
        topic: args.topic.clone(),
        partitioner,
        key,
        value: args.value.clone(),
        headers,
    })
    .await?;

    info!(
        partition = *partition_offset.partition(),
        offset = *partition_offset.offset(),
        "Send message success"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> ProducerArgs {
        ProducerArgs {
            connection: ConnectionArgs::localhost(),
            topic: "t1".to_owned(),
            key: String::new(),
            value: "test value".to_owned(),
            partitioner: "hash".to_owned(),
            partition: -1,
            headers: String::new(),
        }
    }

    #[test]
    fn valid_flags_pass() {
        assert!(args().validate().is_ok());
    }

    #[test]
    fn empty_topic_is_rejected() {
        let mut args = args();
        args.topic = String::new();

        let error = args.validate().unwrap_err();
        assert!(error.to_string().contains("topic"));
    }

    #[test]
    fn empty_value_is_rejected() {
        let mut args = args();
        args.value = String::new();

        let error = args.validate().unwrap_err();
        assert!(error.to_string().contains("value"));
    }
}
