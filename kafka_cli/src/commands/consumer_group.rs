use crate::cli::print_subcommand_help;
use crate::commands::ConnectionArgs;
use crate::flags::parse_list;
use crate::output;
use clap::Args;
use kafka_client::queries::consume_group::{consume_group, ConsumeGroupQuery};
use tokio::select;
use tokio_util::sync::CancellationToken;
use tracing::info;

#[derive(Debug, Args)]
pub struct ConsumerGroupArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// The topics to consume, more than one separated by commas
    #[arg(long, default_value = "")]
    pub topics: String,

    /// The consumer group id, offsets are committed under it
    #[arg(long, default_value = "kafka-cli")]
    pub group_id: String,
}

pub async fn run(args: ConsumerGroupArgs) -> Result<(), anyhow::Error> {
    if args.topics.is_empty() {
        return print_subcommand_help("consumerg");
    }
    let connection_settings = args.connection.to_settings()?;
    let topics = parse_list(&args.topics);

    let cancellation_token = CancellationToken::new();
    let mut receiver = consume_group(
        ConsumeGroupQuery {
            connection_settings,
            group: args.group_id.clone(),
            topics,
        },
        cancellation_token.clone(),
    )
    .await?;

    info!(
        topics = %args.topics,
        group = %args.group_id,
        "Group consuming started, press ctrl-c to stop"
    );

    loop {
        select! {
            message = receiver.recv() => {
                match message {
                    Some(message) => output::print_message(&message),
                    None => break,
                }
            }
            _ = tokio::signal::ctrl_c() => {
                cancellation_token.cancel();
                break;
            }
        }
    }

    Ok(())
}
