use crate::cli::print_subcommand_help;
use crate::commands::ConnectionArgs;
use crate::output;
use clap::Args;
use kafka_client::queries::read_messages::{read_messages, ReadMessagesQuery, StartOffset};
use tokio::select;
use tokio_util::sync::CancellationToken;
use tracing::info;

#[derive(Debug, Args)]
pub struct ConsumerArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// REQUIRED: the topic to consume
    #[arg(long, default_value = "")]
    pub topic: String,

    /// The partition to consume
    #[arg(long, default_value_t = 0)]
    pub partition: i32,

    /// Which offset to start from, -2 means oldest, -1 means newest
    #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
    pub offset: i64,
}

pub async fn run(args: ConsumerArgs) -> Result<(), anyhow::Error> {
    if args.topic.is_empty() {
        return print_subcommand_help("consumer");
    }
    let connection_settings = args.connection.to_settings()?;
    let start_offset = StartOffset::from_raw(args.offset)?;

    let cancellation_token = CancellationToken::new();
    let mut receiver = read_messages(
        ReadMessagesQuery {
            connection_settings,
            topic: args.topic.clone(),
            partition: args.partition,
            start_offset,
        },
        cancellation_token.clone(),
    )
    .await?;

    info!(
        topic = %args.topic,
        partition = args.partition,
        "Consuming started, press ctrl-c to stop"
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
