#![warn(unused_imports)]
#![deny(clippy::clone_on_copy)]
#![deny(forgetting_copy_types)]
#![deny(clippy::style)]

mod cli;
mod commands;
mod flags;
mod output;

use crate::cli::{Cli, Command};
use clap::Parser;
use tracing::error;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

#[tokio::main]
async fn main() {
    let log_level = std::env::var("RUST_LOG").unwrap_or("info".to_owned());

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(log_level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_filter(filter))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        error!("kafka-cli failed: {:?}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), anyhow::Error> {
    match cli.command {
        Command::Topic(args) => commands::topic::run(args).await,
        Command::Admin(args) => commands::admin::run(args).await,
        Command::Consumer(args) => commands::consumer::run(args).await,
        Command::Consumerg(args) => commands::consumer_group::run(args).await,
        Command::Producer(args) => commands::producer::run(args).await,
    }
}
