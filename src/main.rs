use crate::cli::Cli;
use crate::client::Client;
use crate::game::Game;
use clap::Parser;
use common::DiceRoller;
use futures::StreamExt;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_stream::wrappers::LinesStream;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;
mod client;
mod game;
mod render;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Stdout belongs to the game, so logs go to a file
    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, "snakes.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(non_blocking)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let rng = match cli.seed {
        Some(seed) => DiceRoller::seeded(seed),
        None => DiceRoller::default(),
    };
    let client = if cli.json { Client::Json } else { Client::Text };
    let pause = Duration::from_millis(cli.pause_ms);
    info!(seed = ?cli.seed, json = cli.json, pause_ms = cli.pause_ms, "starting session");

    let mut game = Game::new(rng);
    game.start(&client);

    let mut lines = LinesStream::new(BufReader::new(tokio::io::stdin()).lines());
    while let Some(line) = lines.next().await {
        game.handle_message(&line?, &client);
        if game.is_resolving() {
            tokio::time::sleep(pause).await;
            game.resolve(&client);
        }
        if game.is_over() {
            break;
        }
    }

    info!("session ended");
    Ok(())
}
