use clap::Parser;
use std::path::PathBuf;

/// Two-player Snakes and Ladders in the terminal
#[derive(Parser, Debug)]
#[command(name = "snakes-ladders", version)]
pub struct Cli {
    /// Seed for the dice, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Milliseconds to wait between a move and its ladder or snake
    #[arg(long, default_value_t = 500)]
    pub pause_ms: u64,

    /// Print responses as JSON lines instead of drawing the board
    #[arg(long)]
    pub json: bool,

    /// Directory for the rolling log file
    #[arg(long, default_value = "./logs")]
    pub log_dir: PathBuf,
}
