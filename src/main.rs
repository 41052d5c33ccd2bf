use anyhow::Result;
use chess_core::logic::board::START_FEN;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "chess_bot", version, about = "Fixed-depth negamax chess bot")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search a position and print the best move
    Search {
        #[arg(long, default_value = START_FEN)]
        fen: String,
        #[arg(short, long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(1..=32))]
        depth: u8,
        /// JSON tuning file; piece values and ordering bonuses are scale factors
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Let the engine play both sides
    Play {
        #[arg(long, default_value = START_FEN)]
        fen: String,
        #[arg(short, long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=32))]
        depth: u8,
        /// Stop after this many plies even if the game is not over
        #[arg(long, default_value_t = 80)]
        plies: usize,
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Static evaluation of a position
    Eval {
        #[arg(long, default_value = START_FEN)]
        fen: String,
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Search {
            fen,
            depth,
            config,
            json,
        } => commands::search(&fen, depth, config.as_deref(), json),
        Command::Play {
            fen,
            depth,
            plies,
            config,
        } => commands::play(&fen, depth, plies, config.as_deref()),
        Command::Eval { fen, config } => commands::eval(&fen, config.as_deref()),
    }
}
