//! Q-learning Tic-Tac-Toe CLI
//!
//! Running without a subcommand plays a game against the agent, training it
//! first when no saved Q-table exists.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use qtictactoe::cli::commands::{evaluate, inspect, play, train};

#[derive(Parser)]
#[command(name = "qtictactoe")]
#[command(version, about = "Tabular Q-learning Tic-Tac-Toe agent", long_about = None)]
struct Cli {
    /// Log lifecycle events (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Train an agent by self-play and save its Q-table
    Train(train::TrainArgs),

    /// Play against the agent (default)
    Play(play::PlayArgs),

    /// Evaluate a saved agent against a random opponent
    Evaluate(evaluate::EvaluateArgs),

    /// Show statistics of a saved Q-table
    Inspect(inspect::InspectArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    match cli.command {
        Some(Commands::Train(args)) => train::execute(args),
        Some(Commands::Play(args)) => play::execute(args),
        Some(Commands::Evaluate(args)) => evaluate::execute(args).map(|_| ()),
        Some(Commands::Inspect(args)) => inspect::execute(args),
        None => play::execute(play::PlayArgs::default()),
    }
}
