//! Play command - Load or train an agent, then play one game in the terminal

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result, bail};
use clap::Parser;

use crate::{
    adapters::{TerminalConsole, repository_for},
    app::{App, Startup},
    cli::config::{HyperparameterArgs, TableArgs},
    pipeline::{ProgressObserver, TrainingConfig},
    ports::{Console, Observer},
    session::{InteractiveSession, SessionOutcome},
};

#[derive(Parser, Debug, Clone)]
#[command(about = "Play against the agent, training it first if no Q-table exists")]
pub struct PlayArgs {
    #[command(flatten)]
    pub table: TableArgs,

    /// Self-play episodes to run when no Q-table exists yet
    #[arg(long, short = 'e', default_value_t = 50_000)]
    pub episodes: usize,

    /// Exploration rate while playing (defaults to the training epsilon)
    #[arg(long)]
    pub play_epsilon: Option<f64>,

    /// Hide the training progress bar
    #[arg(long, short = 'q', default_value_t = false)]
    pub quiet: bool,

    #[command(flatten)]
    pub hyperparameters: HyperparameterArgs,
}

impl Default for PlayArgs {
    fn default() -> Self {
        Self {
            table: TableArgs::default(),
            episodes: 50_000,
            play_epsilon: None,
            quiet: false,
            hyperparameters: HyperparameterArgs::default(),
        }
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let stdin = io::stdin();
    run(args, stdin.lock(), io::stdout())?;
    Ok(())
}

/// Run the play command over an arbitrary input/output pair.
pub fn run<R: BufRead, W: Write>(args: PlayArgs, input: R, output: W) -> Result<SessionOutcome> {
    let config = args.hyperparameters.to_agent_config();
    let play_epsilon = args.play_epsilon.unwrap_or(config.epsilon);
    if !(0.0..=1.0).contains(&play_epsilon) {
        bail!("--play-epsilon must be within [0, 1], got {play_epsilon}");
    }

    let path: PathBuf = args.table.table;
    let app = App::with_repository(repository_for(&path));
    let mut console = TerminalConsole::new(input, output);

    if !app.repository().exists(&path) {
        console.show_message("Training AI...")?;
    }

    let observers: Vec<Box<dyn Observer>> = if args.quiet {
        Vec::new()
    } else {
        vec![Box::new(ProgressObserver::new())]
    };
    let (mut agent, startup) = app
        .load_or_train(config, &path, TrainingConfig::new(args.episodes), observers)
        .with_context(|| format!("failed to prepare agent from {}", path.display()))?;

    match startup {
        Startup::Loaded { .. } => console.show_message("Loaded existing Q-table.")?,
        Startup::Trained(_) => console.show_message("Training completed and Q-table saved!")?,
    }
    console.show_message("Ready to play!")?;

    let mut session = InteractiveSession::new(console, play_epsilon);
    let outcome = session.play(&mut agent).context("game aborted")?;
    Ok(outcome)
}
