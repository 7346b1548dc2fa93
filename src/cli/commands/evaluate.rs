//! Evaluate command - Play a trained agent greedily against a random opponent

use std::{fs::File, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use crate::{
    adapters::repository_for,
    app::{AgentConfig, App},
    cli::{
        config::TableArgs,
        output::{format_number, format_rate, print_kv, print_section},
    },
    pipeline::{Evaluation, EvaluationResult, RandomPlayer},
};

#[derive(Parser, Debug)]
#[command(about = "Evaluate a trained agent against a random opponent")]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub table: TableArgs,

    /// Number of evaluation games
    #[arg(long, short = 'g', default_value_t = 1_000)]
    pub games: usize,

    /// Seed for the random opponent
    #[arg(long)]
    pub opponent_seed: Option<u64>,

    /// Export results to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Seed for the agent's tie-breaking among equal estimates
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
struct EvaluationExport {
    table: String,
    states: usize,
    opponent: &'static str,
    #[serde(flatten)]
    result: EvaluationResult,
    win_rate: f64,
    draw_rate: f64,
    loss_rate: f64,
}

pub fn execute(args: EvaluateArgs) -> Result<EvaluationResult> {
    let path = &args.table.table;
    let app = App::with_repository(repository_for(path));
    let config = match args.seed {
        Some(seed) => AgentConfig::default().with_seed(seed),
        None => AgentConfig::default(),
    };
    let mut agent = app
        .load_agent(config, path)
        .with_context(|| format!("failed to load Q-table from {}", path.display()))?;

    let mut opponent = match args.opponent_seed {
        Some(seed) => RandomPlayer::with_seed(seed),
        None => RandomPlayer::new(),
    };

    print_section("Evaluation");
    print_kv("Table", &path.display().to_string());
    print_kv("States", &format_number(agent.table().len()));
    print_kv("Opponent", "Random");
    print_kv("Games", &format_number(args.games));

    let result = Evaluation::run(&mut agent, &mut opponent, args.games)?;

    print_section("Results");
    print_kv(
        "Wins",
        &format!("{} ({})", format_number(result.wins), format_rate(result.win_rate())),
    );
    print_kv(
        "Draws",
        &format!("{} ({})", format_number(result.draws), format_rate(result.draw_rate())),
    );
    print_kv(
        "Losses",
        &format!("{} ({})", format_number(result.losses), format_rate(result.loss_rate())),
    );

    if let Some(export) = &args.export {
        let file = File::create(export)
            .with_context(|| format!("failed to create {}", export.display()))?;
        let record = EvaluationExport {
            table: path.display().to_string(),
            states: agent.table().len(),
            opponent: "Random",
            result,
            win_rate: result.win_rate(),
            draw_rate: result.draw_rate(),
            loss_rate: result.loss_rate(),
        };
        serde_json::to_writer_pretty(file, &record)
            .with_context(|| format!("failed to write {}", export.display()))?;
        println!("\nResults exported to {}", export.display());
    }

    Ok(result)
}
