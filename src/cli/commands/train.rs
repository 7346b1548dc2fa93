//! Train command - Self-play training of a fresh agent

use std::{
    fs::File,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use serde_json::to_writer_pretty;

use crate::{
    adapters::{DEFAULT_TABLE_PATH, repository_for},
    app::{AgentConfig, App},
    cli::{
        config::HyperparameterArgs,
        output::{format_number, format_rate, print_kv, print_section},
    },
    pipeline::{MilestoneObserver, ProgressObserver, TrainingConfig, TrainingLoop, TrainingResult},
};

#[derive(Debug, Serialize)]
struct TrainingSummaryFile<'a> {
    training: &'a TrainingResult,
    hyperparameters: &'a AgentConfig,
    table: String,
}

fn sanitize_summary_path(raw: &Path) -> PathBuf {
    let mut normalized = raw.to_path_buf();
    let raw_str = raw.as_os_str().to_string_lossy();

    // trailing separator or no file name means a directory target
    if raw_str.ends_with(std::path::MAIN_SEPARATOR) || normalized.file_name().is_none() {
        normalized.push("training_summary.json");
        return normalized;
    }

    match normalized.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => normalized,
        _ => {
            normalized.set_extension("json");
            normalized
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "Train a Q-learning agent by self-play")]
pub struct TrainArgs {
    /// Number of self-play episodes
    #[arg(long, short = 'e', default_value_t = 50_000)]
    pub episodes: usize,

    /// Where to save the trained Q-table (`.json` for JSON)
    #[arg(long, short = 'o', default_value = DEFAULT_TABLE_PATH)]
    pub output: PathBuf,

    /// Optional path for writing a summary JSON file
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Log outcome counts every N episodes
    #[arg(long)]
    pub log_every: Option<usize>,

    /// Hide the progress bar
    #[arg(long, short = 'q', default_value_t = false)]
    pub quiet: bool,

    #[command(flatten)]
    pub hyperparameters: HyperparameterArgs,
}

pub fn execute(args: TrainArgs) -> Result<()> {
    let config = args.hyperparameters.to_agent_config();
    let app = App::with_repository(repository_for(&args.output));
    let mut agent = app
        .create_agent(config.clone())
        .context("invalid hyperparameters")?;

    print_section("Training");
    print_kv("Episodes", &format_number(args.episodes));
    print_kv("Alpha", &config.learning_rate.to_string());
    print_kv("Gamma", &config.discount_factor.to_string());
    print_kv("Epsilon", &config.epsilon.to_string());
    if config.epsilon_decay < 1.0 {
        print_kv(
            "Epsilon decay",
            &format!("{} (min {})", config.epsilon_decay, config.min_epsilon),
        );
    }
    if let Some(seed) = config.seed {
        print_kv("Seed", &seed.to_string());
    }
    print_kv("Output", &args.output.display().to_string());

    let mut training = TrainingLoop::new(TrainingConfig::new(args.episodes))
        .with_snapshot(app.repository(), &args.output);
    if !args.quiet {
        training = training.with_observer(Box::new(ProgressObserver::new()));
    }
    if let Some(interval) = args.log_every {
        training = training.with_observer(Box::new(MilestoneObserver::new(interval)));
    }

    let result = training
        .run(&mut agent)
        .with_context(|| format!("training failed; {} not written", args.output.display()))?;

    print_section("Results");
    print_kv(
        "X wins",
        &format!("{} ({})", format_number(result.x_wins), format_rate(result.x_win_rate)),
    );
    print_kv(
        "O wins",
        &format!("{} ({})", format_number(result.o_wins), format_rate(result.o_win_rate)),
    );
    print_kv(
        "Draws",
        &format!("{} ({})", format_number(result.draws), format_rate(result.draw_rate)),
    );
    print_kv("States", &format_number(result.states));
    print_kv("Final epsilon", &format!("{:.4}", result.final_epsilon));

    if let Some(raw) = &args.summary {
        let path = sanitize_summary_path(raw);
        write_summary(&path, &result, &config, &args.output)?;
        println!("\nSummary written to {}", path.display());
    }

    println!("\nTraining completed and Q-table saved!");
    Ok(())
}

fn write_summary(
    path: &Path,
    result: &TrainingResult,
    config: &AgentConfig,
    table: &Path,
) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let summary = TrainingSummaryFile {
        training: result,
        hyperparameters: config,
        table: table.display().to_string(),
    };
    to_writer_pretty(file, &summary)
        .with_context(|| format!("failed to write summary to {}", path.display()))?;
    Ok(())
}
