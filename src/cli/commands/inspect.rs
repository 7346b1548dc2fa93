//! Inspect command - Summarize a saved Q-table

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    adapters::repository_for,
    cli::{
        config::TableArgs,
        output::{format_number, print_kv, print_section, print_subsection},
    },
    q_learning::{QTable, greedy_actions},
    tictactoe::Board,
    types::StateKey,
};

#[derive(Parser, Debug)]
#[command(about = "Show statistics of a saved Q-table")]
pub struct InspectArgs {
    #[command(flatten)]
    pub table: TableArgs,

    /// Board to show action values for, as nine cells (`X`, `O`, `.`)
    #[arg(long, short = 'b')]
    pub board: Option<String>,
}

/// Aggregate figures over every stored estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct TableStats {
    pub states: usize,
    pub nonzero_entries: usize,
    pub min_value: f64,
    pub max_value: f64,
}

impl TableStats {
    pub fn from_table(table: &QTable) -> Self {
        let values = table.iter().flat_map(|(_, values)| values.iter().copied());
        let (mut nonzero_entries, mut min_value, mut max_value) = (0, 0.0f64, 0.0f64);
        for value in values {
            if value != 0.0 {
                nonzero_entries += 1;
            }
            min_value = min_value.min(value);
            max_value = max_value.max(value);
        }
        Self {
            states: table.len(),
            nonzero_entries,
            min_value,
            max_value,
        }
    }
}

pub fn execute(args: InspectArgs) -> Result<()> {
    let path = &args.table.table;
    let table = repository_for(path)
        .load(path)
        .with_context(|| format!("failed to load Q-table from {}", path.display()))?;

    let stats = TableStats::from_table(&table);
    print_section("Q-table");
    print_kv("File", &path.display().to_string());
    print_kv("States", &format_number(stats.states));
    print_kv("Non-zero estimates", &format_number(stats.nonzero_entries));
    print_kv(
        "Value range",
        &format!("[{:.4}, {:.4}]", stats.min_value, stats.max_value),
    );

    if let Some(raw) = &args.board {
        let board = Board::from_string(raw).context("invalid --board")?;
        print_subsection("Board");
        println!("{board}");

        let state = StateKey::from_board(&board);
        let legal = board.legal_actions();
        match table.get(&state) {
            None => println!("\nState {state} has not been visited"),
            Some(values) => {
                print_subsection("Action values");
                let best = greedy_actions(values, &legal);
                for action in legal {
                    let marker = if best.contains(&action) { " *" } else { "" };
                    print_kv(&action.to_string(), &format!("{:+.4}{marker}", values[action]));
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_of_empty_table() {
        let stats = TableStats::from_table(&QTable::new());
        assert_eq!(stats.states, 0);
        assert_eq!(stats.nonzero_entries, 0);
        assert_eq!(stats.min_value, 0.0);
        assert_eq!(stats.max_value, 0.0);
    }

    #[test]
    fn test_stats_track_extremes() {
        let mut table = QTable::new();
        let state: StateKey = "X...O....".parse().unwrap();
        table.values_for(&state)[2] = 0.75;
        table.values_for(&state)[8] = -0.25;

        let stats = TableStats::from_table(&table);
        assert_eq!(stats.states, 1);
        assert_eq!(stats.nonzero_entries, 2);
        assert_eq!(stats.min_value, -0.25);
        assert_eq!(stats.max_value, 0.75);
    }
}
