//! Shared configuration types for CLI commands

use std::path::PathBuf;

use clap::Args;

use crate::{adapters::DEFAULT_TABLE_PATH, app::AgentConfig};

/// Learning hyperparameters accepted by every command that builds an agent.
#[derive(Args, Debug, Clone)]
pub struct HyperparameterArgs {
    /// Learning rate (alpha)
    #[arg(long, default_value_t = 0.3)]
    pub alpha: f64,

    /// Discount factor (gamma)
    #[arg(long, default_value_t = 0.9)]
    pub gamma: f64,

    /// Exploration rate during training
    #[arg(long, default_value_t = 0.2)]
    pub epsilon: f64,

    /// Multiplicative epsilon decay applied after each episode
    #[arg(long, default_value_t = 1.0)]
    pub epsilon_decay: f64,

    /// Lower bound for the decayed epsilon
    #[arg(long, default_value_t = 0.0)]
    pub min_epsilon: f64,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

impl HyperparameterArgs {
    pub fn to_agent_config(&self) -> AgentConfig {
        let config = AgentConfig::new(self.alpha, self.gamma, self.epsilon)
            .with_epsilon_decay(self.epsilon_decay, self.min_epsilon);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

impl Default for HyperparameterArgs {
    fn default() -> Self {
        let defaults = AgentConfig::default();
        Self {
            alpha: defaults.learning_rate,
            gamma: defaults.discount_factor,
            epsilon: defaults.epsilon,
            epsilon_decay: defaults.epsilon_decay,
            min_epsilon: defaults.min_epsilon,
            seed: None,
        }
    }
}

/// Location of the Q-table snapshot.
#[derive(Args, Debug, Clone)]
pub struct TableArgs {
    /// Q-table file (`.json` for JSON, anything else MessagePack)
    #[arg(long, short = 't', default_value = DEFAULT_TABLE_PATH)]
    pub table: PathBuf,
}

impl Default for TableArgs {
    fn default() -> Self {
        Self {
            table: PathBuf::from(DEFAULT_TABLE_PATH),
        }
    }
}
