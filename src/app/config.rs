//! Configuration types for agent creation.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Hyperparameters for a Q-learning agent.
///
/// # Examples
///
/// ```
/// use qtictactoe::app::AgentConfig;
///
/// let config = AgentConfig::default()
///     .with_learning_rate(0.5)
///     .with_epsilon_decay(0.9995, 0.01)
///     .with_seed(42);
/// config.validate()?;
/// # Ok::<(), qtictactoe::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Learning rate α
    pub learning_rate: f64,
    /// Discount factor γ
    pub discount_factor: f64,
    /// Initial exploration rate
    pub epsilon: f64,
    /// Multiplicative decay applied to epsilon after each episode
    pub epsilon_decay: f64,
    /// Floor for the decayed exploration rate
    pub min_epsilon: f64,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl AgentConfig {
    /// Create a configuration with explicit α, γ and ε and no decay.
    pub fn new(learning_rate: f64, discount_factor: f64, epsilon: f64) -> Self {
        Self {
            learning_rate,
            discount_factor,
            epsilon,
            epsilon_decay: 1.0,
            min_epsilon: 0.0,
            seed: None,
        }
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_discount_factor(mut self, discount_factor: f64) -> Self {
        self.discount_factor = discount_factor;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Decay epsilon by `decay` after every episode, never below `min_epsilon`.
    pub fn with_epsilon_decay(mut self, decay: f64, min_epsilon: f64) -> Self {
        self.epsilon_decay = decay;
        self.min_epsilon = min_epsilon;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check every parameter is within its meaningful range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] naming the first offending
    /// parameter.
    pub fn validate(&self) -> Result<()> {
        let unit_interval = [
            ("learning rate", self.learning_rate),
            ("discount factor", self.discount_factor),
            ("epsilon", self.epsilon),
            ("minimum epsilon", self.min_epsilon),
        ];
        for (name, value) in unit_interval {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidConfiguration {
                    message: format!("{name} must be within [0, 1], got {value}"),
                });
            }
        }

        if !(self.epsilon_decay > 0.0 && self.epsilon_decay <= 1.0) {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "epsilon decay must be within (0, 1], got {}",
                    self.epsilon_decay
                ),
            });
        }

        if self.min_epsilon > self.epsilon {
            log::warn!(
                "minimum epsilon {} exceeds epsilon {}; exploration will rise to the floor",
                self.min_epsilon,
                self.epsilon
            );
        }

        Ok(())
    }
}

impl Default for AgentConfig {
    /// α = 0.3, γ = 0.9, ε = 0.2, no decay.
    fn default() -> Self {
        Self::new(0.3, 0.9, 0.2)
    }
}
