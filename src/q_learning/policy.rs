//! Epsilon-greedy action selection

use rand::{Rng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    q_learning::q_table::{ActionValues, QTable},
    types::StateKey,
};

/// Legal actions whose estimate equals the maximum over `legal_actions`.
///
/// Ties are detected with exact floating-point equality; fresh states are
/// all zero, so every legal action ties until learning separates them.
pub fn greedy_actions(values: &ActionValues, legal_actions: &[usize]) -> Vec<usize> {
    let best = legal_actions
        .iter()
        .map(|&action| values[action])
        .fold(f64::NEG_INFINITY, f64::max);
    legal_actions
        .iter()
        .copied()
        .filter(|&action| values[action] == best)
        .collect()
}

/// ε-greedy action selection
///
/// With probability `epsilon` a uniformly random legal action is returned.
/// Otherwise one of the maximizing legal actions is drawn uniformly, so ties
/// never favour the lowest index.
///
/// # Errors
///
/// Returns [`Error::NoLegalActions`] when `legal_actions` is empty.
pub fn select_action<R: Rng + ?Sized>(
    table: &mut QTable,
    state: &StateKey,
    legal_actions: &[usize],
    epsilon: f64,
    rng: &mut R,
) -> Result<usize> {
    if legal_actions.is_empty() {
        return Err(Error::NoLegalActions);
    }

    if rng.random::<f64>() < epsilon {
        return legal_actions
            .choose(rng)
            .copied()
            .ok_or(Error::NoLegalActions);
    }

    let best = greedy_actions(table.values_for(state), legal_actions);
    best.choose(rng).copied().ok_or(Error::NoLegalActions)
}

/// Exploration rate together with its per-episode decay schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpsilonGreedy {
    epsilon: f64,
    epsilon_decay: f64,
    min_epsilon: f64,
}

impl EpsilonGreedy {
    /// Constant exploration rate.
    pub fn new(epsilon: f64) -> Self {
        Self::with_decay(epsilon, 1.0, 0.0)
    }

    /// Exploration that shrinks multiplicatively after every episode and
    /// never drops below `min_epsilon`.
    pub fn with_decay(epsilon: f64, epsilon_decay: f64, min_epsilon: f64) -> Self {
        Self {
            epsilon,
            epsilon_decay,
            min_epsilon,
        }
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Decay epsilon after episode
    pub fn decay(&mut self) {
        self.epsilon = (self.epsilon * self.epsilon_decay).max(self.min_epsilon);
    }

    pub fn select_action<R: Rng + ?Sized>(
        &self,
        table: &mut QTable,
        state: &StateKey,
        legal_actions: &[usize],
        rng: &mut R,
    ) -> Result<usize> {
        select_action(table, state, legal_actions, self.epsilon, rng)
    }
}

impl Default for EpsilonGreedy {
    fn default() -> Self {
        Self::new(0.2)
    }
}
