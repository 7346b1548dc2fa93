//! Temporal-difference update for the Q-table

use serde::{Deserialize, Serialize};

use crate::{q_learning::q_table::QTable, types::StateKey};

/// One observed move: where the mover stood, what it did and what followed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub state: StateKey,
    pub action: usize,
    pub reward: f64,
    pub next_state: StateKey,
    pub terminal: bool,
    /// Legal actions available in `next_state`
    pub next_legal_actions: Vec<usize>,
}

/// Q-learning update rule with a fixed step size and discount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QLearner {
    /// Learning rate α: step size toward the target
    learning_rate: f64,
    /// Discount factor γ: weight on future reward
    discount_factor: f64,
}

impl QLearner {
    pub fn new(learning_rate: f64, discount_factor: f64) -> Self {
        Self {
            learning_rate,
            discount_factor,
        }
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn discount_factor(&self) -> f64 {
        self.discount_factor
    }

    /// TD target for a transition.
    ///
    /// The reward alone when the episode ended or nothing is playable next,
    /// otherwise the reward plus the discounted best next-state estimate.
    pub fn target(&self, table: &mut QTable, transition: &Transition) -> f64 {
        if transition.terminal || transition.next_legal_actions.is_empty() {
            transition.reward
        } else {
            let max_next = table.max_value(&transition.next_state, &transition.next_legal_actions);
            transition.reward + self.discount_factor * max_next
        }
    }

    /// Q(s,a) ← Q(s,a) + α[target - Q(s,a)]
    ///
    /// Returns the updated estimate.
    pub fn update(&self, table: &mut QTable, transition: &Transition) -> f64 {
        let target = self.target(table, transition);
        let estimate = &mut table.values_for(&transition.state)[transition.action];
        *estimate += self.learning_rate * (target - *estimate);
        *estimate
    }
}

impl Default for QLearner {
    fn default() -> Self {
        Self::new(0.3, 0.9)
    }
}
