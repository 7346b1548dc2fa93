//! Q-learning agent
//!
//! Bundles the Q-table with the ε-greedy policy, the TD update rule and the
//! agent's own random source. The table is owned here and lent to training,
//! evaluation and interactive play in turn.

use rand::{SeedableRng, rngs::StdRng};

use crate::{
    Result,
    app::AgentConfig,
    ports::MoveSelector,
    q_learning::{
        learner::{QLearner, Transition},
        policy::{EpsilonGreedy, select_action},
        q_table::QTable,
    },
    tictactoe::{Board, Player},
    types::StateKey,
};

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Q-learning agent (off-policy TD control)
#[derive(Debug, Clone)]
pub struct QLearningAgent {
    q_table: QTable,
    policy: EpsilonGreedy,
    learner: QLearner,
    rng: StdRng,
    rng_seed: Option<u64>,
}

impl QLearningAgent {
    /// Create an agent with an empty table.
    ///
    /// The configuration is expected to be validated by the caller; see
    /// [`AgentConfig::validate`].
    pub fn new(config: &AgentConfig) -> Self {
        Self {
            q_table: QTable::new(),
            policy: EpsilonGreedy::with_decay(
                config.epsilon,
                config.epsilon_decay,
                config.min_epsilon,
            ),
            learner: QLearner::new(config.learning_rate, config.discount_factor),
            rng: build_rng(config.seed),
            rng_seed: config.seed,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self.rng_seed = Some(seed);
        self
    }

    /// Start from previously learned values.
    pub fn with_table(mut self, table: QTable) -> Self {
        self.q_table = table;
        self
    }

    pub fn table(&self) -> &QTable {
        &self.q_table
    }

    pub fn table_mut(&mut self) -> &mut QTable {
        &mut self.q_table
    }

    pub fn into_table(self) -> QTable {
        self.q_table
    }

    pub fn learner(&self) -> &QLearner {
        &self.learner
    }

    /// Current exploration rate
    pub fn epsilon(&self) -> f64 {
        self.policy.epsilon()
    }

    pub fn seed(&self) -> Option<u64> {
        self.rng_seed
    }

    /// ε-greedy choice using the current exploration rate.
    pub fn select_action(&mut self, state: &StateKey, legal_actions: &[usize]) -> Result<usize> {
        self.policy
            .select_action(&mut self.q_table, state, legal_actions, &mut self.rng)
    }

    /// ε-greedy choice with an explicit exploration rate, leaving the
    /// training schedule untouched.
    pub fn select_action_with(
        &mut self,
        state: &StateKey,
        legal_actions: &[usize],
        epsilon: f64,
    ) -> Result<usize> {
        select_action(&mut self.q_table, state, legal_actions, epsilon, &mut self.rng)
    }

    /// Apply the TD update for one transition and return the new estimate.
    pub fn learn(&mut self, transition: &Transition) -> f64 {
        self.learner.update(&mut self.q_table, transition)
    }

    /// Called once per finished episode.
    pub fn end_episode(&mut self) {
        self.policy.decay();
    }

    /// View of this agent that plays with a fixed exploration rate.
    pub fn player(&mut self, epsilon: f64) -> AgentPlayer<'_> {
        AgentPlayer {
            agent: self,
            epsilon,
        }
    }
}

/// Borrowed agent acting as a [`MoveSelector`] with a fixed ε.
pub struct AgentPlayer<'a> {
    agent: &'a mut QLearningAgent,
    epsilon: f64,
}

impl MoveSelector for AgentPlayer<'_> {
    fn select_move(&mut self, board: &Board, _mark: Player) -> Result<usize> {
        let legal = board.legal_actions();
        self.agent
            .select_action_with(&board.state(), &legal, self.epsilon)
    }

    fn name(&self) -> &str {
        "Q-Learning"
    }
}
