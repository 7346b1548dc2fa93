//! Tabular Q-learning
//!
//! The pieces of the learning core, leaves first:
//!
//! - [`QTable`]: lazily initialised map from board state to per-action
//!   estimates
//! - [`policy`]: ε-greedy selection with uniform tie-breaking
//! - [`QLearner`]: the off-policy TD update
//!   `Q(s,a) ← Q(s,a) + α[r + γ max_a' Q(s',a') - Q(s,a)]`
//! - [`QLearningAgent`]: all of the above plus a random source
//!
//! ## Usage Example
//!
//! ```
//! use qtictactoe::app::AgentConfig;
//! use qtictactoe::q_learning::QLearningAgent;
//! use qtictactoe::tictactoe::Board;
//!
//! let config = AgentConfig::default().with_seed(42);
//! let mut agent = QLearningAgent::new(&config);
//!
//! let board = Board::new();
//! let action = agent.select_action(&board.state(), &board.legal_actions())?;
//! assert!(action < 9);
//! # Ok::<(), qtictactoe::Error>(())
//! ```

pub mod agent;
pub mod learner;
pub mod policy;
pub mod q_table;
pub mod serialization;

// Public re-exports
pub use agent::{AgentPlayer, QLearningAgent};
pub use learner::{QLearner, Transition};
pub use policy::{EpsilonGreedy, greedy_actions, select_action};
pub use q_table::{ActionValues, QTable};
