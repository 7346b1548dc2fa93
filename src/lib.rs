//! Tabular Q-learning agent for Tic-Tac-Toe
//!
//! This crate provides:
//! - A Tic-Tac-Toe engine with win/draw detection
//! - A Q-table keyed by board state, an epsilon-greedy policy and the
//!   one-step Q-learning update
//! - Self-play training, evaluation and an interactive human-vs-agent game
//! - MessagePack/JSON persistence of learned values

pub mod adapters;
pub mod app;
pub mod cli;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod q_learning;
pub mod session;
pub mod tictactoe;
pub mod types;

pub use error::{Error, Result};
pub use q_learning::{QLearningAgent, QTable};
pub use session::{InteractiveSession, SessionOutcome};
pub use tictactoe::{Board, GameEngine, Player};
pub use types::StateKey;
