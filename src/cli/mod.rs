//! CLI infrastructure for the Q-learning Tic-Tac-Toe agent
//!
//! This module provides the command-line interface for training, playing
//! against, evaluating and inspecting a tabular Q-learning agent.

pub mod commands;
pub mod config;
pub mod output;
