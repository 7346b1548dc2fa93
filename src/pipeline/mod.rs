//! Training and evaluation pipeline
//!
//! This module provides:
//! - Self-play training of a Q-learning agent
//! - Evaluation of a trained agent against other move selectors
//! - Observers that report on training progress

pub mod evaluation;
pub mod observers;
pub mod training;

pub use evaluation::{Evaluation, EvaluationResult, RandomPlayer};
pub use observers::{MilestoneObserver, ProgressObserver};
pub use training::{
    DRAW_REWARD, LOSS_REWARD, TrainingConfig, TrainingLoop, TrainingResult, WIN_REWARD,
    reward_for, step,
};

pub use crate::ports::{MoveSelector, Observer};
