//! Observer port - abstraction for training observation and data collection
//!
//! This port defines the interface for observing training events,
//! allowing composable data collection without coupling the training
//! loop to specific output formats or metrics.

use crate::{Result, tictactoe::GameOutcome};

/// Observer trait for monitoring training
///
/// # Event Sequence
///
/// 1. `on_training_start(total_episodes)` - Once at the beginning
/// 2. `on_episode_end(episode, outcome, plies)` - After every episode
/// 3. `on_training_end()` - Once at the end
///
/// # Examples
///
/// ```
/// use qtictactoe::{ports::Observer, tictactoe::GameOutcome};
///
/// struct CountingObserver {
///     episodes: usize,
/// }
///
/// impl Observer for CountingObserver {
///     fn on_episode_end(
///         &mut self,
///         _episode: usize,
///         _outcome: GameOutcome,
///         _plies: usize,
///     ) -> qtictactoe::Result<()> {
///         self.episodes += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait Observer: Send {
    /// Called when training starts.
    ///
    /// # Default Implementation
    ///
    /// Does nothing. Override to initialize observation state.
    fn on_training_start(&mut self, _total_episodes: usize) -> Result<()> {
        Ok(())
    }

    /// Called when an episode reaches a terminal state.
    ///
    /// # Parameters
    ///
    /// * `episode` - Number of episodes completed so far (1-based)
    /// * `outcome` - Final outcome
    /// * `plies` - Number of moves played in the episode
    fn on_episode_end(
        &mut self,
        _episode: usize,
        _outcome: GameOutcome,
        _plies: usize,
    ) -> Result<()> {
        Ok(())
    }

    /// Called when training completes.
    ///
    /// Use this to finalize outputs or display summaries.
    fn on_training_end(&mut self) -> Result<()> {
        Ok(())
    }
}
