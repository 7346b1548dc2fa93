//! Observer implementations for the training loop

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Result,
    ports::Observer,
    tictactoe::{GameOutcome, Player},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct OutcomeTally {
    x_wins: usize,
    o_wins: usize,
    draws: usize,
}

impl OutcomeTally {
    fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win(Player::X) => self.x_wins += 1,
            GameOutcome::Win(Player::O) => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }

    fn summary(&self) -> String {
        format!("X:{} O:{} D:{}", self.x_wins, self.o_wins, self.draws)
    }
}

/// Progress bar observer - Shows training progress
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    tally: OutcomeTally,
}

impl ProgressObserver {
    /// Create a new progress observer
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            tally: OutcomeTally::default(),
        }
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_training_start(&mut self, total_episodes: usize) -> Result<()> {
        let pb = ProgressBar::new(total_episodes as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} episodes ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_episode_end(
        &mut self,
        episode: usize,
        outcome: GameOutcome,
        _plies: usize,
    ) -> Result<()> {
        self.tally.record(outcome);

        if let Some(pb) = &self.progress_bar {
            pb.set_position(episode as u64);
            // redrawing the message every episode dominates short runs
            if episode.is_multiple_of(100) {
                pb.set_message(self.tally.summary());
            }
        }
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.tally.summary());
        }
        Ok(())
    }
}

/// Milestone observer - Logs outcome counts at a fixed episode interval
pub struct MilestoneObserver {
    interval: usize,
    tally: OutcomeTally,
    window: OutcomeTally,
    plies: usize,
}

impl MilestoneObserver {
    /// Log every `interval` episodes (an interval of 0 is treated as 1).
    pub fn new(interval: usize) -> Self {
        Self {
            interval: interval.max(1),
            tally: OutcomeTally::default(),
            window: OutcomeTally::default(),
            plies: 0,
        }
    }
}

impl Observer for MilestoneObserver {
    fn on_episode_end(
        &mut self,
        episode: usize,
        outcome: GameOutcome,
        plies: usize,
    ) -> Result<()> {
        self.tally.record(outcome);
        self.window.record(outcome);
        self.plies += plies;

        if episode.is_multiple_of(self.interval) {
            log::info!(
                "episode {episode}: last {} -> {} (avg {:.2} plies), total {}",
                self.interval,
                self.window.summary(),
                self.plies as f64 / self.interval as f64,
                self.tally.summary()
            );
            self.window = OutcomeTally::default();
            self.plies = 0;
        }
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        log::info!("final outcome counts {}", self.tally.summary());
        Ok(())
    }
}
