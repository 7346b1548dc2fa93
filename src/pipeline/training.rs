//! Self-play training loop

use std::{path::PathBuf, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    ports::{Observer, TableRepository},
    q_learning::{QLearningAgent, Transition},
    tictactoe::{GameEngine, GameOutcome, GameStatus, Player, mark_for_ply},
    types::StateKey,
};

/// Reward for the mover whose move won the game
pub const WIN_REWARD: f64 = 1.0;
/// Reward for the mover when the other mark holds the winning line
pub const LOSS_REWARD: f64 = -1.0;
/// Reward for the mover whose move filled the board without a winner
pub const DRAW_REWARD: f64 = 0.5;

/// Reward attributed to `mover` for the move that produced `status`.
pub fn reward_for(status: GameStatus, mover: Player) -> f64 {
    match status {
        GameStatus::Won(winner) if winner == mover => WIN_REWARD,
        GameStatus::Won(_) => LOSS_REWARD,
        GameStatus::Drawn => DRAW_REWARD,
        GameStatus::InProgress => 0.0,
    }
}

/// Training configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Number of self-play episodes
    pub episodes: usize,

    /// Which mark opens every episode
    pub first_player: Player,
}

impl TrainingConfig {
    pub fn new(episodes: usize) -> Self {
        Self {
            episodes,
            ..Self::default()
        }
    }
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            episodes: 50_000,
            first_player: Player::X,
        }
    }
}

/// Result of a training run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingResult {
    /// Total episodes played
    pub episodes: usize,

    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,

    pub x_win_rate: f64,
    pub o_win_rate: f64,
    pub draw_rate: f64,

    /// Number of states in the table after training
    pub states: usize,

    /// Exploration rate after the last episode
    pub final_epsilon: f64,
}

impl TrainingResult {
    pub fn new(
        episodes: usize,
        x_wins: usize,
        o_wins: usize,
        draws: usize,
        states: usize,
        final_epsilon: f64,
    ) -> Self {
        let rate = |count: usize| {
            if episodes > 0 {
                count as f64 / episodes as f64
            } else {
                0.0
            }
        };

        Self {
            episodes,
            x_wins,
            o_wins,
            draws,
            x_win_rate: rate(x_wins),
            o_win_rate: rate(o_wins),
            draw_rate: rate(draws),
            states,
            final_epsilon,
        }
    }
}

/// Drives self-play episodes and feeds every move to the learner.
///
/// Both marks are played by the same agent against the same table; each
/// transition is credited to the mark that just moved.
pub struct TrainingLoop {
    config: TrainingConfig,
    observers: Vec<Box<dyn Observer>>,
    snapshot: Option<(Arc<dyn TableRepository + Send + Sync>, PathBuf)>,
}

impl TrainingLoop {
    pub fn new(config: TrainingConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
            snapshot: None,
        }
    }

    /// Add an observer to the loop
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Persist the table to `path` once every episode has finished.
    pub fn with_snapshot(
        mut self,
        repository: Arc<dyn TableRepository + Send + Sync>,
        path: impl Into<PathBuf>,
    ) -> Self {
        self.snapshot = Some((repository, path.into()));
        self
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Run every configured episode, then save the snapshot if one is set.
    ///
    /// Nothing is written if an episode fails part way through.
    pub fn run(&mut self, agent: &mut QLearningAgent) -> Result<TrainingResult> {
        let total = self.config.episodes;
        log::info!(
            "training for {total} episodes (epsilon {:.3}, first mark {})",
            agent.epsilon(),
            self.config.first_player
        );

        for observer in &mut self.observers {
            observer.on_training_start(total)?;
        }

        let mut engine = GameEngine::new();
        let (mut x_wins, mut o_wins, mut draws) = (0, 0, 0);

        for episode in 1..=total {
            let outcome = self.run_episode(&mut engine, agent)?;
            agent.end_episode();

            match outcome {
                GameOutcome::Win(Player::X) => x_wins += 1,
                GameOutcome::Win(Player::O) => o_wins += 1,
                GameOutcome::Draw => draws += 1,
            }
            log::trace!("episode {episode}: {outcome:?} in {} plies", engine.ply());

            for observer in &mut self.observers {
                observer.on_episode_end(episode, outcome, engine.ply())?;
            }
        }

        for observer in &mut self.observers {
            observer.on_training_end()?;
        }

        let result = TrainingResult::new(
            total,
            x_wins,
            o_wins,
            draws,
            agent.table().len(),
            agent.epsilon(),
        );

        match &self.snapshot {
            Some((repository, path)) => {
                repository.save(agent.table(), path)?;
                log::info!(
                    "training completed and Q-table saved to {} ({} states)",
                    path.display(),
                    result.states
                );
            }
            None => log::info!("training completed ({} states)", result.states),
        }

        Ok(result)
    }

    /// Play one episode from an empty board to a terminal state, learning
    /// from every move.
    pub fn run_episode(
        &self,
        engine: &mut GameEngine,
        agent: &mut QLearningAgent,
    ) -> Result<GameOutcome> {
        let mut state = engine.reset();
        loop {
            let mark = mark_for_ply(self.config.first_player, engine.ply());
            let transition = step(engine, agent, &state, mark)?;
            agent.learn(&transition);

            if let Some(outcome) = GameOutcome::from_status(engine.status()) {
                return Ok(outcome);
            }
            state = transition.next_state;
        }
    }
}

/// Let `mark` move once and describe what happened.
pub fn step(
    engine: &mut GameEngine,
    agent: &mut QLearningAgent,
    state: &StateKey,
    mark: Player,
) -> Result<Transition> {
    let legal = engine.legal_actions();
    let action = agent.select_action(state, &legal)?;
    let won = engine.apply_move(action, mark)?;
    let status = engine.status();

    Ok(Transition {
        state: state.clone(),
        action,
        reward: reward_for(status, mark),
        next_state: engine.state(),
        terminal: won || engine.is_full(),
        next_legal_actions: engine.legal_actions(),
    })
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::{adapters::InMemoryRepository, app::AgentConfig};

    fn agent(seed: u64) -> QLearningAgent {
        QLearningAgent::new(&AgentConfig::default().with_seed(seed))
    }

    #[test]
    fn test_reward_for() {
        assert_eq!(reward_for(GameStatus::Won(Player::X), Player::X), 1.0);
        assert_eq!(reward_for(GameStatus::Won(Player::X), Player::O), -1.0);
        assert_eq!(reward_for(GameStatus::Drawn, Player::O), 0.5);
        assert_eq!(reward_for(GameStatus::InProgress, Player::X), 0.0);
    }

    #[test]
    fn test_step_produces_transition() {
        let mut engine = GameEngine::new();
        let mut agent = agent(1);
        let state = engine.reset();

        let transition = step(&mut engine, &mut agent, &state, Player::X).unwrap();
        assert_eq!(transition.state, state);
        assert_eq!(transition.reward, 0.0);
        assert!(!transition.terminal);
        assert_eq!(transition.next_legal_actions.len(), 8);
        assert!(!transition.next_legal_actions.contains(&transition.action));
        assert_eq!(transition.next_state, engine.state());
    }

    #[test]
    fn test_episode_reaches_terminal() {
        let training = TrainingLoop::new(TrainingConfig::new(1));
        let mut engine = GameEngine::new();
        let mut agent = agent(2);

        let outcome = training.run_episode(&mut engine, &mut agent).unwrap();
        assert!(engine.status().is_terminal());
        assert!((5..=9).contains(&engine.ply()));
        assert_eq!(GameOutcome::from_status(engine.status()), Some(outcome));
        assert!(!agent.table().is_empty());
    }

    #[test]
    fn test_run_counts_every_episode() {
        let mut training = TrainingLoop::new(TrainingConfig::new(200));
        let mut agent = agent(3);
        let result = training.run(&mut agent).unwrap();

        assert_eq!(result.episodes, 200);
        assert_eq!(result.x_wins + result.o_wins + result.draws, 200);
        assert_eq!(result.states, agent.table().len());
        let rates = result.x_win_rate + result.o_win_rate + result.draw_rate;
        assert!((rates - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_run_saves_snapshot() {
        let repo = InMemoryRepository::new();
        let mut training = TrainingLoop::new(TrainingConfig::new(10))
            .with_snapshot(Arc::new(repo.clone()), "qtable.msgpack");
        let mut agent = agent(4);
        training.run(&mut agent).unwrap();

        let saved = repo.load(Path::new("qtable.msgpack")).unwrap();
        assert_eq!(&saved, agent.table());
    }

    #[test]
    fn test_zero_episodes() {
        let mut training = TrainingLoop::new(TrainingConfig::new(0));
        let mut agent = agent(5);
        let result = training.run(&mut agent).unwrap();
        assert_eq!(result.episodes, 0);
        assert_eq!(result.draw_rate, 0.0);
        assert!(agent.table().is_empty());
    }
}
