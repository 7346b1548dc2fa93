//! Head-to-head evaluation of a trained agent

use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    ports::MoveSelector,
    q_learning::QLearningAgent,
    tictactoe::{Board, GameEngine, GameOutcome, Player, mark_for_ply},
};

/// Opponent that picks uniformly among the empty cells.
pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Create a random player with a deterministic seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSelector for RandomPlayer {
    fn select_move(&mut self, board: &Board, _mark: Player) -> Result<usize> {
        let moves = board.legal_actions();
        if moves.is_empty() {
            return Err(Error::NoLegalActions);
        }
        let index = self.rng.random_range(0..moves.len());
        Ok(moves[index])
    }

    fn name(&self) -> &str {
        "Random"
    }
}

/// Outcome counts from the evaluated agent's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub games: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
}

impl EvaluationResult {
    fn rate(&self, count: usize) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            count as f64 / self.games as f64
        }
    }

    pub fn win_rate(&self) -> f64 {
        self.rate(self.wins)
    }

    pub fn draw_rate(&self) -> f64 {
        self.rate(self.draws)
    }

    pub fn loss_rate(&self) -> f64 {
        self.rate(self.losses)
    }
}

/// Plays a fixed number of games between two move selectors.
///
/// X always opens. The evaluated side takes X in even-numbered games and O
/// in odd-numbered ones, so each side opens half of the games.
pub struct Evaluation;

impl Evaluation {
    /// Evaluate a Q-learning agent greedily (epsilon 0, no table updates).
    pub fn run(
        agent: &mut QLearningAgent,
        opponent: &mut dyn MoveSelector,
        games: usize,
    ) -> Result<EvaluationResult> {
        let mut player = agent.player(0.0);
        Self::run_selectors(&mut player, opponent, games)
    }

    /// Evaluate any move selector against another.
    pub fn run_selectors(
        subject: &mut dyn MoveSelector,
        opponent: &mut dyn MoveSelector,
        games: usize,
    ) -> Result<EvaluationResult> {
        log::info!(
            "evaluating {} against {} over {games} games",
            subject.name(),
            opponent.name()
        );

        let mut engine = GameEngine::new();
        let mut result = EvaluationResult {
            games,
            wins: 0,
            draws: 0,
            losses: 0,
        };

        for game in 0..games {
            let subject_mark = if game.is_multiple_of(2) {
                Player::X
            } else {
                Player::O
            };
            match play_game(&mut engine, subject, opponent, subject_mark)? {
                GameOutcome::Win(winner) if winner == subject_mark => result.wins += 1,
                GameOutcome::Win(_) => result.losses += 1,
                GameOutcome::Draw => result.draws += 1,
            }
        }

        log::info!(
            "evaluation finished: {} wins, {} draws, {} losses",
            result.wins,
            result.draws,
            result.losses
        );
        Ok(result)
    }
}

fn play_game(
    engine: &mut GameEngine,
    subject: &mut dyn MoveSelector,
    opponent: &mut dyn MoveSelector,
    subject_mark: Player,
) -> Result<GameOutcome> {
    engine.reset();
    loop {
        let mark = mark_for_ply(Player::X, engine.ply());
        let selector: &mut dyn MoveSelector = if mark == subject_mark {
            &mut *subject
        } else {
            &mut *opponent
        };
        let position = selector.select_move(engine.board(), mark)?;
        engine.apply_move(position, mark)?;

        if let Some(outcome) = GameOutcome::from_status(engine.status()) {
            return Ok(outcome);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AgentConfig;

    #[test]
    fn test_random_player_picks_empty_cell() {
        let board = Board::from_string("XOXOX.O..").unwrap();
        let mut player = RandomPlayer::with_seed(7);
        for _ in 0..20 {
            let position = player.select_move(&board, Player::X).unwrap();
            assert!(board.legal_actions().contains(&position));
        }
    }

    #[test]
    fn test_random_player_full_board() {
        let board = Board::from_string("XOXXOOOXX").unwrap();
        let mut player = RandomPlayer::with_seed(7);
        assert!(matches!(
            player.select_move(&board, Player::O),
            Err(Error::NoLegalActions)
        ));
    }

    #[test]
    fn test_counts_add_up() {
        let mut agent = QLearningAgent::new(&AgentConfig::default().with_seed(11));
        let mut opponent = RandomPlayer::with_seed(12);
        let result = Evaluation::run(&mut agent, &mut opponent, 50).unwrap();

        assert_eq!(result.games, 50);
        assert_eq!(result.wins + result.draws + result.losses, 50);
        let rates = result.win_rate() + result.draw_rate() + result.loss_rate();
        assert!((rates - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_evaluation_does_not_learn() {
        let mut agent = QLearningAgent::new(&AgentConfig::default().with_seed(3));
        let mut opponent = RandomPlayer::with_seed(4);
        Evaluation::run(&mut agent, &mut opponent, 20).unwrap();
        assert!(agent.table().iter().all(|(_, values)| values == &[0.0; 9]));
    }

    #[test]
    fn test_zero_games() {
        let mut a = RandomPlayer::with_seed(1);
        let mut b = RandomPlayer::with_seed(2);
        let result = Evaluation::run_selectors(&mut a, &mut b, 0).unwrap();
        assert_eq!(result.win_rate(), 0.0);
    }
}
