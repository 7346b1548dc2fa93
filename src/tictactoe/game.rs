//! High-level game management

use serde::{Deserialize, Serialize};

use super::board::{Board, GameStatus, Player};
use crate::types::StateKey;

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Terminal projection of a status; `None` while the game is running.
    pub fn from_status(status: GameStatus) -> Option<Self> {
        match status {
            GameStatus::InProgress => None,
            GameStatus::Won(player) => Some(GameOutcome::Win(player)),
            GameStatus::Drawn => Some(GameOutcome::Draw),
        }
    }
}

/// The mark that acts on the given ply when `first` opens the game.
pub fn mark_for_ply(first: Player, ply: usize) -> Player {
    if ply.is_multiple_of(2) {
        first
    } else {
        first.opponent()
    }
}

/// A single game in progress.
///
/// Wraps a [`Board`] with its move history and the winner recorded at the
/// moment the winning move was applied. Once the game is decided further
/// moves are rejected so the result can never change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameEngine {
    board: Board,
    moves: Vec<Move>,
    winner: Option<Player>,
}

impl GameEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the board and return the state of the empty board.
    pub fn reset(&mut self) -> StateKey {
        self.board = Board::new();
        self.moves.clear();
        self.winner = None;
        self.board.state()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> StateKey {
        self.board.state()
    }

    pub fn legal_actions(&self) -> Vec<usize> {
        self.board.legal_actions()
    }

    pub fn is_full(&self) -> bool {
        self.board.is_full()
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Number of moves played so far.
    pub fn ply(&self) -> usize {
        self.moves.len()
    }

    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(player) => GameStatus::Won(player),
            None if self.board.is_full() => GameStatus::Drawn,
            None => GameStatus::InProgress,
        }
    }

    /// Apply a move for `mark`, returning whether it won the game.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] once the game is decided, otherwise
    /// whatever [`Board::apply_move`] rejects.
    pub fn apply_move(&mut self, action: usize, mark: Player) -> Result<bool, crate::Error> {
        if self.status().is_terminal() {
            return Err(crate::Error::GameOver);
        }

        let won = self.board.apply_move(action, mark)?;
        self.moves.push(Move {
            position: action,
            player: mark,
        });
        if won {
            self.winner = Some(mark);
        }
        Ok(won)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_for_ply() {
        assert_eq!(mark_for_ply(Player::X, 0), Player::X);
        assert_eq!(mark_for_ply(Player::X, 1), Player::O);
        assert_eq!(mark_for_ply(Player::X, 8), Player::X);
        assert_eq!(mark_for_ply(Player::O, 0), Player::O);
        assert_eq!(mark_for_ply(Player::O, 3), Player::X);
    }

    #[test]
    fn test_reset_returns_empty_state() {
        let mut engine = GameEngine::new();
        engine.apply_move(0, Player::X).unwrap();
        let state = engine.reset();
        assert_eq!(state.as_str(), ".........");
        assert_eq!(engine.ply(), 0);
        assert_eq!(engine.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_winner_recorded_and_moves_rejected() {
        let mut engine = GameEngine::new();
        for (ply, pos) in [0, 3, 1, 4].into_iter().enumerate() {
            assert!(!engine.apply_move(pos, mark_for_ply(Player::X, ply)).unwrap());
        }
        assert!(engine.apply_move(2, Player::X).unwrap());
        assert_eq!(engine.winner(), Some(Player::X));
        assert_eq!(engine.status(), GameStatus::Won(Player::X));

        let err = engine.apply_move(5, Player::O).unwrap_err();
        assert!(matches!(err, crate::Error::GameOver));
        assert_eq!(engine.ply(), 5);
    }

    #[test]
    fn test_illegal_move_not_recorded() {
        let mut engine = GameEngine::new();
        engine.apply_move(4, Player::X).unwrap();
        assert!(engine.apply_move(4, Player::O).is_err());
        assert_eq!(engine.moves().len(), 1);
    }

    #[test]
    fn test_outcome_from_status() {
        assert_eq!(GameOutcome::from_status(GameStatus::InProgress), None);
        assert_eq!(
            GameOutcome::from_status(GameStatus::Won(Player::O)),
            Some(GameOutcome::Win(Player::O))
        );
        assert_eq!(
            GameOutcome::from_status(GameStatus::Drawn),
            Some(GameOutcome::Draw)
        );
    }
}
