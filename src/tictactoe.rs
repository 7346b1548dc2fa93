//! Tic-Tac-Toe game implementation

pub mod board;
pub mod game;
pub mod lines;

pub use board::{Board, Cell, GameStatus, Player};
pub use game::{GameEngine, GameOutcome, Move, mark_for_ply};
pub use lines::{DIAGONALS, LineAnalyzer, WINNING_LINES};
