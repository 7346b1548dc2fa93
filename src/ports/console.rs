//! Console port - the human side of an interactive game.

use crate::{
    Result,
    tictactoe::{Board, Player},
};

/// Text interaction with a human player.
///
/// Implementations own all input validation: the prompts only return once
/// they have a well-formed answer, re-asking on anything else.
pub trait Console {
    /// Ask which mark the human wants to play.
    ///
    /// # Errors
    ///
    /// Returns an error only when input is exhausted or unreadable.
    fn prompt_side(&mut self) -> Result<Player>;

    /// Ask for a move; the result is an empty cell of `board`.
    ///
    /// # Errors
    ///
    /// Returns an error only when input is exhausted or unreadable.
    fn prompt_move(&mut self, board: &Board) -> Result<usize>;

    /// Render the board.
    fn show_board(&mut self, board: &Board) -> Result<()>;

    /// Print a line of text.
    fn show_message(&mut self, message: &str) -> Result<()>;
}
