//! Move selector port - anything that can pick a move on a board
//!
//! Implemented by the trained agent (see
//! [`crate::q_learning::AgentPlayer`]) and by baseline opponents used in
//! evaluation.

use crate::{
    Result,
    tictactoe::{Board, Player},
};

/// A participant that chooses moves without learning from them.
///
/// # Examples
///
/// ```
/// use qtictactoe::{ports::MoveSelector, tictactoe::{Board, Player}};
///
/// struct FirstFree;
///
/// impl MoveSelector for FirstFree {
///     fn select_move(&mut self, board: &Board, _mark: Player) -> qtictactoe::Result<usize> {
///         board
///             .legal_actions()
///             .first()
///             .copied()
///             .ok_or(qtictactoe::Error::NoLegalActions)
///     }
///
///     fn name(&self) -> &str {
///         "first-free"
///     }
/// }
///
/// assert_eq!(FirstFree.select_move(&Board::new(), Player::X)?, 0);
/// # Ok::<(), qtictactoe::Error>(())
/// ```
pub trait MoveSelector {
    /// Select a position (0-8) for `mark` on a non-terminal board.
    ///
    /// # Errors
    ///
    /// Returns an error if the board has no legal moves.
    fn select_move(&mut self, board: &Board, mark: Player) -> Result<usize>;

    /// Get the selector's name.
    ///
    /// Used for identification in reports and logging.
    fn name(&self) -> &str;
}
