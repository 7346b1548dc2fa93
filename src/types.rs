//! Newtype wrappers for improved type safety and domain modeling.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::tictactoe::{Board, Cell};

/// Canonical encoding of a board used as the value-table key.
///
/// Nine glyphs in row-major order: `.` for an empty cell, `X` and `O` for
/// marks. Two boards share a key exactly when their cells are identical.
///
/// Decoding goes through [`StateKey::parse`], so a snapshot holding a
/// malformed key fails to load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StateKey(String);

impl StateKey {
    /// Encode a board.
    pub fn from_board(board: &Board) -> Self {
        StateKey(board.cells().iter().map(|cell| cell.to_char()).collect())
    }

    /// Parse a key, validating that it describes exactly nine cells.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidBoardLength`] or
    /// [`crate::Error::InvalidCellCharacter`] for malformed input.
    pub fn parse(s: &str) -> Result<Self, crate::Error> {
        let board = Board::from_string(s)?;
        Ok(Self::from_board(&board))
    }

    /// Decode the key back into a board.
    ///
    /// Keys are only constructed from boards or validated strings, so every
    /// glyph is known to be valid.
    pub fn to_board(&self) -> Board {
        let mut cells = [Cell::Empty; 9];
        for (cell, c) in cells.iter_mut().zip(self.0.chars()) {
            *cell = Cell::from_char(c).unwrap_or(Cell::Empty);
        }
        Board::from_cells(cells)
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&Board> for StateKey {
    fn from(board: &Board) -> Self {
        StateKey::from_board(board)
    }
}

impl TryFrom<String> for StateKey {
    type Error = crate::Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        StateKey::parse(&s)
    }
}

impl From<StateKey> for String {
    fn from(key: StateKey) -> Self {
        key.0
    }
}

impl FromStr for StateKey {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StateKey::parse(s)
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
