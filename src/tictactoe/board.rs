//! Board representation and the basic rules of play

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;
use crate::types::StateKey;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    /// Glyph used in state keys.
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    /// Glyph used when rendering the board for a human.
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => ' ',
            other => other.to_char(),
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A mark placed by one of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl FromStr for Player {
    type Err = crate::Error;

    /// Parse `X` or `O`, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "X" => Ok(Player::X),
            "O" => Ok(Player::O),
            _ => Err(crate::Error::InvalidMark {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// Status of a board derived from its cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Drawn,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// The nine cells of a Tic-Tac-Toe board.
///
/// `Board` only knows the rules; it carries no turn or learning state. The
/// caller decides which mark moves and must stop once the game is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Board { cells }
    }

    /// Create a board from nine glyphs.
    ///
    /// `.` or a space is an empty cell, `X`/`x` and `O`/`o` are marks.
    /// Newlines, tabs and `|` separators are ignored.
    ///
    /// # Errors
    ///
    /// Returns error unless exactly 9 cells are given, or if a glyph is invalid.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !matches!(c, '\n' | '\r' | '\t' | '|'))
            .collect();
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// All positions whose cell is empty, in ascending order.
    pub fn legal_actions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// True iff no cell is empty.
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Place `mark` on `action` and report whether it completed a line.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPosition`] for indices outside 0-8 and
    /// [`crate::Error::IllegalMove`] when the cell is occupied. The board is
    /// unchanged on error.
    pub fn apply_move(&mut self, action: usize, mark: Player) -> Result<bool, crate::Error> {
        if action >= 9 {
            return Err(crate::Error::InvalidPosition { position: action });
        }
        if !self.is_empty(action) {
            return Err(crate::Error::IllegalMove { position: action });
        }

        self.cells[action] = mark.to_cell();
        Ok(self.is_winning_move(action, mark))
    }

    /// Whether the lines through `action` are all `mark`.
    pub fn is_winning_move(&self, action: usize, mark: Player) -> bool {
        action < 9 && LineAnalyzer::completes_line(&self.cells, action, mark)
    }

    /// Check if a player owns any complete line
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// The player owning a complete line, if any.
    pub fn winner(&self) -> Option<Player> {
        [Player::X, Player::O]
            .into_iter()
            .find(|&player| self.has_won(player))
    }

    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(player) => GameStatus::Won(player),
            None if self.is_full() => GameStatus::Drawn,
            None => GameStatus::InProgress,
        }
    }

    /// Canonical lookup key for this board.
    pub fn state(&self) -> StateKey {
        StateKey::from_board(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(3).enumerate() {
            write!(
                f,
                "| {} | {} | {} |",
                row[0].glyph(),
                row[1].glyph(),
                row[2].glyph()
            )?;
            if i < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
