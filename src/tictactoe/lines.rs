//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// The two diagonals; every cell on them has an even index.
pub const DIAGONALS: [[usize; 3]; 2] = [[0, 4, 8], [2, 4, 6]];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player has won by having three in a row anywhere
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        WINNING_LINES
            .iter()
            .any(|line| Self::line_owned_by(cells, line, player))
    }

    /// Check whether the mark at `position` completes a line for `player`.
    ///
    /// Only lines through `position` can have just become winning: its row,
    /// its column and, when the index is even, both diagonals.
    pub fn completes_line(cells: &[Cell; 9], position: usize, player: Player) -> bool {
        let row_start = (position / 3) * 3;
        let row = [row_start, row_start + 1, row_start + 2];
        if Self::line_owned_by(cells, &row, player) {
            return true;
        }

        let col = position % 3;
        let column = [col, col + 3, col + 6];
        if Self::line_owned_by(cells, &column, player) {
            return true;
        }

        position.is_multiple_of(2)
            && DIAGONALS
                .iter()
                .any(|diagonal| Self::line_owned_by(cells, diagonal, player))
    }

    fn line_owned_by(cells: &[Cell; 9], line: &[usize; 3], player: Player) -> bool {
        let target = player.to_cell();
        line.iter().all(|&idx| cells[idx] == target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_won_horizontal() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[2] = Cell::X;

        assert!(LineAnalyzer::has_won(&cells, Player::X));
        assert!(!LineAnalyzer::has_won(&cells, Player::O));
    }

    #[test]
    fn test_has_won_vertical() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::O;
        cells[3] = Cell::O;
        cells[6] = Cell::O;

        assert!(LineAnalyzer::has_won(&cells, Player::O));
        assert!(!LineAnalyzer::has_won(&cells, Player::X));
    }

    #[test]
    fn test_has_won_diagonal() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[4] = Cell::X;
        cells[8] = Cell::X;

        assert!(LineAnalyzer::has_won(&cells, Player::X));
        assert!(!LineAnalyzer::has_won(&cells, Player::O));
    }

    #[test]
    fn test_completes_row_and_column() {
        let mut cells = [Cell::Empty; 9];
        cells[3] = Cell::O;
        cells[4] = Cell::O;
        cells[5] = Cell::O;
        assert!(LineAnalyzer::completes_line(&cells, 5, Player::O));

        let mut cells = [Cell::Empty; 9];
        cells[1] = Cell::X;
        cells[4] = Cell::X;
        cells[7] = Cell::X;
        assert!(LineAnalyzer::completes_line(&cells, 7, Player::X));
    }

    #[test]
    fn test_odd_position_skips_diagonals() {
        // X.X
        // .X.
        // X.X with position 1 played: no row/column through 1 is full
        let mut cells = [Cell::Empty; 9];
        for idx in [0, 1, 2, 4, 6, 8] {
            cells[idx] = Cell::X;
        }
        cells[2] = Cell::O;
        assert!(!LineAnalyzer::completes_line(&cells, 1, Player::X));
        // the diagonal 0-4-8 is complete, only an even move reports it
        assert!(LineAnalyzer::completes_line(&cells, 8, Player::X));
    }

    #[test]
    fn test_completes_line_ignores_other_mark() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::O;
        cells[1] = Cell::O;
        cells[2] = Cell::O;
        assert!(!LineAnalyzer::completes_line(&cells, 2, Player::X));
    }
}
