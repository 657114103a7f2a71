//! Gravity board and move executor.

use crate::error::MoveError;
use crate::types::{Cell, Dimensions, Player};
use serde::Serialize;
use tracing::{debug, instrument};

/// Connect-four grid.
///
/// Cells are stored in row-major order. Row 0 is the top of the board and
/// row `rows - 1` the bottom, so tokens settle towards higher row indices.
/// Every mutation goes through [`Board::apply_move`], which keeps the gravity
/// invariant: a cell below an occupied cell is always occupied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board.
    #[instrument]
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            rows: dimensions.rows,
            cols: dimensions.cols,
            cells: vec![Cell::Empty; dimensions.rows * dimensions.cols],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Board dimensions.
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.rows, self.cols)
    }

    /// Gets the cell at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells.get(row * self.cols + col).copied()
    }

    /// Iterates over the rows from top to bottom.
    pub fn row_slices(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols.max(1))
    }

    /// Checks if a token can still be dropped into `column`.
    pub fn is_column_playable(&self, column: usize) -> bool {
        matches!(self.get(0, column), Some(Cell::Empty))
    }

    /// Checks if the top row is completely occupied.
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| !self.is_column_playable(col))
    }

    /// Columns that still accept a token, in ascending order.
    pub fn playable_columns(&self) -> Vec<usize> {
        (0..self.cols)
            .filter(|&col| self.is_column_playable(col))
            .collect()
    }

    /// Drops a token for `player` into `column`.
    ///
    /// The token lands in the lowest empty row, scanning from the bottom row
    /// upwards. Returns the row it landed in.
    ///
    /// # Errors
    ///
    /// - [`MoveError::InvalidColumn`] if `column >= cols`.
    /// - [`MoveError::ColumnFull`] if the column's top cell is occupied.
    ///
    /// The board is unchanged when an error is returned.
    #[instrument(skip(self), fields(rows = self.rows, cols = self.cols))]
    pub fn apply_move(&mut self, column: usize, player: Player) -> Result<usize, MoveError> {
        if column >= self.cols {
            return Err(MoveError::InvalidColumn {
                column,
                cols: self.cols,
            });
        }

        let cols = self.cols;
        let row = (0..self.rows)
            .rev()
            .find(|&row| self.cells[row * cols + column].is_empty())
            .ok_or(MoveError::ColumnFull(column))?;

        self.cells[row * cols + column] = Cell::Occupied(player);
        debug!(row, "Token placed");
        Ok(row)
    }

    /// Formats the board as plain text, one line per row.
    ///
    /// `.` is empty, `R` red and `Y` yellow. Column indices are printed
    /// underneath.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in self.row_slices() {
            for cell in row {
                result.push(match cell.owner() {
                    None => '.',
                    Some(Player::Red) => 'R',
                    Some(Player::Yellow) => 'Y',
                });
            }
            result.push('\n');
        }
        for col in 0..self.cols {
            result.push_str(&(col % 10).to_string());
        }
        result
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::new(Dimensions::new(6, 7))
    }

    #[test]
    fn test_token_settles_on_bottom_row() {
        let mut board = board();
        assert_eq!(board.apply_move(3, Player::Red), Ok(5));
        assert_eq!(board.get(5, 3), Some(Cell::Occupied(Player::Red)));
        assert_eq!(board.get(4, 3), Some(Cell::Empty));
    }

    #[test]
    fn test_tokens_stack() {
        let mut board = board();
        assert_eq!(board.apply_move(0, Player::Red), Ok(5));
        assert_eq!(board.apply_move(0, Player::Yellow), Ok(4));
        assert_eq!(board.apply_move(0, Player::Red), Ok(3));
        assert_eq!(board.get(4, 0), Some(Cell::Occupied(Player::Yellow)));
    }

    #[test]
    fn test_full_column_rejected_without_change() {
        let mut board = board();
        for i in 0..6 {
            let player = if i % 2 == 0 { Player::Red } else { Player::Yellow };
            board.apply_move(2, player).unwrap();
        }
        let before = board.clone();

        assert_eq!(board.apply_move(2, Player::Red), Err(MoveError::ColumnFull(2)));
        assert_eq!(board, before);
        assert!(!board.is_column_playable(2));
    }

    #[test]
    fn test_out_of_range_column() {
        let mut board = board();
        assert_eq!(
            board.apply_move(7, Player::Red),
            Err(MoveError::InvalidColumn { column: 7, cols: 7 })
        );
        assert!(!board.is_column_playable(7));
        assert_eq!(board, Board::new(Dimensions::new(6, 7)));
    }

    #[test]
    fn test_display_marks_tokens() {
        let mut board = Board::new(Dimensions::new(2, 3));
        board.apply_move(1, Player::Red).unwrap();
        board.apply_move(1, Player::Yellow).unwrap();
        assert_eq!(board.display(), ".Y.\n.R.\n012");
    }
}
