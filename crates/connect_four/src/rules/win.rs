//! Win detection logic for connect four.

use crate::board::Board;
use crate::types::{Cell, Player};
use tracing::instrument;

/// Number of aligned tokens needed to win.
pub const RUN_LENGTH: usize = 4;

/// Step directions as `(row delta, col delta)`: right, down, down-right and
/// up-right.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// Returns the owner of the first four-in-a-row found on the board.
///
/// Scans every occupied cell in row-major order and looks for a run of
/// [`RUN_LENGTH`] identical tokens starting at that cell in any of the four
/// directions. Longer runs count as well.
#[instrument(skip(board), fields(rows = board.rows(), cols = board.cols()))]
pub fn winner(board: &Board) -> Option<Player> {
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            let Some(Cell::Occupied(player)) = board.get(row, col) else {
                continue;
            };
            if DIRECTIONS
                .iter()
                .any(|&(dr, dc)| run_from(board, row, col, dr, dc, player))
            {
                return Some(player);
            }
        }
    }
    None
}

/// Checks if any player has four in a row.
pub fn check_winner(board: &Board) -> bool {
    winner(board).is_some()
}

fn run_from(board: &Board, row: usize, col: usize, dr: isize, dc: isize, player: Player) -> bool {
    (1..RUN_LENGTH as isize).all(|step| {
        let r = row as isize + dr * step;
        let c = col as isize + dc * step;
        // get() bounds-checks the upper edges
        r >= 0 && c >= 0 && board.get(r as usize, c as usize) == Some(Cell::Occupied(player))
    })
}
