//! Draw detection.

use super::win::check_winner;
use crate::board::Board;
use tracing::instrument;

/// A draw is a full board without four in a row.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && !check_winner(board)
}
