//! Computer opponent.

use crate::board::Board;
use crate::game::{Game, MoveOutcome};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument, warn};

/// Chooses a column for the computer side.
pub trait MoveSelector: Send {
    /// Picks a playable column, or `None` if the board has none.
    fn select_column(&mut self, board: &Board) -> Option<usize>;

    /// Name used in logs.
    fn name(&self) -> &str;
}

/// Picks uniformly at random among the playable columns.
#[derive(Debug, Clone)]
pub struct RandomMover {
    rng: StdRng,
}

impl RandomMover {
    /// Creates a mover seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a deterministic mover.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomMover {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSelector for RandomMover {
    fn select_column(&mut self, board: &Board) -> Option<usize> {
        // Only sample among columns that can still take a token.
        let playable = board.playable_columns();
        if playable.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..playable.len());
        Some(playable[idx])
    }

    fn name(&self) -> &str {
        "Random"
    }
}

/// Plays the computer's move if it is the computer's turn.
///
/// Returns `None` when the game is not in AI mode, is over, is waiting on the
/// human, or has no playable column left.
#[instrument(skip_all, fields(selector = selector.name(), moves = game.history().len()))]
pub fn take_turn(game: &mut Game, selector: &mut dyn MoveSelector) -> Option<MoveOutcome> {
    if !game.is_ai_turn() {
        debug!("Not the computer's turn");
        return None;
    }

    let column = selector.select_column(game.board())?;
    match game.play(column) {
        Ok(outcome) => {
            info!(column, status = %outcome.status, "Computer moved");
            Some(outcome)
        }
        Err(e) => {
            warn!(column, error = %e, "Computer move rejected");
            None
        }
    }
}
