//! Read-only game view handed to renderers.

use crate::game::Game;
use crate::types::{Cell, Difficulty, GameStatus, Mode, Player};
use serde::Serialize;

/// Copy of everything a view needs, detached from the shared game.
///
/// `cells` is row-major with row 0 at the top.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
    /// Board contents, one inner vector per row.
    pub cells: Vec<Vec<Cell>>,
    /// Player to move, or the last mover once the game is over.
    pub current: Player,
    /// Game status, including the winner.
    pub status: GameStatus,
    /// Mode the game was started in.
    pub mode: Mode,
    /// Difficulty preset.
    pub difficulty: Difficulty,
    /// Red player's name.
    pub red_name: String,
    /// Yellow player's name.
    pub yellow_name: String,
    /// Number of tokens played.
    pub moves: usize,
    /// Columns that still accept a token.
    pub playable: Vec<usize>,
}

impl GameSnapshot {
    /// Captures the current state of `game`.
    pub fn from_game(game: &Game) -> Self {
        let board = game.board();
        Self {
            rows: board.rows(),
            cols: board.cols(),
            cells: board.row_slices().map(<[Cell]>::to_vec).collect(),
            current: game.current_player(),
            status: game.status(),
            mode: game.mode(),
            difficulty: game.difficulty(),
            red_name: game.players().red().clone(),
            yellow_name: game.players().yellow().clone(),
            moves: game.history().len(),
            playable: if game.is_over() {
                Vec::new()
            } else {
                board.playable_columns()
            },
        }
    }

    /// Name of the given side.
    pub fn name(&self, player: Player) -> &str {
        match player {
            Player::Red => &self.red_name,
            Player::Yellow => &self.yellow_name,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        self.status.winner()
    }

    /// Checks if the game ended in a draw.
    pub fn is_draw(&self) -> bool {
        self.status == GameStatus::Draw
    }

    /// Checks if the game is over.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Checks if `column` still accepts a token in this game.
    pub fn is_playable(&self, column: usize) -> bool {
        self.playable.contains(&column)
    }
}
