//! Core domain types for connect four.

use serde::{Serialize, Serializer};
use tracing::instrument;

/// Player colour. Red always moves first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Player {
    /// Red (moves first).
    Red,
    /// Yellow (moves second, and is the AI side in AI mode).
    Yellow,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Red => Player::Yellow,
            Player::Yellow => Player::Red,
        }
    }

    /// Title-cased colour name for display ("Red", "Yellow").
    pub fn title(self) -> &'static str {
        match self {
            Player::Red => "Red",
            Player::Yellow => "Yellow",
        }
    }
}

/// A single cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Nobody has dropped a token here.
    #[default]
    Empty,
    /// Cell holds a token of the given colour.
    Occupied(Player),
}

impl Cell {
    /// Tri-state label: `empty`, `red` or `yellow`.
    pub fn label(self) -> &'static str {
        match self {
            Cell::Empty => "empty",
            Cell::Occupied(Player::Red) => "red",
            Cell::Occupied(Player::Yellow) => "yellow",
        }
    }

    /// Returns the owner of the cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

// Cells go over the wire as their tri-state label.
impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Board dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Dimensions {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
}

impl Dimensions {
    /// Creates new dimensions.
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }
}

/// Named board-size preset chosen when a game starts.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Classic 6x7 board.
    #[default]
    Easy,
    /// Wide 6x9 board.
    Normal,
    /// Square 7x7 board.
    Hard,
}

impl Difficulty {
    /// Board dimensions for this preset.
    #[instrument]
    pub fn dimensions(self) -> Dimensions {
        match self {
            Difficulty::Easy => Dimensions::new(6, 7),
            Difficulty::Normal => Dimensions::new(6, 9),
            Difficulty::Hard => Dimensions::new(7, 7),
        }
    }

    /// Display label for the start page.
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy (6x7)",
            Difficulty::Normal => "Normal (6x9)",
            Difficulty::Hard => "Hard (7x7)",
        }
    }
}

/// Who plays the yellow side.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Mode {
    /// Two humans share the board.
    #[default]
    Human,
    /// Yellow is played by the computer.
    Ai,
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "state", content = "winner", rename_all = "snake_case")]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Board filled up without four in a row.
    Draw,
}

impl GameStatus {
    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Won(player) => write!(f, "{} wins", player.title()),
            GameStatus::Draw => write!(f, "draw"),
        }
    }
}
