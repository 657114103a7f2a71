//! Game state machine: turn controller and move transactions.

use crate::board::Board;
use crate::error::MoveError;
use crate::rules;
use crate::snapshot::GameSnapshot;
use crate::types::{Difficulty, GameStatus, Mode, Player};
use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Longest player name kept; anything beyond is cut off.
pub const MAX_NAME_LEN: usize = 32;

/// The colour controlled by the computer in [`Mode::Ai`].
pub const AI_PLAYER: Player = Player::Yellow;

/// Options chosen on the start page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GameSettings {
    /// Who plays yellow.
    pub mode: Mode,
    /// Board size preset.
    pub difficulty: Difficulty,
    /// Name for the red side.
    pub red_name: Option<String>,
    /// Name for the yellow side.
    pub yellow_name: Option<String>,
}

/// Display names of both sides.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct Players {
    /// Red side.
    red: String,
    /// Yellow side.
    yellow: String,
}

impl Players {
    /// Builds names from optional form input, falling back to colour names.
    #[instrument]
    pub fn from_settings(settings: &GameSettings) -> Self {
        let yellow_default = match settings.mode {
            Mode::Human => Player::Yellow.title(),
            Mode::Ai => "Computer",
        };
        Self {
            red: clean_name(settings.red_name.as_deref(), Player::Red.title()),
            yellow: clean_name(settings.yellow_name.as_deref(), yellow_default),
        }
    }

    /// Name of the given side.
    pub fn name(&self, player: Player) -> &str {
        match player {
            Player::Red => &self.red,
            Player::Yellow => &self.yellow,
        }
    }
}

fn clean_name(raw: Option<&str>, fallback: &str) -> String {
    match raw.map(str::trim) {
        Some(name) if !name.is_empty() => name.chars().take(MAX_NAME_LEN).collect(),
        _ => fallback.to_string(),
    }
}

/// Record of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveOutcome {
    /// Who moved.
    pub player: Player,
    /// Column the token was dropped into.
    pub column: usize,
    /// Row the token landed in.
    pub row: usize,
    /// Status after the move.
    pub status: GameStatus,
}

/// A single connect-four game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    current: Player,
    status: GameStatus,
    mode: Mode,
    difficulty: Difficulty,
    players: Players,
    history: Vec<usize>,
}

impl Game {
    /// Creates a fresh game. Red moves first.
    #[instrument]
    pub fn new(settings: GameSettings) -> Self {
        let players = Players::from_settings(&settings);
        info!(
            mode = %settings.mode,
            difficulty = %settings.difficulty,
            red = %players.red,
            yellow = %players.yellow,
            "Creating new game"
        );
        Self {
            board: Board::new(settings.difficulty.dimensions()),
            current: Player::Red,
            status: GameStatus::InProgress,
            mode: settings.mode,
            difficulty: settings.difficulty,
            players,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move (or the last mover once the game is over).
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the difficulty preset.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the player names.
    pub fn players(&self) -> &Players {
        &self.players
    }

    /// Columns played so far, in order.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Checks if no further moves are accepted.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Checks if the computer should move next.
    pub fn is_ai_turn(&self) -> bool {
        self.mode == Mode::Ai && self.status == GameStatus::InProgress && self.current == AI_PLAYER
    }

    /// Plays `column` for the current player.
    ///
    /// On success the status is re-evaluated: a four-in-a-row ends the game
    /// with the mover as winner, otherwise a full board is a draw, otherwise
    /// the turn passes to the opponent. The same transition applies to human
    /// and computer moves.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game already ended.
    /// - [`MoveError::InvalidColumn`] / [`MoveError::ColumnFull`] from the board.
    ///
    /// On error the game is unchanged.
    #[instrument(skip(self), fields(player = %self.current, status = %self.status))]
    pub fn play(&mut self, column: usize) -> Result<MoveOutcome, MoveError> {
        if self.is_over() {
            warn!("Move rejected: game is over");
            return Err(MoveError::GameOver);
        }

        let player = self.current;
        let row = self.board.apply_move(column, player).inspect_err(|e| {
            warn!(error = %e, "Move rejected by board");
        })?;
        self.history.push(column);

        if rules::check_winner(&self.board) {
            self.status = GameStatus::Won(player);
            info!(winner = %player, moves = self.history.len(), "Game won");
        } else if rules::is_draw(&self.board) {
            self.status = GameStatus::Draw;
            info!(moves = self.history.len(), "Game drawn");
        } else {
            self.current = player.opponent();
            debug!(next = %self.current, "Turn passed");
        }

        Ok(MoveOutcome {
            player,
            column,
            row,
            status: self.status,
        })
    }

    /// Plays `column` on behalf of a person at the board.
    ///
    /// Same as [`Game::play`], except that in [`Mode::Ai`] the yellow side
    /// belongs to the computer.
    ///
    /// # Errors
    ///
    /// [`MoveError::AwaitingComputer`] while the computer is to move, plus
    /// everything [`Game::play`] returns.
    #[instrument(skip(self))]
    pub fn play_human(&mut self, column: usize) -> Result<MoveOutcome, MoveError> {
        if self.is_ai_turn() {
            warn!("Move rejected: computer to play");
            return Err(MoveError::AwaitingComputer);
        }
        self.play(column)
    }

    /// Read-only view for rendering.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from_game(self)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_names_fall_back_to_colours() {
        let players = Players::from_settings(&GameSettings {
            red_name: Some("   ".to_string()),
            ..GameSettings::default()
        });
        assert_eq!(players.red(), "Red");
        assert_eq!(players.yellow(), "Yellow");
    }

    #[test]
    fn test_ai_side_named_computer() {
        let players = Players::from_settings(&GameSettings {
            mode: Mode::Ai,
            red_name: Some(" Ada ".to_string()),
            ..GameSettings::default()
        });
        assert_eq!(players.name(Player::Red), "Ada");
        assert_eq!(players.name(Player::Yellow), "Computer");
    }

    #[test]
    fn test_long_names_truncated() {
        let players = Players::from_settings(&GameSettings {
            yellow_name: Some("x".repeat(100)),
            ..GameSettings::default()
        });
        assert_eq!(players.yellow().chars().count(), MAX_NAME_LEN);
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut game = Game::default();
        assert!(game.play(42).is_err());
        assert_eq!(game.current_player(), Player::Red);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_ai_turn_only_in_ai_mode() {
        let mut human = Game::default();
        human.play(0).unwrap();
        assert!(!human.is_ai_turn());

        let mut ai = Game::new(GameSettings {
            mode: Mode::Ai,
            ..GameSettings::default()
        });
        assert!(!ai.is_ai_turn());
        ai.play(0).unwrap();
        assert!(ai.is_ai_turn());
    }

    #[test]
    fn test_human_cannot_play_computers_side() {
        let mut game = Game::new(GameSettings {
            mode: Mode::Ai,
            ..GameSettings::default()
        });
        game.play_human(3).unwrap();
        let before = game.clone();
        assert_eq!(game.play_human(3), Err(MoveError::AwaitingComputer));
        assert_eq!(game, before);
    }
}
