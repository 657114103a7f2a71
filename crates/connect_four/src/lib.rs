//! Connect four game logic.
//!
//! A pure state machine with no knowledge of HTTP or threads:
//!
//! - [`Board`]: gravity grid and move executor
//! - [`rules`]: win and draw detection
//! - [`Game`]: turn controller (`InProgress` → `Won` / `Draw`)
//! - [`ai`]: random computer opponent
//! - [`GameSnapshot`]: read-only copy for renderers
//!
//! # Example
//!
//! ```
//! use connect_four::{Game, GameSettings, GameStatus, Player};
//!
//! let mut game = Game::new(GameSettings::default());
//! for col in [3, 2, 3, 2, 3, 2, 3] {
//!     game.play(col)?;
//! }
//! assert_eq!(game.status(), GameStatus::Won(Player::Red));
//! # Ok::<(), connect_four::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod ai;
mod board;
mod error;
mod game;
pub mod rules;
mod snapshot;
mod types;

pub use ai::{MoveSelector, RandomMover};
pub use board::Board;
pub use error::MoveError;
pub use game::{AI_PLAYER, Game, GameSettings, MAX_NAME_LEN, MoveOutcome, Players};
pub use snapshot::GameSnapshot;
pub use types::{Cell, Difficulty, Dimensions, GameStatus, Mode, Player};
