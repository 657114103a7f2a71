//! Shared, lock-guarded game table.
//!
//! One game per process. Every request reads or mutates it through
//! [`GameTable`], which serializes access with a single async mutex. The only
//! time a move transaction gives the lock up is while the computer "thinks":
//! the lock is released for the delay and re-acquired before the computer's
//! move, after checking that the same game is still waiting on it.

use connect_four::ai::{self, MoveSelector};
use connect_four::{Game, GameSettings, GameSnapshot, MoveError, MoveOutcome, RandomMover};
use derive_new::new;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, error, info, instrument, warn};

/// Moves applied by one `play` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct PlayReport {
    /// The requested move.
    pub human: MoveOutcome,
    /// The computer's reply, if it made one.
    pub computer: Option<MoveOutcome>,
}

struct TableState {
    game: Option<Game>,
    // Bumped on every start and reset.
    generation: u64,
    selector: Box<dyn MoveSelector>,
}

/// Handle to the shared game. Cheap to clone.
#[derive(Clone)]
pub struct GameTable {
    inner: Arc<Mutex<TableState>>,
    ai_delay: Duration,
}

impl std::fmt::Debug for GameTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameTable")
            .field("ai_delay", &self.ai_delay)
            .finish_non_exhaustive()
    }
}

impl GameTable {
    /// Creates an empty table with a randomly playing computer.
    #[instrument]
    pub fn new(ai_delay: Duration) -> Self {
        Self::with_selector(ai_delay, Box::new(RandomMover::new()))
    }

    /// Creates an empty table with a custom computer strategy.
    #[instrument(skip(selector), fields(selector = selector.name()))]
    pub fn with_selector(ai_delay: Duration, selector: Box<dyn MoveSelector>) -> Self {
        info!("Creating game table");
        Self {
            inner: Arc::new(Mutex::new(TableState {
                game: None,
                generation: 0,
                selector,
            })),
            ai_delay,
        }
    }

    /// Replaces the current game (if any) with a fresh one.
    #[instrument(skip(self))]
    pub async fn start(&self, settings: GameSettings) -> GameSnapshot {
        let mut state = self.inner.lock().await;
        let game = Game::new(settings);
        let snapshot = game.snapshot();
        state.game = Some(game);
        state.generation += 1;
        info!(generation = state.generation, "Game started");
        snapshot
    }

    /// Clears the current game.
    #[instrument(skip(self))]
    pub async fn reset(&self) {
        let mut state = self.inner.lock().await;
        state.game = None;
        state.generation += 1;
        info!(generation = state.generation, "Game cleared");
    }

    /// Copy of the current game for rendering, or `None` before a start.
    #[instrument(skip(self))]
    pub async fn snapshot(&self) -> Option<GameSnapshot> {
        let state = self.inner.lock().await;
        state.game.as_ref().map(Game::snapshot)
    }

    /// Plays `column` for the person to move, then lets the computer answer.
    ///
    /// # Errors
    ///
    /// [`MoveError::NoActiveGame`] before a start, otherwise whatever
    /// [`Game::play_human`] refuses. Refused moves change nothing.
    #[instrument(skip(self))]
    pub async fn play(&self, column: usize) -> Result<PlayReport, MoveError> {
        let (human, generation) = {
            let mut state = self.inner.lock().await;
            let generation = state.generation;
            let game = state.game.as_mut().ok_or(MoveError::NoActiveGame)?;
            let human = game.play_human(column)?;
            if !game.is_ai_turn() {
                return Ok(PlayReport::new(human, None));
            }
            (human, generation)
        };

        // The reply runs in its own task so a dropped request cannot leave
        // the game stuck on the computer's turn.
        let table = self.clone();
        let reply = tokio::spawn(async move { table.computer_reply(generation).await });
        let computer = match reply.await {
            Ok(computer) => computer,
            Err(e) => {
                error!(error = %e, "Computer move task failed");
                None
            }
        };

        Ok(PlayReport::new(human, computer))
    }

    #[instrument(skip(self))]
    async fn computer_reply(&self, generation: u64) -> Option<MoveOutcome> {
        debug!(delay = ?self.ai_delay, "Computer thinking");
        tokio::time::sleep(self.ai_delay).await;

        let mut guard = self.inner.lock().await;
        let state = &mut *guard;
        if state.generation != generation {
            warn!(
                expected = generation,
                current = state.generation,
                "Game replaced while computer was thinking"
            );
            return None;
        }
        let game = state.game.as_mut()?;
        ai::take_turn(game, state.selector.as_mut())
    }
}
