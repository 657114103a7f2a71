//! Move rejection errors.

/// Reason a move was refused. The game is left untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Column index outside `[0, cols)`.
    #[display("Column {column} is out of range (board has {cols} columns)")]
    InvalidColumn {
        /// Requested column.
        column: usize,
        /// Number of columns on the board.
        cols: usize,
    },

    /// Every cell of the column is occupied.
    #[display("Column {_0} is full")]
    ColumnFull(usize),

    /// The game already has a winner or ended in a draw.
    #[display("Game is already over")]
    GameOver,

    /// No game has been started yet.
    #[display("No game in progress")]
    NoActiveGame,

    /// The computer is still choosing its reply.
    #[display("Waiting for the computer to move")]
    AwaitingComputer,
}

impl MoveError {
    /// Short machine-readable code, used in redirect query strings.
    pub fn code(&self) -> &'static str {
        match self {
            MoveError::InvalidColumn { .. } => "invalid_column",
            MoveError::ColumnFull(_) => "column_full",
            MoveError::GameOver => "game_over",
            MoveError::NoActiveGame => "no_active_game",
            MoveError::AwaitingComputer => "awaiting_computer",
        }
    }
}

impl std::error::Error for MoveError {}
