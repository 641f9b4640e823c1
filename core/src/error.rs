use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Too many mines: {mines} requested but the board only has {cells} cells")]
    TooManyMines { mines: CellCount, cells: CellCount },
    #[error("Can't flag a revealed cell")]
    CannotFlagRevealed,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

impl GameError {
    /// Construction-time misconfiguration, as opposed to a rejected move.
    pub const fn is_fatal(self) -> bool {
        matches!(self, Self::TooManyMines { .. })
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
