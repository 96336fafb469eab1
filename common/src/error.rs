use thiserror::Error;

/// A rejected move. The game state is left untouched, so the caller can
/// simply ignore the request and prompt again.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    #[error("Cell {0} is out of bounds")]
    OutOfBounds(usize),

    #[error("Cell {0} is already marked")]
    CellOccupied(usize),

    #[error("Game is already over")]
    GameOver,

    #[error("Not your turn")]
    NotYourTurn,

    #[error("A die cannot roll {0}")]
    InvalidRoll(u8),
}
