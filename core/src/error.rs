use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid cell id")]
    InvalidCellId,
    #[error("Grid must hold at least one cell")]
    EmptyGrid,
    #[error("Challenge does not fit the grid")]
    ChallengeTooLarge,
    #[error("Timers and attempt limits must be positive")]
    InvalidTiming,
}

pub type Result<T> = core::result::Result<T, GameError>;
