use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board dimensions must be positive and fit the coordinate type")]
    InvalidDimension,
    #[error("Coordinates are outside the board")]
    OutOfBounds,
    #[error("Lit chance must be within [0, 1]")]
    InvalidProbability,
    #[error("Board rows must be non-empty and of equal length")]
    InvalidBoardShape,
    #[error("Coordinate key must look like `row-col`")]
    InvalidCoordKey,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
