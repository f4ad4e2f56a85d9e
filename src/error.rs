use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid board configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Position ({row}, {column}) is out of bounds")]
    OutOfBounds { row: usize, column: usize },
    #[error("Unknown action '{0}', expected 'reveal' or 'flag'")]
    InvalidAction(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
