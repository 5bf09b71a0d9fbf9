use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("grid index {index} is outside a grid of {size} cells")]
    IndexOutOfRange { index: usize, size: usize },
    #[error("malformed cell label {0:?}")]
    MalformedLabel(String),
    #[error("target size {size} can never fit a grid of width {width}")]
    InvalidTargetSize { size: usize, width: usize },
    #[error("invalid game configuration: {0}")]
    InvalidConfig(String),
    #[error("session already finished, no more guesses are accepted")]
    SessionFinished,
}

pub type Result<T> = std::result::Result<T, Error>;
