//! Crate error type

/// Errors raised while building a game or placing food
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("chain needs at least 3 segments, got {len}")]
    ChainTooShort { len: usize },

    #[error("segment {index} is not one grid step from its successor")]
    ChainNotContiguous { index: usize },

    #[error("a straight chain of {len} segments does not fit the grid")]
    ChainTooLong { len: usize },

    #[error("no free cell left for food")]
    BoardFull,

    #[error("food region has no cells")]
    EmptyRegion,

    #[error("invalid settings: {0}")]
    Settings(String),

    #[error("settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
