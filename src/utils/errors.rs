use thiserror::Error;

pub type GameResult<T> = Result<T, GameError>;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Index {index} is out of bounds for a board of {board_size} fields")]
    OutOfBounds { index: String, board_size: usize },

    #[error("Prompt error: {message}")]
    Prompt { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GameError {
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// `index` keeps the caller's own rendering, so neither a negative
    /// `i64` nor a huge `usize` gets clamped.
    pub fn out_of_bounds<I: ToString>(index: I, board_size: usize) -> Self {
        Self::OutOfBounds {
            index: index.to_string(),
            board_size,
        }
    }

    pub fn prompt<S: Into<String>>(message: S) -> Self {
        Self::Prompt {
            message: message.into(),
        }
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }

    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}
