//! Crate-wide error type.

use std::path::PathBuf;

use thiserror::Error;

use super::player::PlayerId;

/// Errors raised by hands, the round engine and the learning agent.
#[derive(Debug, Error)]
pub enum GolfError {
    /// Coordinate access outside a hand's `(row, col)` bounds.
    #[error("position ({row}, {col}) is outside a {rows}x{cols} hand")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Flat index access outside a hand.
    #[error("index {index} is outside a hand of {len} cards")]
    IndexOutOfRange { index: usize, len: usize },

    /// Hand or round setup that cannot be played.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A player answered with a move outside the legal set it was given.
    #[error("{player} made an illegal move: {description}")]
    IllegalMove {
        player: PlayerId,
        description: String,
    },

    /// A learning checkpoint could not be read.
    #[error("model {} could not be loaded: {reason}", path.display())]
    MissingModel { path: PathBuf, reason: String },

    /// A checkpoint was requested before `setup_trainer`.
    #[error("trainer has not been configured")]
    TrainerNotConfigured,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, GolfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = GolfError::OutOfRange {
            row: 2,
            col: 0,
            rows: 2,
            cols: 3,
        };
        assert_eq!(err.to_string(), "position (2, 0) is outside a 2x3 hand");

        let err = GolfError::IllegalMove {
            player: PlayerId::new(1),
            description: "knock".into(),
        };
        assert_eq!(err.to_string(), "Player 1 made an illegal move: knock");
    }
}
