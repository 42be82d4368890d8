//! Errors returned by game state transitions.

use thiserror::Error;

use super::board::{Position, MIN_BOARD_SIZE};

/// A rejected game operation.
///
/// Every variant is recoverable: the caller can re-prompt and try again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// Requested board size is below the minimum.
    #[error("board size must be at least {}, got {0}", MIN_BOARD_SIZE)]
    InvalidSize(usize),

    /// Requested board has more slots than fit in memory addressing.
    #[error("board size {0} is too large")]
    BoardTooLarge(usize),

    /// A move was attempted after the game ended.
    #[error("game is already finished")]
    GameFinished,

    /// A coordinate lies outside the board.
    #[error("position {position} is outside the {size}x{size} board")]
    OutOfBounds {
        /// The rejected position.
        position: Position,
        /// Board size.
        size: usize,
    },

    /// The target slot already holds a mark.
    #[error("position {0} is already taken")]
    PositionOccupied(Position),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            GameError::InvalidSize(2).to_string(),
            "board size must be at least 3, got 2"
        );
        assert_eq!(
            GameError::BoardTooLarge(1 << 33).to_string(),
            "board size 8589934592 is too large"
        );
        assert_eq!(
            GameError::OutOfBounds {
                position: Position::new(3, 0),
                size: 3
            }
            .to_string(),
            "position (3, 0) is outside the 3x3 board"
        );
        assert_eq!(
            GameError::PositionOccupied(Position::new(1, 1)).to_string(),
            "position (1, 1) is already taken"
        );
    }
}
