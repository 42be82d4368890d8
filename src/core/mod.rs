//! Core engine types: players, board, state, errors, RNG.
//!
//! This module contains the game state machine. Everything here is a value:
//! transitions return new states and never mutate shared data.

pub mod board;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use board::{Board, ParseBoardError, Position, Slot, MIN_BOARD_SIZE};
pub use error::GameError;
pub use player::Player;
pub use rng::GameRng;
pub use state::GameState;
