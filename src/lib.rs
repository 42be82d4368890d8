//! # rust-tictactoe
//!
//! A generalized NxN tic-tac-toe engine with an exhaustive minimax opponent.
//!
//! ## Design Principles
//!
//! 1. **Immutable States**: Every move returns a new `GameState`. Nothing in
//!    the search tree is shared mutably.
//!
//! 2. **Any Board Size**: Boards are N x N for any N >= 3; a line must span
//!    the whole board to win.
//!
//! 3. **Deterministic**: The starting player comes from an injected, seeded
//!    RNG, and the search breaks ties by move order.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) state cloning via `im-rs`, so each
//!   search branch owns its own state.
//!
//! - **Absolute Scores**: X maximizes and O minimizes at every ply.
//!
//! ## Modules
//!
//! - `core`: Players, board, game state, errors, RNG
//! - `rules`: Line enumeration and status evaluation
//! - `search`: Minimax with optional pruning and parallel root
//! - `selfplay`: Engine-vs-engine games and records
//! - `api`: Free-function facade for front ends

pub mod api;
pub mod core;
pub mod rules;
pub mod search;
pub mod selfplay;

// Re-export commonly used types
pub use crate::api::{apply_move, available_moves, get_best_move, make_game, opponent};

pub use crate::core::{
    Board, GameError, GameRng, GameState, ParseBoardError, Player, Position, Slot,
    MIN_BOARD_SIZE,
};

pub use crate::rules::{compute_status, winning_line, Line, Status};

pub use crate::search::{
    evaluate, ConfigError, Difficulty, Minimax, Score, SearchConfig, SearchOutcome, SearchStats,
    UNBOUNDED_DEPTH,
};

pub use crate::selfplay::{GameRecord, MatchSummary, MoveRecord, SelfPlayConfig, SelfPlayWorker};
