//! Minimax search for rust-tictactoe.
//!
//! ## Overview
//!
//! Exhaustive depth-limited minimax over immutable game states:
//!
//! - **Absolute scores**: X maximizes, O minimizes, regardless of who moves
//! - **Stable tie-breaking**: the earliest of equally good moves is chosen
//! - **Optional alpha-beta**: same answer, fewer nodes
//! - **Optional parallel root**: one rayon task per root move
//!
//! ## Usage
//!
//! ```rust
//! use rust_tictactoe::core::{GameState, Player};
//! use rust_tictactoe::search::{Minimax, SearchConfig};
//!
//! let state = GameState::with_starting_player(3, Player::X).unwrap();
//! let config = SearchConfig::default().with_pruning(true);
//! let mut engine = Minimax::new(config).unwrap();
//!
//! let best = engine.best_move(&state);
//! assert!(best.is_some());
//! println!("searched {} nodes", engine.stats().nodes);
//! ```

pub mod config;
pub mod minimax;
pub mod stats;

// Re-export main types
pub use config::{ConfigError, Difficulty, SearchConfig, UNBOUNDED_DEPTH};
pub use minimax::{evaluate, is_maximizing, Minimax, Score, SearchOutcome, MAXIMIZER};
pub use stats::SearchStats;
