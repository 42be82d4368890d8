//! Engine-vs-engine games.
//!
//! ## Overview
//!
//! - **SelfPlayWorker**: plays games with a search config per side
//! - **GameRecord**: the moves and outcome of one game
//! - **MatchSummary**: win/draw tally over a batch
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rust_tictactoe::search::{Difficulty, SearchConfig};
//! use rust_tictactoe::selfplay::{MatchSummary, SelfPlayConfig, SelfPlayWorker};
//! use rust_tictactoe::core::Player;
//!
//! let config = SelfPlayConfig::new()
//!     .with_player_search(Player::X, SearchConfig::for_difficulty(Difficulty::Easy))
//!     .with_player_search(Player::O, SearchConfig::for_difficulty(Difficulty::Hard));
//!
//! let worker = SelfPlayWorker::new(config).unwrap();
//! let records = worker.play_games(10).unwrap();
//! println!("{}", MatchSummary::from_records(&records));
//! ```

pub mod record;
pub mod self_play;

// Re-export main types
pub use record::{GameRecord, MatchSummary, MoveRecord};
pub use self_play::{SelfPlayConfig, SelfPlayWorker};
