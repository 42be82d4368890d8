//! Self-play loop: the engine plays both sides.
//!
//! Each side has its own search config, so different difficulties can be
//! matched against each other. An optional random opening diversifies games.

use log::{debug, info, trace};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::{GameError, GameRng, GameState, Player, Position, MIN_BOARD_SIZE};
use crate::search::{ConfigError, Minimax, SearchConfig};

use super::record::{GameRecord, MoveRecord};

/// Configuration for self-play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelfPlayConfig {
    /// Board side length.
    pub board_size: usize,

    /// Search used when X is to move.
    pub x: SearchConfig,

    /// Search used when O is to move.
    pub o: SearchConfig,

    /// Number of opening moves picked uniformly at random instead of searched.
    pub random_opening_plies: usize,

    /// Base seed; game `i` of a batch uses `seed + i`.
    pub seed: u64,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            board_size: MIN_BOARD_SIZE,
            x: SearchConfig::default(),
            o: SearchConfig::default(),
            random_opening_plies: 0,
            seed: 42,
        }
    }
}

impl SelfPlayConfig {
    /// Create a new self-play config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON config; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the board size.
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Use the same search for both sides.
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.x = search.clone();
        self.o = search;
        self
    }

    /// Set the search for one side.
    pub fn with_player_search(mut self, player: Player, search: SearchConfig) -> Self {
        match player {
            Player::X => self.x = search,
            Player::O => self.o = search,
        }
        self
    }

    /// Set the number of random opening moves.
    pub fn with_random_opening(mut self, plies: usize) -> Self {
        self.random_opening_plies = plies;
        self
    }

    /// Set the base seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Search config for a side.
    pub fn search_for(&self, player: Player) -> &SearchConfig {
        match player {
            Player::X => &self.x,
            Player::O => &self.o,
        }
    }

    /// Check both search configs.
    ///
    /// The board size is checked when a game starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.x.validate()?;
        self.o.validate()
    }
}

/// Worker for running self-play games.
#[derive(Clone, Debug)]
pub struct SelfPlayWorker {
    config: SelfPlayConfig,
    x_engine: Minimax,
    o_engine: Minimax,
}

impl SelfPlayWorker {
    /// Create a new self-play worker.
    pub fn new(config: SelfPlayConfig) -> Result<Self, ConfigError> {
        let x_engine = Minimax::new(config.x.clone())?;
        let o_engine = Minimax::new(config.o.clone())?;
        debug!(
            "X searches {} plies, O searches {} plies",
            x_engine.config().max_depth,
            o_engine.config().max_depth
        );
        Ok(Self {
            config,
            x_engine,
            o_engine,
        })
    }

    /// Get the configuration.
    pub fn config(&self) -> &SelfPlayConfig {
        &self.config
    }

    /// Play one game to the end.
    ///
    /// The seed decides the starting player and any random opening moves.
    pub fn play_game(&self, seed: u64) -> Result<GameRecord, GameError> {
        let mut rng = GameRng::new(seed);
        let mut state = GameState::new(self.config.board_size, &mut rng)?;
        let mut record = GameRecord::new(seed, &state);

        let mut x_engine = self.x_engine.clone();
        let mut o_engine = self.o_engine.clone();

        while !state.is_terminal() {
            let player = state.current_player();
            let move_number = record.len();

            let chosen = if move_number < self.config.random_opening_plies {
                let moves: Vec<Position> = state.available_moves().collect();
                rng.choose(&moves).map(|&position| (position, false, 0))
            } else {
                let engine = match player {
                    Player::X => &mut x_engine,
                    Player::O => &mut o_engine,
                };
                engine
                    .best_move(&state)
                    .map(|position| (position, true, engine.stats().nodes))
            };

            let Some((position, searched, nodes)) = chosen else {
                break;
            };

            trace!("game {seed} move {move_number}: {player} plays {position}");
            state = state.apply_move(position)?;
            record.push(MoveRecord {
                player,
                position,
                searched,
                nodes,
            });
        }

        record.finish(&state);
        info!(
            "game {seed}: {} after {} moves",
            record.result,
            record.len()
        );

        Ok(record)
    }

    /// Play `count` games in parallel, seeded `seed`, `seed + 1`, ...
    ///
    /// Records come back in seed order.
    pub fn play_games(&self, count: usize) -> Result<Vec<GameRecord>, GameError> {
        (0..count)
            .into_par_iter()
            .map(|i| self.play_game(self.config.seed.wrapping_add(i as u64)))
            .collect()
    }
}
